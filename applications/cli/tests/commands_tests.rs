//! Command tests against a mocked `UserService`.

use async_trait::async_trait;
use mockall::mock;
use userdir_cli::commands::{error_message, Command, OutputFormat, Session};
use userdir_client::{ApiError, Operation, Result, UserService};
use userdir_core::{UserPatch, UserRecord, UserSource};

mock! {
    pub Service {}

    #[async_trait]
    impl UserService for Service {
        async fn fetch_random_users(&self) -> Result<Vec<UserRecord>>;
        async fn fetch_all_users(&self) -> Result<Vec<UserRecord>>;
        async fn fetch_user_by_id(&self, id: &str) -> Result<UserRecord>;
        async fn create_user(&self, user: &UserRecord) -> Result<UserRecord>;
        async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<UserRecord>;
        async fn delete_user(&self, id: &str) -> Result<()>;
    }
}

fn user(id: &str, first: &str) -> UserRecord {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": { "title": "Ms", "first": first, "last": "Doe" },
        "email": format!("{}@example.com", first.to_lowercase()),
        "phone": "555",
        "gender": "female",
        "picture": { "thumbnail": "t.jpg", "large": "l.jpg" },
        "location": { "country": "US", "city": "Austin", "state": "Texas" },
        "dob": { "date": "1990-01-01T00:00:00.000Z", "age": 34 }
    }))
    .unwrap()
}

fn output(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).unwrap()
}

// =============================================================================
// Random Command Tests
// =============================================================================

mod random {
    use super::*;

    #[tokio::test]
    async fn test_lists_batch_and_stores_it() {
        let mut service = MockService::new();
        service
            .expect_fetch_random_users()
            .times(1)
            .returning(|| Ok(vec![user("ID1", "Ann"), user("ID2", "Bea")]));
        service.expect_create_user().never();

        let mut session = Session::new(&service, OutputFormat::Text);
        let mut out = Vec::new();
        session
            .run(Command::Random, &mut out)
            .await
            .unwrap();

        let text = output(out);
        assert!(text.contains("  1. ID1  Ms Ann Doe  ann@example.com  US"));
        assert!(text.contains("  2. ID2  Ms Bea Doe  bea@example.com  US"));
        assert_eq!(session.store().len(), 2);
        assert_eq!(session.store().source(), UserSource::Random);
    }

    #[tokio::test]
    async fn test_json_output() {
        let mut service = MockService::new();
        service
            .expect_fetch_random_users()
            .returning(|| Ok(vec![user("ID1", "Ann")]));

        let mut session = Session::new(&service, OutputFormat::Json);
        let mut out = Vec::new();
        session
            .run(Command::Random, &mut out)
            .await
            .unwrap();

        let users: Vec<UserRecord> = serde_json::from_slice(&out).unwrap();
        assert_eq!(users, vec![user("ID1", "Ann")]);
    }
}

// =============================================================================
// Save Command Tests
// =============================================================================

mod save {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    /// Run `random --json` and keep its output in a file, the way a user
    /// pipes a listing to disk before picking from it.
    async fn listed_batch(users: Vec<UserRecord>) -> NamedTempFile {
        let mut service = MockService::new();
        service
            .expect_fetch_random_users()
            .times(1)
            .returning(move || Ok(users.clone()));

        let mut session = Session::new(&service, OutputFormat::Json);
        let mut listing = Vec::new();
        session.run(Command::Random, &mut listing).await.unwrap();

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&listing).unwrap();
        file
    }

    fn save(file: &NamedTempFile, index: Option<usize>) -> Command {
        Command::Save {
            file: file.path().to_path_buf(),
            index,
        }
    }

    #[tokio::test]
    async fn test_saves_the_listed_user() {
        let listed = vec![user("ID1", "Ann"), user("ID2", "Bea"), user("ID3", "Cat")];
        let file = listed_batch(listed.clone()).await;

        let expected = listed[1].clone();
        let mut service = MockService::new();
        service.expect_fetch_random_users().never();
        service
            .expect_create_user()
            .withf(move |user: &UserRecord| *user == expected)
            .times(1)
            .returning(|user| {
                let mut stored = user.clone();
                stored.id = "65f0".to_string();
                Ok(stored)
            });

        let mut session = Session::new(&service, OutputFormat::Text);
        let mut out = Vec::new();
        session.run(save(&file, Some(2)), &mut out).await.unwrap();

        assert_eq!(output(out), "Saved Ms Bea Doe as 65f0\n");
        assert_eq!(session.store().len(), 3);
    }

    #[tokio::test]
    async fn test_single_profile_needs_no_index() {
        let mut file = NamedTempFile::new().unwrap();
        serde_json::to_writer(&mut file, &user("ID7", "Dee")).unwrap();

        let mut service = MockService::new();
        service
            .expect_create_user()
            .withf(|user: &UserRecord| user.id == "ID7")
            .times(1)
            .returning(|user| Ok(user.clone()));

        let mut session = Session::new(&service, OutputFormat::Json);
        let mut out = Vec::new();
        session.run(save(&file, None), &mut out).await.unwrap();

        let saved: UserRecord = serde_json::from_slice(&out).unwrap();
        assert_eq!(saved, user("ID7", "Dee"));
    }

    #[tokio::test]
    async fn test_batch_without_index_is_rejected() {
        let file = listed_batch(vec![user("ID1", "Ann"), user("ID2", "Bea")]).await;

        let mut service = MockService::new();
        service.expect_create_user().never();

        let mut session = Session::new(&service, OutputFormat::Text);
        let mut out = Vec::new();
        let err = session.run(save(&file, None), &mut out).await.unwrap_err();

        assert!(error_message(&err).ends_with("holds 2 users: pass --index"));
    }

    #[tokio::test]
    async fn test_index_out_of_range() {
        let file = listed_batch(vec![user("ID1", "Ann")]).await;

        let mut service = MockService::new();
        service.expect_create_user().never();

        let mut session = Session::new(&service, OutputFormat::Text);
        let mut out = Vec::new();

        for position in [0, 5] {
            let err = session
                .run(save(&file, Some(position)), &mut out)
                .await
                .unwrap_err();
            assert!(error_message(&err).contains("No user at index"));
        }
    }

    #[tokio::test]
    async fn test_unreadable_input() {
        let mut service = MockService::new();
        service.expect_create_user().never();

        let mut session = Session::new(&service, OutputFormat::Text);
        let mut out = Vec::new();

        let err = session
            .run(
                Command::Save {
                    file: PathBuf::from("/nonexistent/users.json"),
                    index: None,
                },
                &mut out,
            )
            .await
            .unwrap_err();
        assert!(error_message(&err).starts_with("Failed to read"));

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Ms Ann Doe").unwrap();
        let err = session.run(save(&file, None), &mut out).await.unwrap_err();
        assert!(error_message(&err).contains("does not hold users"));
    }
}

// =============================================================================
// Saved Users Command Tests
// =============================================================================

mod saved {
    use super::*;

    #[tokio::test]
    async fn test_empty_saved_list() {
        let mut service = MockService::new();
        service.expect_fetch_all_users().returning(|| Ok(Vec::new()));

        let mut session = Session::new(&service, OutputFormat::Text);
        let mut out = Vec::new();
        session.run(Command::Saved, &mut out).await.unwrap();

        assert_eq!(output(out), "No saved profiles\n");
        assert_eq!(session.store().source(), UserSource::Saved);
    }

    #[tokio::test]
    async fn test_show_profile() {
        let mut service = MockService::new();
        service
            .expect_fetch_user_by_id()
            .withf(|id: &str| id == "ID1")
            .returning(|_| Ok(user("ID1", "Ann")));

        let mut session = Session::new(&service, OutputFormat::Text);
        let mut out = Vec::new();
        session
            .run(
                Command::Show {
                    id: "ID1".to_string(),
                },
                &mut out,
            )
            .await
            .unwrap();

        let text = output(out);
        assert!(text.starts_with("Ms Ann Doe\n"));
        assert!(text.contains("born:     Jan 1, 1990 (age 34)"));
        assert!(session.store().get("ID1").is_some());
    }

    #[tokio::test]
    async fn test_update_sends_patch() {
        let mut service = MockService::new();
        service
            .expect_update_user()
            .withf(|id: &str, patch: &UserPatch| {
                id == "42" && *patch == UserPatch::new().with_phone("999")
            })
            .times(1)
            .returning(|_, _| {
                let mut updated = user("42", "Ann");
                updated.phone = "999".to_string();
                Ok(updated)
            });

        let mut session = Session::new(&service, OutputFormat::Text);
        let mut out = Vec::new();
        session
            .run(
                Command::Update {
                    id: "42".to_string(),
                    email: None,
                    phone: Some("999".to_string()),
                    gender: None,
                },
                &mut out,
            )
            .await
            .unwrap();

        assert!(output(out).contains("phone:    999"));
    }

    #[tokio::test]
    async fn test_update_without_fields_is_rejected() {
        let mut service = MockService::new();
        service.expect_update_user().never();

        let mut session = Session::new(&service, OutputFormat::Text);
        let mut out = Vec::new();
        let err = session
            .run(
                Command::Update {
                    id: "42".to_string(),
                    email: None,
                    phone: None,
                    gender: None,
                },
                &mut out,
            )
            .await
            .unwrap_err();

        assert!(error_message(&err).starts_with("Nothing to update"));
    }

    #[tokio::test]
    async fn test_delete_removes_from_store() {
        let mut service = MockService::new();
        service
            .expect_fetch_all_users()
            .returning(|| Ok(vec![user("ID1", "Ann"), user("ID2", "Bea")]));
        service
            .expect_delete_user()
            .withf(|id: &str| id == "ID1")
            .times(1)
            .returning(|_| Ok(()));

        let mut session = Session::new(&service, OutputFormat::Text);
        let mut out = Vec::new();
        session.run(Command::Saved, &mut out).await.unwrap();
        session
            .run(
                Command::Delete {
                    id: "ID1".to_string(),
                },
                &mut out,
            )
            .await
            .unwrap();

        assert!(output(out).ends_with("Deleted ID1\n"));
        assert!(session.store().get("ID1").is_none());
        assert_eq!(session.store().len(), 1);
    }
}

// =============================================================================
// Error Reporting Tests
// =============================================================================

mod errors {
    use super::*;

    #[tokio::test]
    async fn test_api_error_uses_collapsed_message() {
        let mut service = MockService::new();
        service.expect_fetch_all_users().returning(|| {
            Err(ApiError::MalformedPayload {
                operation: Operation::FetchAllUsers,
                detail: "expected a sequence".to_string(),
            })
        });

        let mut session = Session::new(&service, OutputFormat::Text);
        let mut out = Vec::new();
        let err = session.run(Command::Saved, &mut out).await.unwrap_err();

        assert_eq!(
            error_message(&err),
            "Failed to fetch users. Please try again."
        );
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_store() {
        let mut service = MockService::new();
        service
            .expect_fetch_all_users()
            .returning(|| Ok(vec![user("ID1", "Ann")]));
        service.expect_delete_user().returning(|_| {
            Err(ApiError::Http {
                operation: Operation::DeleteUser,
                status: 404,
                body_message: Some("User not found".to_string()),
            })
        });

        let mut session = Session::new(&service, OutputFormat::Text);
        let mut out = Vec::new();
        session.run(Command::Saved, &mut out).await.unwrap();

        let err = session
            .run(
                Command::Delete {
                    id: "ID1".to_string(),
                },
                &mut out,
            )
            .await
            .unwrap_err();

        assert_eq!(error_message(&err), "User not found");
        assert_eq!(session.store().len(), 1);
    }
}
