//! CLI commands, run against any `UserService`.

use crate::display::{format_profile, format_row};
use anyhow::{anyhow, bail, Context};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use userdir_client::{ApiError, UserService};
use userdir_core::{UserPatch, UserRecord, UserSource, UserStore};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate a batch of random users
    Random,
    /// Save a user written by `random --json` or `show --json`
    Save {
        /// File holding one user or a batch ("-" reads stdin)
        file: PathBuf,
        /// Position in the batch (as listed, starting at 1)
        #[arg(long, value_name = "INDEX")]
        index: Option<usize>,
    },
    /// List saved users
    Saved,
    /// Show one saved user
    Show {
        /// User ID
        id: String,
    },
    /// Change fields of a saved user
    Update {
        /// User ID
        id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        gender: Option<String>,
    },
    /// Delete a saved user
    Delete {
        /// User ID
        id: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Executes commands and keeps what they loaded in a `UserStore`.
pub struct Session<'a, S: UserService + ?Sized> {
    service: &'a S,
    store: UserStore,
    format: OutputFormat,
}

impl<'a, S: UserService + ?Sized> Session<'a, S> {
    pub fn new(service: &'a S, format: OutputFormat) -> Self {
        Self {
            service,
            store: UserStore::new(),
            format,
        }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub async fn run<W: Write>(&mut self, command: Command, out: &mut W) -> anyhow::Result<()> {
        debug!(?command, "Running command");

        match command {
            Command::Random => self.random(out).await,
            Command::Save { file, index } => self.save(&file, index, out).await,
            Command::Saved => self.saved(out).await,
            Command::Show { id } => self.show(&id, out).await,
            Command::Update {
                id,
                email,
                phone,
                gender,
            } => {
                let patch = UserPatch {
                    email,
                    phone,
                    gender,
                    ..UserPatch::default()
                };
                self.update(&id, &patch, out).await
            }
            Command::Delete { id } => self.delete(&id, out).await,
        }
    }

    async fn random<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let users = self.service.fetch_random_users().await?;
        self.store.set(users);
        self.store.set_source(UserSource::Random);
        self.write_list(out)
    }

    /// Save one user read back from `random --json` or `show --json` output.
    async fn save<W: Write>(
        &mut self,
        file: &Path,
        index: Option<usize>,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let users = match read_input(file)? {
            SaveInput::Batch(users) => users,
            SaveInput::Single(user) => vec![*user],
        };
        self.store.set(users);
        self.store.set_source(UserSource::Random);

        let position = match (index, self.store.len()) {
            (Some(position), _) => position,
            (None, 1) => 1,
            (None, 0) => bail!("No users in {}", file.display()),
            (None, count) => bail!("{} holds {} users: pass --index", file.display(), count),
        };

        let user = position
            .checked_sub(1)
            .and_then(|index| self.store.users().get(index))
            .cloned()
            .ok_or_else(|| {
                anyhow!(
                    "No user at index {} (batch has {})",
                    position,
                    self.store.len()
                )
            })?;

        let saved = self.service.create_user(&user).await?;
        info!(user_id = %saved.id, "Saved user");

        match self.format {
            OutputFormat::Json => write_json(out, &saved),
            OutputFormat::Text => {
                writeln!(out, "Saved {} as {}", saved.name.full(), saved.id)?;
                Ok(())
            }
        }
    }

    async fn saved<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let users = self.service.fetch_all_users().await?;
        self.store.set(users);
        self.store.set_source(UserSource::Saved);
        self.write_list(out)
    }

    async fn show<W: Write>(&mut self, id: &str, out: &mut W) -> anyhow::Result<()> {
        let user = self.service.fetch_user_by_id(id).await?;
        self.write_profile(&user, out)?;
        self.store.upsert(user);
        Ok(())
    }

    async fn update<W: Write>(
        &mut self,
        id: &str,
        patch: &UserPatch,
        out: &mut W,
    ) -> anyhow::Result<()> {
        if patch.is_empty() {
            bail!("Nothing to update: pass --email, --phone or --gender");
        }

        let user = self.service.update_user(id, patch).await?;
        self.write_profile(&user, out)?;
        self.store.upsert(user);
        Ok(())
    }

    async fn delete<W: Write>(&mut self, id: &str, out: &mut W) -> anyhow::Result<()> {
        self.service.delete_user(id).await?;
        self.store.remove(id);

        if self.format == OutputFormat::Text {
            writeln!(out, "Deleted {}", id)?;
        }
        Ok(())
    }

    fn write_list<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let users = self.store.users();

        if self.format == OutputFormat::Json {
            return write_json(out, users);
        }

        if users.is_empty() {
            let empty = match self.store.source() {
                UserSource::Random => "No users generated",
                UserSource::Saved => "No saved profiles",
            };
            writeln!(out, "{}", empty)?;
            return Ok(());
        }

        for (index, user) in users.iter().enumerate() {
            writeln!(out, "{}", format_row(Some(index + 1), user))?;
        }
        Ok(())
    }

    fn write_profile<W: Write>(&self, user: &UserRecord, out: &mut W) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(out, user),
            OutputFormat::Text => {
                writeln!(out, "{}", format_profile(user))?;
                Ok(())
            }
        }
    }
}

/// Contents of a file passed to `save`: a listed batch or a single profile.
#[derive(Deserialize)]
#[serde(untagged)]
enum SaveInput {
    Batch(Vec<UserRecord>),
    Single(Box<UserRecord>),
}

fn read_input(file: &Path) -> anyhow::Result<SaveInput> {
    let raw = if file == Path::new("-") {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?
    };

    serde_json::from_str(&raw)
        .with_context(|| format!("{} does not hold users in JSON form", file.display()))
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// User-facing message for a failed command.
///
/// Access-layer failures use the collapsed `ApiError` message; anything else
/// its own display.
pub fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ApiError>() {
        Some(api) => api.message(),
        None => err.to_string(),
    }
}
