//! User Directory Client
//!
//! Access layer over the two remote collaborators of the user directory.
//!
//! # Features
//!
//! - **Random users**: fetch a batch from the random-user generator,
//!   normalized into `UserRecord`s
//! - **Managed users**: list, fetch, create, update and delete saved profiles
//! - **Uniform errors**: every failure surfaces as an [`ApiError`] with a
//!   single human-readable [`ApiError::message`]
//!
//! # Example
//!
//! ```ignore
//! use userdir_client::{ClientConfig, UserDirectoryClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UserDirectoryClient::new(ClientConfig::default())?;
//!
//!     let random = client.fetch_random_users().await?;
//!     println!("Generated {} users", random.len());
//!
//!     let saved = client.create_user(&random[0]).await?;
//!     println!("Saved {}", saved.id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod random;
mod service;
mod types;
mod users;

pub use client::UserDirectoryClient;
pub use error::{ApiError, ErrorKind, ErrorSummary, Operation, Result};
pub use service::UserService;
pub use types::{
    ClientConfig, DEFAULT_API_URL, DEFAULT_RANDOM_BATCH_SIZE, DEFAULT_RANDOM_USER_URL,
    DEFAULT_TIMEOUT_MS,
};

// Re-export sub-clients for direct use if needed
pub use random::RandomUserClient;
pub use users::ManagedUserClient;
