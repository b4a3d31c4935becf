//! Error types for the user directory client.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The six access-layer operations, used to tag failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchRandomUsers,
    FetchAllUsers,
    FetchUserById,
    CreateUser,
    UpdateUser,
    DeleteUser,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::FetchRandomUsers => "fetch_random_users",
            Operation::FetchAllUsers => "fetch_all_users",
            Operation::FetchUserById => "fetch_user_by_id",
            Operation::CreateUser => "create_user",
            Operation::UpdateUser => "update_user",
            Operation::DeleteUser => "delete_user",
        }
    }

    /// Message shown when nothing more specific is known about a failure
    pub fn default_message(&self) -> &'static str {
        match self {
            Operation::FetchRandomUsers => "Failed to fetch random users. Please try again.",
            Operation::FetchAllUsers => "Failed to fetch users. Please try again.",
            Operation::FetchUserById => "Failed to fetch user. Please try again.",
            Operation::CreateUser => "Failed to save user. Please try again.",
            Operation::UpdateUser => "Failed to update user. Please try again.",
            Operation::DeleteUser => "Failed to delete user. Please try again.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of an [`ApiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network unreachable, timeout, connection reset
    Transport,
    /// Response received with a non-2xx status
    Http,
    /// Response body did not have the expected shape
    MalformedPayload,
    /// Client could not be constructed
    Config,
}

/// Errors that can occur when talking to the random-user source or the
/// managed user service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request never produced a response (connect failure, timeout, reset)
    #[error("{operation} failed: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status
    #[error("{operation} failed with status {status}")]
    Http {
        operation: Operation,
        status: u16,
        /// `message` field of the error body, when the body had one
        body_message: Option<String>,
    },

    /// Response body missing expected fields or not JSON at all
    #[error("{operation} returned a malformed payload: {detail}")]
    MalformedPayload { operation: Operation, detail: String },

    /// Invalid base URL in the client configuration
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl ApiError {
    pub(crate) fn transport(operation: Operation, source: reqwest::Error) -> Self {
        Self::Transport { operation, source }
    }

    /// Build an HTTP failure, picking the `message` field out of the body if
    /// it is a JSON object carrying a non-empty string there.
    pub(crate) fn http(operation: Operation, status: u16, body: &str) -> Self {
        let body_message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|message| message.as_str())
                    .map(str::to_string)
            })
            .filter(|message| !message.is_empty());

        Self::Http {
            operation,
            status,
            body_message,
        }
    }

    pub(crate) fn malformed(operation: Operation, detail: impl Into<String>) -> Self {
        Self::MalformedPayload {
            operation,
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport { .. } => ErrorKind::Transport,
            ApiError::Http { .. } => ErrorKind::Http,
            ApiError::MalformedPayload { .. } => ErrorKind::MalformedPayload,
            ApiError::InvalidUrl(_) | ApiError::InvalidConfig(_) | ApiError::Build(_) => {
                ErrorKind::Config
            }
        }
    }

    /// Operation that failed, if the error came from one
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ApiError::Transport { operation, .. }
            | ApiError::Http { operation, .. }
            | ApiError::MalformedPayload { operation, .. } => Some(*operation),
            ApiError::InvalidUrl(_) | ApiError::InvalidConfig(_) | ApiError::Build(_) => None,
        }
    }

    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport { source, .. } if source.is_timeout())
    }

    /// Single human-readable message for display.
    ///
    /// Resolution order: the `message` field of the error body, then the
    /// transport-level message, then the operation's default message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Http {
                body_message: Some(message),
                ..
            } => message.clone(),
            ApiError::Http { status, .. } => {
                format!("Request failed with status code {}", status)
            }
            ApiError::Transport { operation, source } => {
                let message = source.to_string();
                if message.is_empty() {
                    operation.default_message().to_string()
                } else {
                    message
                }
            }
            ApiError::MalformedPayload { operation, .. } => {
                operation.default_message().to_string()
            }
            ApiError::InvalidUrl(_) | ApiError::InvalidConfig(_) | ApiError::Build(_) => {
                self.to_string()
            }
        }
    }

    /// Collapsed `{message, status}` view of the error
    pub fn summary(&self) -> ErrorSummary {
        ErrorSummary {
            message: self.message(),
            status: self.status(),
        }
    }
}

/// Serializable `{message, status?}` shape handed to UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorSummary {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
