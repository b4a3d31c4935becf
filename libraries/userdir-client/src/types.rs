//! Configuration and wire types for the user directory client.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Managed user service used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Public random-user generator
pub const DEFAULT_RANDOM_USER_URL: &str = "https://randomuser.me/api";

/// Users requested from the generator per batch
pub const DEFAULT_RANDOM_BATCH_SIZE: u32 = 10;

/// Per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration for the user directory client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the managed user service (`<api_url>/users`)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Base URL of the random-user generator
    #[serde(default = "default_random_user_url")]
    pub random_user_url: String,

    #[serde(default = "default_random_batch_size")]
    pub random_batch_size: u32,

    /// Timeout applied to every request, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_random_user_url() -> String {
    DEFAULT_RANDOM_USER_URL.to_string()
}

fn default_random_batch_size() -> u32 {
    DEFAULT_RANDOM_BATCH_SIZE
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            random_user_url: default_random_user_url(),
            random_batch_size: default_random_batch_size(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given managed service, other values default.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    pub fn with_random_user_url(mut self, url: impl Into<String>) -> Self {
        self.random_user_url = url.into();
        self
    }

    pub fn with_random_batch_size(mut self, size: u32) -> Self {
        self.random_batch_size = size;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Envelope returned by the random-user generator.
///
/// Elements stay untyped here; each one is validated by the normalizer.
#[derive(Debug, Deserialize)]
pub(crate) struct RandomUserResponse {
    pub results: Vec<serde_json::Value>,
}
