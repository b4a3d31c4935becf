//! Main user directory client.

use crate::error::{ApiError, Operation, Result};
use crate::random::RandomUserClient;
use crate::types::ClientConfig;
use crate::users::ManagedUserClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use userdir_core::{UserPatch, UserRecord};

/// Client for the random-user generator and the managed user service.
///
/// One `reqwest::Client` with the configured timeout is shared by both
/// collaborators. Every operation is a single attempt: no retries.
///
/// # Example
///
/// ```ignore
/// use userdir_client::{ClientConfig, UserDirectoryClient};
///
/// let client = UserDirectoryClient::new(ClientConfig::new("http://localhost:5000/api"))?;
///
/// let users = client.fetch_all_users().await?;
/// for user in &users {
///     println!("{} {}", user.id, user.email);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct UserDirectoryClient {
    http: Client,
    api_url: Url,
    random_user_url: Url,
    config: ClientConfig,
}

impl UserDirectoryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api_url = parse_base_url(&config.api_url)?;
        let random_user_url = parse_base_url(&config.random_user_url)?;
        if config.timeout_ms == 0 {
            return Err(ApiError::InvalidConfig(
                "timeout_ms must be greater than zero".into(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .user_agent(format!("UserDirectory/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Build)?;

        debug!(
            api_url = %api_url,
            random_user_url = %random_user_url,
            timeout_ms = config.timeout_ms,
            "Created user directory client"
        );

        Ok(Self {
            http,
            api_url,
            random_user_url,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL of the managed user service, trailing slash removed.
    pub fn api_url(&self) -> &str {
        self.api_url.as_str().trim_end_matches('/')
    }

    /// Sub-client for the random-user generator.
    pub fn random(&self) -> RandomUserClient<'_> {
        RandomUserClient::new(&self.http, &self.random_user_url)
    }

    /// Sub-client for the managed user service.
    pub fn users(&self) -> ManagedUserClient<'_> {
        ManagedUserClient::new(&self.http, &self.api_url)
    }

    /// Fetch one batch of random users, normalized, in source order.
    pub async fn fetch_random_users(&self) -> Result<Vec<UserRecord>> {
        self.random()
            .fetch_batch(self.config.random_batch_size)
            .await
    }

    /// Fetch every saved user.
    pub async fn fetch_all_users(&self) -> Result<Vec<UserRecord>> {
        self.users().list().await
    }

    pub async fn fetch_user_by_id(&self, id: &str) -> Result<UserRecord> {
        self.users().get(id).await
    }

    /// Save a user. Returns the record as stored by the service.
    pub async fn create_user(&self, user: &UserRecord) -> Result<UserRecord> {
        self.users().create(user).await
    }

    pub async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<UserRecord> {
        self.users().update(id, patch).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.users().delete(id).await
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    if raw.is_empty() {
        return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
    }

    let url = Url::parse(raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ApiError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    Ok(url)
}

/// Append path segments to a base URL, percent-encoding each one.
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidUrl(format!("{} cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send one request and reject any non-2xx response.
pub(crate) async fn send(operation: Operation, request: RequestBuilder) -> Result<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| failed(ApiError::transport(operation, e)))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(failed(ApiError::http(operation, status.as_u16(), &body)))
}

/// Read the whole body and decode it as JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(
    operation: Operation,
    response: Response,
) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| failed(ApiError::transport(operation, e)))?;

    serde_json::from_slice(&bytes).map_err(|e| failed(ApiError::malformed(operation, e.to_string())))
}

pub(crate) fn failed(err: ApiError) -> ApiError {
    debug!(
        operation = ?err.operation(),
        kind = ?err.kind(),
        status = ?err.status(),
        error = %err,
        "Request failed"
    );
    err
}
