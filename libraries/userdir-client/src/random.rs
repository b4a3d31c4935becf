//! Random-user generator operations.

use crate::client::{failed, join_segments, read_json, send};
use crate::error::{ApiError, Operation, Result};
use crate::types::RandomUserResponse;
use reqwest::Client;
use tracing::debug;
use url::Url;
use userdir_core::{normalize_value, UserRecord};

/// Client for the random-user generator.
pub struct RandomUserClient<'a> {
    http: &'a Client,
    base_url: &'a Url,
}

impl<'a> RandomUserClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a Url) -> Self {
        Self { http, base_url }
    }

    /// Fetch `count` generated users.
    ///
    /// Every element is normalized; if any element is malformed the whole
    /// batch fails.
    pub async fn fetch_batch(&self, count: u32) -> Result<Vec<UserRecord>> {
        let operation = Operation::FetchRandomUsers;

        // The generator expects `<base>/?results=N`
        let mut url = join_segments(self.base_url, &[""])?;
        url.query_pairs_mut()
            .append_pair("results", &count.to_string());

        debug!(url = %url, count, "Fetching random users");

        let response = send(operation, self.http.get(url)).await?;
        let body: RandomUserResponse = read_json(operation, response).await?;

        let users = body
            .results
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                normalize_value(raw).map_err(|e| {
                    failed(ApiError::malformed(
                        operation,
                        format!("result {}: {}", index, e),
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(count = users.len(), "Fetched random users");
        Ok(users)
    }
}
