//! HTTP client construction and the shared download primitive
//!
//! Every network access in the pipeline goes through this module: a GET that
//! returns the response body as text, and a JSON variant layered on top of it
//! for the MediaWiki API endpoints. There are no retries and at most one
//! request is ever in flight; resilience is the caller's concern.

use crate::HarvestError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Builds the HTTP client shared by all pipeline components
///
/// # Arguments
///
/// * `user_agent` - The User-Agent header value to send with every request
///
/// # Errors
///
/// Returns the underlying `reqwest` error if the client cannot be built.
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Downloads a page and returns its body as text
///
/// # Errors
///
/// * [`HarvestError::Status`] - the response carried a non-success HTTP
///   status; the numeric status and the URL are embedded in the error.
/// * [`HarvestError::Transport`] - the request failed before a status was
///   available (connection, DNS, timeout); the original cause is preserved.
pub async fn download(client: &Client, url: &str) -> Result<String, HarvestError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| HarvestError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| HarvestError::Transport {
        url: url.to_string(),
        source,
    })
}

/// Downloads a JSON endpoint and parses the body into a [`Value`]
///
/// A body that is not valid JSON degrades to [`Value::Null`] with a warning
/// rather than failing; callers navigate the value defensively and decide for
/// themselves whether a missing field is an error.
pub async fn download_json(client: &Client, url: Url) -> Result<Value, HarvestError> {
    let body = download(client, url.as_str()).await?;
    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(url = %url, error = %e, "response body is not valid JSON");
            Ok(Value::Null)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client("wikia-harvest/test");
        assert!(client.is_ok());
    }
}
