//! Single-request JSON fetcher.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use super::error::{FetchError, classify_status};

/// How much of an undecodable body to keep in the debug log.
const BODY_SNIPPET_CHARS: usize = 500;

/// Performs one HTTP GET per call and decodes the JSON body.
///
/// The service holds no state between calls beyond the connection pool
/// inside `reqwest::Client`, so it can be cloned and used concurrently.
#[derive(Debug, Clone)]
pub struct FetchService {
    http: reqwest::Client,
}

impl FetchService {
    /// Create a fetcher with reqwest's default timeouts.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(None)
    }

    /// Create a fetcher, optionally bounding each request by `timeout`.
    ///
    /// Building the client never touches the network, so its failure is a
    /// setup error rather than a [`FetchError`].
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { http })
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// Non-2xx responses are classified without reading the body.
    pub async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(%url, "fetching");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        trace!(status = status.as_u16(), "response received");

        if let Some(err) = classify_status(status.as_u16()) {
            debug!(status = status.as_u16(), "non-success status");
            return Err(err);
        }

        // Raw bytes: invalid UTF-8 must fail decoding, not be replaced.
        let body = response.bytes().await.map_err(FetchError::Transport)?;

        serde_json::from_slice(&body).map_err(|e| {
            debug!(
                error = %e,
                body = %String::from_utf8_lossy(&body)
                    .chars()
                    .take(BODY_SNIPPET_CHARS)
                    .collect::<String>(),
                "body did not decode"
            );
            FetchError::Parse {
                message: e.to_string(),
            }
        })
    }
}
