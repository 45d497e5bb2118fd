//! Roster endpoint client.
//!
//! Composes the generic [`FetchService`] with the roster URL scheme and the
//! record projection.

use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::fetch::{FetchError, FetchService};

use super::convert::{PharmacyList, project_records};
use super::types::PharmacyRecord;

/// Default roster endpoint.
pub const DEFAULT_BASE_URL: &str = "https://sanstv.ru/pharmacies/data/today.php";

/// Errors building a [`PharmacyClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientSetupError {
    /// The configured base URL does not parse
    #[error("invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration for the roster client.
#[derive(Debug, Clone, PartialEq)]
pub struct PharmacyConfig {
    /// Roster endpoint; the day offset is appended as the `offset` query parameter
    pub base_url: String,
    /// Per-request timeout. `None` keeps reqwest's defaults.
    pub timeout: Option<Duration>,
}

impl PharmacyConfig {
    /// Create a config pointing at the production roster.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for PharmacyConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the pharmacy-on-duty roster.
///
/// Each call issues exactly one request; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct PharmacyClient {
    fetcher: FetchService,
    base_url: Url,
}

impl PharmacyClient {
    /// Create a new roster client with the given configuration.
    pub fn new(config: PharmacyConfig) -> Result<Self, ClientSetupError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| ClientSetupError::InvalidBaseUrl {
                url: config.base_url.clone(),
                message: e.to_string(),
            })?;

        let fetcher = FetchService::with_timeout(config.timeout)?;

        Ok(Self { fetcher, base_url })
    }

    /// The request URL for a day offset (0 = today).
    pub fn roster_url(&self, day_offset: i32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("offset", &day_offset.to_string());
        url
    }

    /// Fetch the roster for `day_offset` and project it into map entries.
    ///
    /// The endpoint resolves the offset to a calendar date. An empty roster
    /// is a success with no date label. Records with out-of-range
    /// coordinates make the whole response a [`FetchError::Parse`].
    pub async fn fetch_pharmacy_list(&self, day_offset: i32) -> Result<PharmacyList, FetchError> {
        let url = self.roster_url(day_offset);

        let records: Vec<PharmacyRecord> = self.fetcher.fetch(url).await?;
        debug!(day_offset, count = records.len(), "roster decoded");

        project_records(records).map_err(|e| FetchError::Parse {
            message: e.to_string(),
        })
    }
}
