//! Server configuration from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::pharmacy::PharmacyConfig;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Environment variable names.
pub const ENV_BASE_URL: &str = "PHARMACY_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "PHARMACY_TIMEOUT_SECS";
pub const ENV_BIND_ADDR: &str = "PHARMACY_BIND_ADDR";

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid number of seconds: {value}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub pharmacy: PharmacyConfig,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let mut pharmacy = PharmacyConfig::new();

        if let Some(url) = get(ENV_BASE_URL) {
            pharmacy = pharmacy.with_base_url(url);
        }

        if let Some(value) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: ENV_TIMEOUT_SECS,
                    value: value.clone(),
                })?;
            pharmacy = pharmacy.with_timeout(Duration::from_secs(secs));
        }

        let bind_value = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: ENV_BIND_ADDR,
                value: bind_value.clone(),
            })?;

        Ok(Self {
            pharmacy,
            bind_addr,
        })
    }
}
