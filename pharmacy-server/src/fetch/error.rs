//! Fetch error types.

use std::fmt;

/// Errors from a single fetch round trip.
///
/// Every variant is terminal for the request that produced it. Nothing in
/// this layer retries.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The connection failed before a response was obtained
    /// (DNS, TLS, connection reset, timeout), or the body could not be read.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a 4xx status, or any other non-2xx status
    /// outside the server range.
    #[error("client error: HTTP {status}")]
    Client { status: u16 },

    /// The server answered with a 5xx status.
    #[error("server error: HTTP {status}")]
    Server { status: u16 },

    /// The response was 2xx but the body did not decode into the expected shape.
    #[error("parse error: {message}")]
    Parse { message: String },
}

/// Which bucket a [`FetchError`] falls into, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    Transport,
    Client,
    Server,
    Parse,
}

impl FetchErrorKind {
    /// Stable lowercase name, used in JSON error bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::Transport => "transport",
            FetchErrorKind::Client => "client",
            FetchErrorKind::Server => "server",
            FetchErrorKind::Parse => "parse",
        }
    }
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchError {
    /// The classification bucket of this error.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport(_) => FetchErrorKind::Transport,
            FetchError::Client { .. } => FetchErrorKind::Client,
            FetchError::Server { .. } => FetchErrorKind::Server,
            FetchError::Parse { .. } => FetchErrorKind::Parse,
        }
    }

    /// The upstream HTTP status, for the variants that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Client { status } | FetchError::Server { status } => Some(*status),
            FetchError::Transport(_) | FetchError::Parse { .. } => None,
        }
    }
}

/// Classify a non-2xx status code.
///
/// Returns `None` for 2xx statuses, which are not errors. Anything in
/// 500..=599 is a server error; every other status is a client error.
pub fn classify_status(status: u16) -> Option<FetchError> {
    match status {
        200..=299 => None,
        500..=599 => Some(FetchError::Server { status }),
        _ => Some(FetchError::Client { status }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::Client { status: 404 };
        assert_eq!(err.to_string(), "client error: HTTP 404");

        let err = FetchError::Server { status: 503 };
        assert_eq!(err.to_string(), "server error: HTTP 503");

        let err = FetchError::Parse {
            message: "missing field `lat`".into(),
        };
        assert!(err.to_string().contains("parse error"));
        assert!(err.to_string().contains("missing field `lat`"));
    }

    #[test]
    fn success_is_not_classified() {
        assert!(classify_status(200).is_none());
        assert!(classify_status(204).is_none());
        assert!(classify_status(299).is_none());
    }

    #[test]
    fn client_range() {
        let err = classify_status(400).unwrap();
        assert_eq!(err.kind(), FetchErrorKind::Client);
        assert_eq!(err.status(), Some(400));

        let err = classify_status(499).unwrap();
        assert_eq!(err.kind(), FetchErrorKind::Client);
        assert_eq!(err.status(), Some(499));
    }

    #[test]
    fn server_range() {
        let err = classify_status(500).unwrap();
        assert_eq!(err.kind(), FetchErrorKind::Server);
        assert_eq!(err.status(), Some(500));

        let err = classify_status(599).unwrap();
        assert_eq!(err.kind(), FetchErrorKind::Server);
    }

    #[test]
    fn unmatched_statuses_fall_back_to_client() {
        for status in [100, 199, 304, 399, 600, 999] {
            let err = classify_status(status).unwrap();
            assert_eq!(err.kind(), FetchErrorKind::Client, "status {status}");
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn parse_has_no_status() {
        let err = FetchError::Parse {
            message: "x".into(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(err.kind().as_str(), "parse");
    }
}
