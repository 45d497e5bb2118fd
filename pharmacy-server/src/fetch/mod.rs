//! Remote JSON fetch service.
//!
//! One call performs exactly one HTTP GET and either decodes the body into
//! the caller's chosen type or reports a classified [`FetchError`]:
//! - transport failures (no response at all)
//! - 4xx and otherwise unmatched statuses as client errors
//! - 5xx as server errors
//! - undecodable 2xx bodies as parse errors

mod client;
mod error;

pub use client::FetchService;
pub use error::{FetchError, FetchErrorKind, classify_status};
