//! Pharmacy-on-duty roster retrieval.
//!
//! The roster endpoint takes a signed day offset (0 = today) and returns a
//! JSON array of pharmacy records for the calendar day it resolves. Every
//! record in one response carries the same date label.

mod client;
mod convert;
mod types;

pub use client::{ClientSetupError, DEFAULT_BASE_URL, PharmacyClient, PharmacyConfig};
pub use convert::{ConversionError, PharmacyList, project_record, project_records};
pub use types::PharmacyRecord;
