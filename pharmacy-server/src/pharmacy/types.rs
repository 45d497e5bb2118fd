//! Roster endpoint response DTOs.
//!
//! These map one-to-one onto the JSON objects in the roster array. Every
//! field is required; a missing or mistyped field fails decoding.

use serde::{Deserialize, Serialize};

/// One pharmacy-on-duty entry as published by the roster endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyRecord {
    /// Roster date, shared by every record in a response (e.g. "2024-05-01").
    pub date: String,

    pub name: String,

    /// Address in display form.
    pub address: String,

    /// Address as published by the source.
    pub original_address: String,

    /// Pharmacy phone with its leading access-code character.
    pub pharmacy_phone: String,

    /// Pharmacist's home phone, same format as `pharmacy_phone`.
    pub home_phone: String,

    pub lat: f64,

    pub lng: f64,
}
