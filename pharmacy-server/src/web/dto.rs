//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::PharmacyAnnotation;
use crate::pharmacy::PharmacyList;

/// Query for the roster endpoint.
#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    /// Day offset (0 = today, negative = past days)
    pub offset: Option<i32>,
}

/// The pharmacies on duty for one day.
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterResponse {
    /// Roster date label; null for an empty roster
    pub date: Option<String>,

    /// Pharmacies in roster order
    pub pharmacies: Vec<PharmacyResult>,
}

/// One pharmacy in roster results.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyResult {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub address: String,
    pub original_address: String,

    /// Pharmacy phone as displayed
    pub pharmacy_phone: String,

    /// Home phone as displayed
    pub home_phone: String,

    /// `tel://` URI for the pharmacy phone
    pub pharmacy_dial: Option<String>,

    /// `tel://` URI for the home phone
    pub home_dial: Option<String>,
}

/// Query for a directions deep link.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsQuery {
    pub from_lat: f64,
    pub from_lng: f64,
    pub to_lat: f64,
    pub to_lng: f64,

    /// `google` or `apple`; defaults to `google`
    pub app: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DirectionsResponse {
    pub app: String,
    pub url: String,
}

/// Initial map region.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponse {
    pub lat: f64,
    pub lng: f64,
    pub radius_m: f64,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Upstream failure bucket (`transport`, `client`, `server`, `parse`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Upstream HTTP status, where one was received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl PharmacyResult {
    pub fn from_annotation(annotation: &PharmacyAnnotation) -> Self {
        let coordinate = annotation.coordinate();

        Self {
            lat: coordinate.latitude(),
            lng: coordinate.longitude(),
            title: annotation.title().to_string(),
            address: annotation.address().to_string(),
            original_address: annotation.original_address().to_string(),
            pharmacy_phone: annotation.pharmacy_phone().to_string(),
            home_phone: annotation.home_phone().to_string(),
            pharmacy_dial: annotation.pharmacy_dial().map(|n| n.tel_uri()),
            home_dial: annotation.home_dial().map(|n| n.tel_uri()),
        }
    }
}

impl RosterResponse {
    pub fn from_list(list: &PharmacyList) -> Self {
        Self {
            date: list.date_label.clone(),
            pharmacies: list
                .annotations
                .iter()
                .map(PharmacyResult::from_annotation)
                .collect(),
        }
    }
}
