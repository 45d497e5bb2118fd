//! Map-ready pharmacy entries.

use super::coordinate::Coordinate;
use super::phone::DialNumber;

/// A pharmacy on duty, ready to be placed on a map.
///
/// This is a read-only projection: fields are set once at construction and
/// exposed through accessors. Phone numbers keep their displayed form; use
/// [`PharmacyAnnotation::pharmacy_dial`] and [`PharmacyAnnotation::home_dial`]
/// for the dialable form.
#[derive(Debug, Clone, PartialEq)]
pub struct PharmacyAnnotation {
    coordinate: Coordinate,
    title: String,
    address: String,
    original_address: String,
    pharmacy_phone: String,
    home_phone: String,
}

impl PharmacyAnnotation {
    pub fn new(
        coordinate: Coordinate,
        title: impl Into<String>,
        address: impl Into<String>,
        original_address: impl Into<String>,
        pharmacy_phone: impl Into<String>,
        home_phone: impl Into<String>,
    ) -> Self {
        Self {
            coordinate,
            title: title.into(),
            address: address.into(),
            original_address: original_address.into(),
            pharmacy_phone: pharmacy_phone.into(),
            home_phone: home_phone.into(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Display title (the pharmacy name).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Address in display form.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Address as published by the source, which may differ from [`Self::address`].
    pub fn original_address(&self) -> &str {
        &self.original_address
    }

    pub fn pharmacy_phone(&self) -> &str {
        &self.pharmacy_phone
    }

    pub fn home_phone(&self) -> &str {
        &self.home_phone
    }

    pub fn pharmacy_dial(&self) -> Option<DialNumber> {
        DialNumber::from_display(&self.pharmacy_phone)
    }

    pub fn home_dial(&self) -> Option<DialNumber> {
        DialNumber::from_display(&self.home_phone)
    }
}
