//! Conversion from roster DTOs to domain types.

use chrono::NaiveDate;

use crate::domain::{Coordinate, InvalidCoordinate, PharmacyAnnotation};

use super::types::PharmacyRecord;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// A record's coordinates are out of range
    #[error("record {index} ({name}): {source}")]
    InvalidCoordinate {
        index: usize,
        name: String,
        #[source]
        source: InvalidCoordinate,
    },
}

/// The pharmacies on duty for one roster day.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PharmacyList {
    /// Date label taken from the first record, or `None` for an empty roster.
    pub date_label: Option<String>,

    /// Map entries, in the order the endpoint returned them.
    pub annotations: Vec<PharmacyAnnotation>,
}

impl PharmacyList {
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// The date label as a calendar date, if it is in `YYYY-MM-DD` form.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let label = self.date_label.as_deref()?;
        NaiveDate::parse_from_str(label, "%Y-%m-%d").ok()
    }
}

/// Project a single record into a map entry.
///
/// Display fields are copied verbatim; phone numbers keep their leading
/// access-code character.
pub fn project_record(record: &PharmacyRecord) -> Result<PharmacyAnnotation, InvalidCoordinate> {
    let coordinate = Coordinate::new(record.lat, record.lng)?;

    Ok(PharmacyAnnotation::new(
        coordinate,
        record.name.clone(),
        record.address.clone(),
        record.original_address.clone(),
        record.pharmacy_phone.clone(),
        record.home_phone.clone(),
    ))
}

/// Project a decoded roster into a [`PharmacyList`].
///
/// Fails on the first record with invalid coordinates rather than skipping
/// it, so a partially bad roster is never shown as complete.
pub fn project_records(records: Vec<PharmacyRecord>) -> Result<PharmacyList, ConversionError> {
    let date_label = records.first().map(|r| r.date.clone());

    let annotations = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            project_record(record).map_err(|source| ConversionError::InvalidCoordinate {
                index,
                name: record.name.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PharmacyList {
        date_label,
        annotations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, lat: f64, lng: f64) -> PharmacyRecord {
        PharmacyRecord {
            date: "2024-05-01".to_string(),
            name: name.to_string(),
            address: "Main St".to_string(),
            original_address: "Κεντρική".to_string(),
            pharmacy_phone: "+35799000000".to_string(),
            home_phone: "+35722000000".to_string(),
            lat,
            lng,
        }
    }

    #[test]
    fn projection_preserves_coordinate_and_title() {
        let annotation = project_record(&record("X", 35.1, 33.2)).unwrap();
        assert_eq!(annotation.coordinate().latitude(), 35.1);
        assert_eq!(annotation.coordinate().longitude(), 33.2);
        assert_eq!(annotation.title(), "X");
    }

    #[test]
    fn projection_copies_phones_verbatim() {
        let annotation = project_record(&record("X", 35.1, 33.2)).unwrap();
        assert_eq!(annotation.pharmacy_phone(), "+35799000000");
        assert_eq!(annotation.home_phone(), "+35722000000");
        assert_eq!(annotation.original_address(), "Κεντρική");
    }

    #[test]
    fn list_keeps_order_and_label() {
        let list = project_records(vec![
            record("A", 35.0, 33.0),
            record("B", 34.9, 33.1),
            record("C", 34.8, 32.4),
        ])
        .unwrap();

        assert_eq!(list.date_label.as_deref(), Some("2024-05-01"));
        let titles: Vec<_> = list.annotations.iter().map(|a| a.title()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn empty_roster_has_no_label() {
        let list = project_records(Vec::new()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.date_label, None);
        assert_eq!(list.calendar_date(), None);
    }

    #[test]
    fn out_of_range_coordinate_fails() {
        let err = project_records(vec![record("A", 35.0, 33.0), record("B", 135.0, 33.0)])
            .unwrap_err();

        let ConversionError::InvalidCoordinate { index, name, .. } = err;
        assert_eq!(index, 1);
        assert_eq!(name, "B");
    }

    #[test]
    fn calendar_date_parses_iso_label() {
        let list = project_records(vec![record("A", 35.0, 33.0)]).unwrap();
        assert_eq!(
            list.calendar_date(),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }

    #[test]
    fn calendar_date_ignores_free_text_label() {
        let list = PharmacyList {
            date_label: Some("Wednesday 1 May".to_string()),
            annotations: Vec::new(),
        };
        assert_eq!(list.calendar_date(), None);
    }
}
