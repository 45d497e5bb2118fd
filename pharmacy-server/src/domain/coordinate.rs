//! Geographic coordinates.

use std::fmt;

/// Error returned when a latitude or longitude is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({latitude}, {longitude}): {reason}")]
pub struct InvalidCoordinate {
    latitude: f64,
    longitude: f64,
    reason: &'static str,
}

/// A WGS84 latitude/longitude pair in degrees.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
/// Values are stored exactly as given; nothing is rounded.
///
/// # Examples
///
/// ```
/// use pharmacy_server::domain::Coordinate;
///
/// let nicosia = Coordinate::new(35.1, 33.2).unwrap();
/// assert_eq!(nicosia.latitude(), 35.1);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, -180.5).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting out-of-range or NaN components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate {
                latitude,
                longitude,
                reason: "latitude must be within [-90, 90]",
            });
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate {
                latitude,
                longitude,
                reason: "longitude must be within [-180, 180]",
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.latitude, self.longitude)
    }
}

/// Formats as `lat,lng`, the form map URLs expect.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_latitude_out_of_range() {
        let err = Coordinate::new(90.0001, 33.0).unwrap_err();
        assert!(err.to_string().contains("latitude"));
        assert!(Coordinate::new(-120.0, 33.0).is_err());
    }

    #[test]
    fn rejects_longitude_out_of_range() {
        let err = Coordinate::new(35.0, 181.0).unwrap_err();
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn rejects_nan() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn display_is_url_form() {
        let c = Coordinate::new(35.027522, 33.239529).unwrap();
        assert_eq!(c.to_string(), "35.027522,33.239529");

        let c = Coordinate::new(35.0, -33.5).unwrap();
        assert_eq!(c.to_string(), "35,-33.5");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// In-range components are kept bit for bit
        #[test]
        fn in_range_is_exact(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let c = Coordinate::new(lat, lng).unwrap();
            prop_assert_eq!(c.latitude().to_bits(), lat.to_bits());
            prop_assert_eq!(c.longitude().to_bits(), lng.to_bits());
        }

        /// Latitudes beyond the poles are rejected
        #[test]
        fn polar_overflow_rejected(lat in 90.000_001f64..1.0e6, lng in -180.0f64..=180.0) {
            prop_assert!(Coordinate::new(lat, lng).is_err());
            prop_assert!(Coordinate::new(-lat, lng).is_err());
        }
    }
}
