//! Domain types for the pharmacy-on-duty map.
//!
//! These types are validated at construction, so code that receives them
//! can trust their invariants without re-checking.

mod annotation;
mod coordinate;
mod directions;
mod phone;

pub use annotation::PharmacyAnnotation;
pub use coordinate::{Coordinate, InvalidCoordinate};
pub use directions::{Directions, MapApp};
pub use phone::DialNumber;

/// Initial centre of the roster map (the middle of Cyprus).
pub const DEFAULT_MAP_CENTER: (f64, f64) = (35.027522, 33.239529);

/// Radius of the initial map region around [`DEFAULT_MAP_CENTER`], in metres.
pub const DEFAULT_REGION_RADIUS_M: f64 = 200_000.0;
