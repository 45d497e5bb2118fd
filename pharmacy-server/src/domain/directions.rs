//! Deep links into third-party map applications.

use std::fmt;

use super::coordinate::Coordinate;

/// Map application that opens a directions link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapApp {
    Google,
    Apple,
}

impl MapApp {
    /// Parse a lowercase application name (`google` or `apple`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "google" => Some(MapApp::Google),
            "apple" => Some(MapApp::Apple),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MapApp::Google => "google",
            MapApp::Apple => "apple",
        }
    }
}

impl fmt::Display for MapApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for directions from the user's position to a pharmacy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Directions {
    pub origin: Coordinate,
    pub destination: Coordinate,
}

impl Directions {
    pub fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Deep link that opens `app` with a route from origin to destination.
    ///
    /// Only the URL is built; the map application does the routing.
    pub fn url(&self, app: MapApp) -> String {
        match app {
            MapApp::Google => format!(
                "https://www.google.com/maps/?saddr={}&daddr={}&directionsmode=driving",
                self.origin, self.destination
            ),
            MapApp::Apple => format!(
                "http://maps.apple.com/?saddr={}&daddr={}",
                self.origin, self.destination
            ),
        }
    }
}
