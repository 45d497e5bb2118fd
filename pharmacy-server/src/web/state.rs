//! Application state for the web layer.

use std::sync::Arc;

use crate::pharmacy::PharmacyClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Roster endpoint client
    pub roster: Arc<PharmacyClient>,
}

impl AppState {
    pub fn new(roster: PharmacyClient) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }
}
