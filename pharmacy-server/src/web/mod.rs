//! Web layer for the pharmacy-on-duty map.
//!
//! Provides JSON endpoints for the roster, the initial map region and
//! directions deep links.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
