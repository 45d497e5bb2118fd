//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{
    Coordinate, DEFAULT_MAP_CENTER, DEFAULT_REGION_RADIUS_M, Directions, MapApp,
};
use crate::fetch::{FetchError, FetchErrorKind};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/region", get(region))
        .route("/api/pharmacies", get(pharmacies))
        .route("/api/directions", get(directions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Initial map region.
async fn region() -> Json<RegionResponse> {
    let (lat, lng) = DEFAULT_MAP_CENTER;
    Json(RegionResponse {
        lat,
        lng,
        radius_m: DEFAULT_REGION_RADIUS_M,
    })
}

/// Pharmacies on duty for a day offset.
///
/// One upstream request per call; the result is never cached.
async fn pharmacies(
    State(state): State<AppState>,
    Query(query): Query<RosterQuery>,
) -> Result<Json<RosterResponse>, AppError> {
    let day_offset = query.offset.unwrap_or(0);
    let list = state.roster.fetch_pharmacy_list(day_offset).await?;
    Ok(Json(RosterResponse::from_list(&list)))
}

/// Deep link for directions in a map application.
async fn directions(Query(query): Query<DirectionsQuery>) -> Result<Json<DirectionsResponse>, AppError> {
    let app = match query.app.as_deref() {
        None => MapApp::Google,
        Some(name) => MapApp::parse(name).ok_or_else(|| AppError::BadRequest {
            message: format!("Unknown map app: {name}"),
        })?,
    };

    let origin = Coordinate::new(query.from_lat, query.from_lng).map_err(|e| {
        AppError::BadRequest {
            message: format!("Invalid origin: {e}"),
        }
    })?;
    let destination = Coordinate::new(query.to_lat, query.to_lng).map_err(|e| {
        AppError::BadRequest {
            message: format!("Invalid destination: {e}"),
        }
    })?;

    let url = Directions::new(origin, destination).url(app);

    Ok(Json(DirectionsResponse {
        app: app.as_str().to_string(),
        url,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream(FetchError),
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::Upstream(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: message.clone(),
                    kind: None,
                    status: None,
                },
            ),
            AppError::Upstream(e) => {
                let status = match e.kind() {
                    FetchErrorKind::Transport => StatusCode::SERVICE_UNAVAILABLE,
                    FetchErrorKind::Client | FetchErrorKind::Server | FetchErrorKind::Parse => {
                        StatusCode::BAD_GATEWAY
                    }
                };
                (
                    status,
                    ErrorResponse {
                        error: format!("Loading data error: {e}"),
                        kind: Some(e.kind().as_str().to_string()),
                        status: e.status(),
                    },
                )
            }
        };

        warn!(status = status.as_u16(), error = %body.error, "request failed");

        (status, Json(body)).into_response()
    }
}
