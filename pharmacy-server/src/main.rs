use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pharmacy_server::config::AppConfig;
use pharmacy_server::pharmacy::PharmacyClient;
use pharmacy_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "pharmacy_server=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let roster = match PharmacyClient::new(config.pharmacy.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to create roster client");
            return ExitCode::FAILURE;
        }
    };

    let app = create_router(AppState::new(roster));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, addr = %config.bind_addr, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, upstream = %config.pharmacy.base_url, "pharmacy server listening");
    info!("  GET /health           - Health check");
    info!("  GET /api/region       - Initial map region");
    info!("  GET /api/pharmacies   - Pharmacies on duty (?offset=<days>)");
    info!("  GET /api/directions   - Directions deep link");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
