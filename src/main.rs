use std::process::ExitCode;

use stay_engine::api::{AppState, create_router};
use stay_engine::config::{ConfigLoader, ServerSettings};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let settings = match ServerSettings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            error!(error = %err, "Invalid server settings");
            return ExitCode::FAILURE;
        }
    };

    let config = match ConfigLoader::load(&settings.config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Failed to load hotel configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(
        hotel = %config.hotel().name,
        rooms = config.rooms().len(),
        "Hotel configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let address = format!("0.0.0.0:{}", settings.port);
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(address = %address, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!("Server running on {address}");

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    info!("Server shut down");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}
