use anyhow::Context;
use dotenv::dotenv;
use tracing::info;

use patient_records_api::api::create_application;
use patient_records_api::api::handlers::health::initialize_server_start_time;
use patient_records_api::config::AppConfig;
use patient_records_api::server::serve;
use patient_records_api::telemetry::init_tracing;

/// Entry point of the patient records API server
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found or couldn't be read. Using environment variables.");
    }

    init_tracing();
    info!("Starting patient records API server");

    let config = AppConfig::from_env().context("Failed to read configuration")?;

    initialize_server_start_time();

    let app = create_application(&config)
        .await
        .with_context(|| format!("Failed to prepare {}", config.patients_file.display()))?;

    let addr = config.server.socket_addr();
    serve(app, addr)
        .await
        .with_context(|| format!("Server error on {}", addr))?;

    Ok(())
}
