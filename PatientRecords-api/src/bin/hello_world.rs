use anyhow::Context;
use dotenv::dotenv;
use tracing::info;

use patient_records_api::api::routes::create_hello_app;
use patient_records_api::config::hello_server_config;
use patient_records_api::server::serve;
use patient_records_api::telemetry::init_tracing;

/// Entry point of the hello world demo server
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found or couldn't be read. Using environment variables.");
    }

    init_tracing();
    info!("Starting hello world server");

    let config = hello_server_config().context("Failed to read configuration")?;
    let addr = config.socket_addr();

    serve(create_hello_app(), addr)
        .await
        .with_context(|| format!("Server error on {}", addr))?;

    Ok(())
}
