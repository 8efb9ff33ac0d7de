pub mod handlers;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tracing::info;

use patient_records_data::repository::{JsonFileStore, RepositoryError};

use crate::config::AppConfig;

/// Create the application router backed by the configured patient document.
///
/// An empty document is written first if none exists yet.
pub async fn create_application(config: &AppConfig) -> Result<Router, RepositoryError> {
    let store = JsonFileStore::new(&config.patients_file);
    store.ensure_exists().await?;
    info!("Serving patient document at {}", store.path().display());

    Ok(routes::create_app(Arc::new(store)))
}
