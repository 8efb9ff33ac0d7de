use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use patient_records_domain::health::{ComponentStatus, HealthServiceTrait, SystemStatus};

/// Health check response with service and store information
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok" or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// RFC 3339 timestamp of when the response was generated
    pub timestamp: String,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Status of each component, keyed by name
    pub components: BTreeMap<String, ComponentHealthStatus>,
    /// Environment information
    pub environment: String,
}

/// Health status for an individual component
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok" or "error")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Service type for dependency injection
pub type HealthService = Arc<dyn HealthServiceTrait>;

// Set once when the server starts
static SERVER_START_TIME: OnceCell<DateTime<Utc>> = OnceCell::new();

/// Record the server start time used for uptime reporting
pub fn initialize_server_start_time() {
    SERVER_START_TIME.get_or_init(Utc::now);
}

/// Health check endpoint reporting whether the patient store is readable
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Patient store cannot be read", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip(health_service))]
pub async fn health_check(Extension(health_service): Extension<HealthService>) -> impl IntoResponse {
    info!("Health check requested");

    let now = Utc::now();
    let uptime = SERVER_START_TIME
        .get()
        .map(|start| now.signed_duration_since(*start).num_seconds().max(0) as u64);

    let system_health = health_service.get_system_health().await;

    let components = system_health
        .components
        .into_iter()
        .map(|(name, component)| {
            let status = match component.status {
                ComponentStatus::Healthy => "ok",
                ComponentStatus::Unhealthy => "error",
            };
            (
                name,
                ComponentHealthStatus {
                    status: status.to_string(),
                    message: component.details,
                },
            )
        })
        .collect();

    let (status_code, status) = match system_health.status {
        SystemStatus::Healthy => (StatusCode::OK, "ok"),
        SystemStatus::Unhealthy => {
            warn!("Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "error")
        }
    };

    let response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        uptime,
        components,
        environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
    };

    (status_code, Json(response))
}
