use axum::Json;
use tracing::debug;

use crate::entities::MessageResponse;

/// Banner of the patient records service
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = MessageResponse)
    ),
    tag = "info"
)]
pub async fn root() -> Json<MessageResponse> {
    debug!("Root endpoint called");
    Json(MessageResponse::new("Patient Management System API"))
}

/// What the patient records service is for
#[utoipa::path(
    get,
    path = "/about",
    responses(
        (status = 200, description = "Service description", body = MessageResponse)
    ),
    tag = "info"
)]
pub async fn about() -> Json<MessageResponse> {
    debug!("About endpoint called");
    Json(MessageResponse::new(
        "A fully functional API to manage your patient records",
    ))
}
