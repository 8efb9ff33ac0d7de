use axum::Json;
use tracing::debug;

use crate::entities::{AboutResponse, HelloResponse};

/// Root of the hello world demo
pub async fn hello() -> Json<HelloResponse> {
    debug!("Hello endpoint called");
    Json(HelloResponse {
        hello: "World".to_string(),
    })
}

/// About page of the hello world demo
pub async fn about() -> Json<AboutResponse> {
    debug!("Hello about endpoint called");
    Json(AboutResponse {
        about: "This is an API for managing items.".to_string(),
    })
}
