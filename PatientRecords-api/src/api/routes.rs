use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Extension, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use patient_records_data::repository::SharedRecordStore;
use patient_records_domain::health::create_health_service;
use patient_records_domain::services::create_patient_service;

use crate::api::handlers::{health, hello, info, patients};
use crate::openapi::configure_swagger_routes;

/// Create the patient records router over the given store
pub fn create_app(store: SharedRecordStore) -> Router {
    debug!("Creating application router");

    let patient_service = create_patient_service(Arc::clone(&store));
    let health_service = create_health_service(store);

    // Specific routes before parametrized ones
    let patient_routes = Router::new()
        .route("/", get(info::root))
        .route("/about", get(info::about))
        .route("/view", get(patients::view_patients))
        .route("/sort", get(patients::sort_patients))
        .route("/patient/:patient_id", get(patients::get_patient))
        .route("/create", post(patients::create_patient))
        .route("/update/:patient_id", put(patients::update_patient))
        .route("/delete/:patient_id", delete(patients::delete_patient))
        .with_state(patient_service);

    debug!("Patient routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service));

    let app = Router::new().merge(patient_routes).merge(public_routes);
    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Create the hello world demo router
pub fn create_hello_app() -> Router {
    Router::new()
        .route("/", get(hello::hello))
        .route("/about", get(hello::about))
        .layer(TraceLayer::new_for_http())
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
