use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Info endpoints
        crate::api::handlers::info::root,
        crate::api::handlers::info::about,

        // Health endpoints
        crate::api::handlers::health::health_check,

        // Patient endpoints
        crate::api::handlers::patients::view_patients,
        crate::api::handlers::patients::get_patient,
        crate::api::handlers::patients::sort_patients,
        crate::api::handlers::patients::create_patient,
        crate::api::handlers::patients::update_patient,
        crate::api::handlers::patients::delete_patient
    ),
    components(
        schemas(
            // Entities
            crate::entities::ErrorResponse,
            crate::entities::MessageResponse,
            patient_records_domain::entities::PatientInput,
            patient_records_domain::entities::UpdatePatientRequest,
            patient_records_domain::entities::PatientRecord,
            patient_records_domain::entities::FieldViolation,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentHealthStatus
        )
    ),
    tags(
        (name = "info", description = "Service information"),
        (name = "health", description = "Health check endpoint"),
        (name = "patients", description = "Patient record management endpoints")
    ),
    info(
        title = "Patient Management System API",
        version = "0.1.0",
        description = "A fully functional API to manage your patient records",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
