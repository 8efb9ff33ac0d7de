use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument, warn};

use patient_records_domain::services::{PatientServiceError, PatientServiceTrait};

use crate::entities::patient::{PatientInput, PatientRecord, SortQueryParams, UpdatePatientRequest};
use crate::entities::{ErrorResponse, MessageResponse};

/// Service type for dependency injection
pub type PatientService = Arc<dyn PatientServiceTrait + Send + Sync>;

/// List every stored patient, keyed by id
#[utoipa::path(
    get,
    path = "/view",
    responses(
        (status = 200, description = "All patients keyed by id", body = HashMap<String, PatientRecord>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "patients"
)]
#[instrument(skip(service))]
pub async fn view_patients(State(service): State<PatientService>) -> Result<impl IntoResponse, Response> {
    info!("Listing all patients");

    let patients = service.list_patients().await.map_err(error_response)?;
    Ok((StatusCode::OK, Json(patients)))
}

/// Get a single patient by id
#[utoipa::path(
    get,
    path = "/patient/{patient_id}",
    params(
        ("patient_id" = String, Path, description = "ID of the patient in the store", example = "P001")
    ),
    responses(
        (status = 200, description = "Patient found", body = PatientRecord),
        (status = 404, description = "Patient not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "patients"
)]
#[instrument(skip(service))]
pub async fn get_patient(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
) -> Result<impl IntoResponse, Response> {
    info!("Fetching patient {}", patient_id);

    let patient = service.get_patient(&patient_id).await.map_err(error_response)?;
    Ok((StatusCode::OK, Json(patient)))
}

/// List patients sorted by height, weight or bmi
#[utoipa::path(
    get,
    path = "/sort",
    params(SortQueryParams),
    responses(
        (status = 200, description = "Sorted patients", body = [PatientRecord]),
        (status = 400, description = "Invalid sort parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "patients"
)]
#[instrument(skip(service))]
pub async fn sort_patients(
    State(service): State<PatientService>,
    Query(params): Query<SortQueryParams>,
) -> Result<impl IntoResponse, Response> {
    info!("Sorting patients by {:?} {:?}", params.sort_by, params.order);

    let patients = service
        .sort_patients(params.sort_by.as_deref(), params.order.as_deref())
        .await
        .map_err(error_response)?;
    Ok((StatusCode::OK, Json(patients)))
}

/// Create a new patient
#[utoipa::path(
    post,
    path = "/create",
    request_body = PatientInput,
    responses(
        (status = 201, description = "Patient created", body = MessageResponse),
        (status = 400, description = "Patient already exists", body = ErrorResponse),
        (status = 422, description = "Invalid patient data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "patients"
)]
#[instrument(skip(service, payload))]
pub async fn create_patient(
    State(service): State<PatientService>,
    payload: Result<Json<PatientInput>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(input) = payload.map_err(rejection_response)?;
    info!("Creating patient {}", input.id);

    service.create_patient(input).await.map_err(error_response)?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Patient created successfully")),
    ))
}

/// Apply a partial update to an existing patient
#[utoipa::path(
    put,
    path = "/update/{patient_id}",
    params(
        ("patient_id" = String, Path, description = "ID of the patient in the store", example = "P001")
    ),
    request_body = UpdatePatientRequest,
    responses(
        (status = 200, description = "Patient updated", body = MessageResponse),
        (status = 404, description = "Patient not found", body = ErrorResponse),
        (status = 422, description = "Invalid patient data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "patients"
)]
#[instrument(skip(service, payload))]
pub async fn update_patient(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
    payload: Result<Json<UpdatePatientRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(update) = payload.map_err(rejection_response)?;
    info!("Updating patient {}", patient_id);

    service
        .update_patient(&patient_id, update)
        .await
        .map_err(error_response)?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Patient updated successfully")),
    ))
}

/// Delete a patient
#[utoipa::path(
    delete,
    path = "/delete/{patient_id}",
    params(
        ("patient_id" = String, Path, description = "ID of the patient in the store", example = "P001")
    ),
    responses(
        (status = 200, description = "Patient deleted", body = MessageResponse),
        (status = 404, description = "Patient not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "patients"
)]
#[instrument(skip(service))]
pub async fn delete_patient(
    State(service): State<PatientService>,
    Path(patient_id): Path<String>,
) -> Result<impl IntoResponse, Response> {
    info!("Deleting patient {}", patient_id);

    service.delete_patient(&patient_id).await.map_err(error_response)?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Patient deleted successfully")),
    ))
}

/// Map a domain error to its HTTP error body
fn error_response(err: PatientServiceError) -> Response {
    let body = match err {
        PatientServiceError::ValidationError(e) => {
            warn!("Rejected invalid patient data: {}", e);
            let details = serde_json::to_value(&e.violations).ok();
            ErrorResponse::validation_error("Invalid patient data", details)
        }
        PatientServiceError::NotFound(id) => {
            info!("Patient not found: {}", id);
            ErrorResponse::not_found("Patient not found")
        }
        PatientServiceError::Conflict(id) => {
            warn!("Patient already exists: {}", id);
            ErrorResponse::conflict("Patient already exists")
        }
        PatientServiceError::InvalidArgument(msg) => {
            warn!("Invalid request: {}", msg);
            ErrorResponse::bad_request(&msg)
        }
        PatientServiceError::StorageError(msg) => {
            error!("Patient store failure: {}", msg);
            ErrorResponse::internal_error()
        }
    };

    body.into_response()
}

/// Malformed or mistyped JSON bodies are validation failures
fn rejection_response(rejection: JsonRejection) -> Response {
    warn!("Rejected request body: {}", rejection.body_text());
    ErrorResponse::validation_error(&rejection.body_text(), None).into_response()
}
