use serde::Deserialize;
use utoipa::IntoParams;

// Patient bodies are the domain's own serde types
pub use patient_records_domain::entities::{PatientInput, PatientRecord, UpdatePatientRequest};

/// Query parameters of the sorted listing
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SortQueryParams {
    /// Field to sort on: height, weight or bmi
    pub sort_by: Option<String>,

    /// Sort direction, asc (default) or desc
    pub order: Option<String>,
}
