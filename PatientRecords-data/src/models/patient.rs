use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The whole persisted document: patient id to record, in document order.
pub type PatientDocument = IndexMap<String, StoredPatient>;

/// Storage model for a patient record.
///
/// The id is not part of the record; it is the key in [`PatientDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPatient {
    /// Full name of the patient
    pub name: String,

    /// City of residence
    pub city: String,

    /// Age in years
    pub age: i64,

    /// Gender as written in the document
    pub gender: String,

    /// Height in meters
    pub height: f64,

    /// Weight in kilograms
    pub weight: f64,

    /// Body mass index, derived from height and weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,

    /// Weight category derived from the BMI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
}
