// Testing utilities for the domain layer and its callers
// This module is only available when the "mock" feature is enabled

// Re-export the mockall store from the data layer
pub use patient_records_data::repository::MockRecordStore;

use std::io;

use async_trait::async_trait;
use patient_records_data::models::{PatientDocument, StoredPatient};
use patient_records_data::repository::{RecordStore, RepositoryError};

use crate::entities::conversions::convert_to_data_patient;
use crate::entities::patient::{validate_patient, PatientInput};

/// Record store whose every operation fails, for exercising storage errors
#[derive(Debug, Clone, Default)]
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn load(&self) -> Result<PatientDocument, RepositoryError> {
        Err(RepositoryError::Io {
            path: "patients.json".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "store unavailable"),
        })
    }

    async fn save(&self, _document: &PatientDocument) -> Result<(), RepositoryError> {
        Err(RepositoryError::Io {
            path: "patients.json".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "store unavailable"),
        })
    }
}

/// A valid create payload with the given id and measurements
pub fn patient_input(id: &str, height: f64, weight: f64) -> PatientInput {
    PatientInput {
        id: id.to_string(),
        name: "Test Patient".to_string(),
        city: "Bengaluru".to_string(),
        age: 35,
        gender: "male".to_string(),
        height,
        weight,
    }
}

/// A stored record with derived fields filled in, as a create would write it.
///
/// Panics if the measurements are out of range.
pub fn stored_patient(height: f64, weight: f64) -> StoredPatient {
    let patient = validate_patient(&patient_input("TMP", height, weight))
        .unwrap_or_else(|e| panic!("invalid test patient: {}", e));
    convert_to_data_patient(&patient)
}
