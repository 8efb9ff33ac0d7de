use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::entities::conversions;
use crate::entities::patient::{
    merge, validate_patient, PatientInput, PatientRecord, PatientValidationError, UpdatePatientRequest,
};
use crate::entities::sort::{sort_records, SortField, SortOrder};
use patient_records_data::repository::{RecordStore, RepositoryError, SharedRecordStore};

/// Patient service errors
#[derive(Debug, Error)]
pub enum PatientServiceError {
    /// One or more fields violate their constraints
    #[error("Validation error: {0}")]
    ValidationError(PatientValidationError),

    /// No patient under this id
    #[error("Patient not found: {0}")]
    NotFound(String),

    /// A patient with this id already exists
    #[error("Patient already exists: {0}")]
    Conflict(String),

    /// A query parameter outside its allowed set
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The record store could not be read or written
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<PatientValidationError> for PatientServiceError {
    fn from(err: PatientValidationError) -> Self {
        PatientServiceError::ValidationError(err)
    }
}

impl From<RepositoryError> for PatientServiceError {
    fn from(err: RepositoryError) -> Self {
        PatientServiceError::StorageError(err.to_string())
    }
}

/// Trait for patient service operations
#[async_trait]
pub trait PatientServiceTrait {
    /// Every stored record, keyed by id in store order
    async fn list_patients(&self) -> Result<IndexMap<String, PatientRecord>, PatientServiceError>;

    /// A single record by id
    async fn get_patient(&self, id: &str) -> Result<PatientRecord, PatientServiceError>;

    /// All records sorted on `sort_by` (height, weight or bmi), `order` asc (default) or desc
    async fn sort_patients(
        &self,
        sort_by: Option<&str>,
        order: Option<&str>,
    ) -> Result<Vec<PatientRecord>, PatientServiceError>;

    /// Validate and store a new patient
    async fn create_patient(&self, input: PatientInput) -> Result<PatientRecord, PatientServiceError>;

    /// Merge a partial update into an existing patient
    async fn update_patient(
        &self,
        id: &str,
        update: UpdatePatientRequest,
    ) -> Result<PatientRecord, PatientServiceError>;

    /// Remove a patient
    async fn delete_patient(&self, id: &str) -> Result<(), PatientServiceError>;
}

/// Patient service for domain logic.
///
/// Each operation loads the whole document, works on it in memory and, for
/// writes, saves it back. Rejected writes never reach `save`.
pub struct PatientService<R: RecordStore> {
    store: R,
}

impl<R: RecordStore> PatientService<R> {
    /// Create a new patient service
    pub fn new(store: R) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<R: RecordStore> PatientServiceTrait for PatientService<R> {
    async fn list_patients(&self) -> Result<IndexMap<String, PatientRecord>, PatientServiceError> {
        let document = self.store.load().await?;

        Ok(document
            .into_iter()
            .map(|(id, stored)| (id, conversions::convert_to_domain_record(stored)))
            .collect())
    }

    async fn get_patient(&self, id: &str) -> Result<PatientRecord, PatientServiceError> {
        let mut document = self.store.load().await?;

        document
            .swap_remove(id)
            .map(conversions::convert_to_domain_record)
            .ok_or_else(|| PatientServiceError::NotFound(id.to_string()))
    }

    async fn sort_patients(
        &self,
        sort_by: Option<&str>,
        order: Option<&str>,
    ) -> Result<Vec<PatientRecord>, PatientServiceError> {
        let field: SortField = sort_by
            .ok_or_else(|| "sort_by is required, select from height, weight, bmi".to_string())
            .and_then(str::parse::<SortField>)
            .map_err(PatientServiceError::InvalidArgument)?;
        let order: SortOrder = match order {
            Some(order) => order.parse().map_err(PatientServiceError::InvalidArgument)?,
            None => SortOrder::default(),
        };

        let document = self.store.load().await?;
        debug!("Sorting {} records by {:?} {:?}", document.len(), field, order);

        let records = document
            .into_values()
            .map(conversions::convert_to_domain_record)
            .collect();
        Ok(sort_records(records, field, order))
    }

    async fn create_patient(&self, input: PatientInput) -> Result<PatientRecord, PatientServiceError> {
        let patient = validate_patient(&input)?;

        let mut document = self.store.load().await?;
        if document.contains_key(&patient.id) {
            warn!("Patient {} already exists", patient.id);
            return Err(PatientServiceError::Conflict(patient.id));
        }

        let stored = conversions::convert_to_data_patient(&patient);
        document.insert(patient.id.clone(), stored.clone());
        self.store.save(&document).await?;

        info!("Created patient {}", patient.id);
        Ok(conversions::convert_to_domain_record(stored))
    }

    async fn update_patient(
        &self,
        id: &str,
        update: UpdatePatientRequest,
    ) -> Result<PatientRecord, PatientServiceError> {
        // The payload is judged on its own before the store is touched
        update.check()?;

        let mut document = self.store.load().await?;
        let existing = document
            .get(id)
            .map(|stored| conversions::convert_to_domain_input(id, stored))
            .ok_or_else(|| PatientServiceError::NotFound(id.to_string()))?;

        let patient = merge(existing, &update)?;
        let stored = conversions::convert_to_data_patient(&patient);
        document.insert(id.to_string(), stored.clone());
        self.store.save(&document).await?;

        info!("Updated patient {}", id);
        Ok(conversions::convert_to_domain_record(stored))
    }

    async fn delete_patient(&self, id: &str) -> Result<(), PatientServiceError> {
        let mut document = self.store.load().await?;

        if document.shift_remove(id).is_none() {
            return Err(PatientServiceError::NotFound(id.to_string()));
        }
        self.store.save(&document).await?;

        info!("Deleted patient {}", id);
        Ok(())
    }
}

/// Create a patient service over a shared record store
pub fn create_patient_service(store: SharedRecordStore) -> Arc<dyn PatientServiceTrait + Send + Sync> {
    Arc::new(PatientService::new(store))
}
