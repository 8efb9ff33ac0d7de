use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use tracing::debug;

use crate::models::patient::{PatientDocument, StoredPatient};
use super::errors::RepositoryError;
use super::record_store::RecordStore;

/// In-memory record store, shared between clones
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    document: Arc<Mutex<PatientDocument>>,
}

impl InMemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with the given document
    pub fn with_document(document: PatientDocument) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
        }
    }

    /// Create a store pre-loaded with records, kept in the given order
    pub fn with_records<I, K>(records: I) -> Self
    where
        I: IntoIterator<Item = (K, StoredPatient)>,
        K: Into<String>,
    {
        let document = records
            .into_iter()
            .map(|(id, record)| (id.into(), record))
            .collect();
        Self::with_document(document)
    }

    /// Snapshot of the current document
    pub fn snapshot(&self) -> Result<PatientDocument, RepositoryError> {
        let store = self.document.lock()?;
        Ok(store.clone())
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn load(&self) -> Result<PatientDocument, RepositoryError> {
        let store = self.document.lock()?;
        debug!("Loaded {} records from memory", store.len());
        Ok(store.clone())
    }

    async fn save(&self, document: &PatientDocument) -> Result<(), RepositoryError> {
        let mut store = self.document.lock()?;
        *store = document.clone();
        debug!("Saved {} records to memory", store.len());
        Ok(())
    }
}
