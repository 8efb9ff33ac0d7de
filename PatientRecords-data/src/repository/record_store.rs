use std::sync::Arc;
use async_trait::async_trait;

use crate::models::patient::PatientDocument;
use super::errors::RepositoryError;

/// Whole-document access to the persisted patient records.
///
/// Every operation works on the complete document: callers load it, change it
/// in memory and save it back. There is no locking between load and save, so
/// two concurrent writers race and the last save wins.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the entire document
    async fn load(&self) -> Result<PatientDocument, RepositoryError>;

    /// Replace the entire document
    async fn save(&self, document: &PatientDocument) -> Result<(), RepositoryError>;
}

/// Shared handle to a record store, as injected into services
pub type SharedRecordStore = Arc<dyn RecordStore>;

#[async_trait]
impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    async fn load(&self) -> Result<PatientDocument, RepositoryError> {
        (**self).load().await
    }

    async fn save(&self, document: &PatientDocument) -> Result<(), RepositoryError> {
        (**self).save(document).await
    }
}
