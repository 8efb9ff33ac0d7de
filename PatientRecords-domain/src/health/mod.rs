//! Domain layer health check functionality
//! This module reports whether the record store can be read

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use patient_records_data::repository::{RecordStore, SharedRecordStore};
use tracing::error;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// At least one component is not functioning
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: BTreeMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

/// Reported when the store cannot be loaded; the cause only goes to the log
pub const STORE_UNREADABLE: &str = "Patient store could not be read";

/// Check that the store's document can be loaded
pub async fn check_store_status<R: RecordStore + ?Sized>(store: &R) -> HealthComponent {
    match store.load().await {
        Ok(document) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: Some(format!("{} records", document.len())),
        },
        Err(e) => {
            error!("Patient store check failed: {}", e);
            HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some(STORE_UNREADABLE.to_string()),
            }
        }
    }
}

/// Health service backed by the record store
pub struct StoreHealthService<R: RecordStore> {
    store: R,
}

impl<R: RecordStore> StoreHealthService<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<R: RecordStore> HealthServiceTrait for StoreHealthService<R> {
    async fn get_system_health(&self) -> SystemHealth {
        let store = check_store_status(&self.store).await;

        let status = if store.status == ComponentStatus::Healthy {
            SystemStatus::Healthy
        } else {
            SystemStatus::Unhealthy
        };

        SystemHealth {
            status,
            components: BTreeMap::from([("store".to_string(), store)]),
        }
    }
}

/// Factory function to create a health service over a shared store
pub fn create_health_service(store: SharedRecordStore) -> Arc<dyn HealthServiceTrait> {
    Arc::new(StoreHealthService::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use patient_records_data::repository::{MockRecordStore, RepositoryError};
    use patient_records_data::repository::InMemoryStore;

    #[tokio::test]
    async fn test_readable_store_is_healthy() {
        let service = StoreHealthService::new(InMemoryStore::new());
        let health = service.get_system_health().await;

        assert_eq!(health.status, SystemStatus::Healthy);
        assert_eq!(health.components["store"].details.as_deref(), Some("0 records"));
    }

    #[tokio::test]
    async fn test_unreadable_store_is_unhealthy() {
        let mut store = MockRecordStore::new();
        store
            .expect_load()
            .returning(|| Err(RepositoryError::Lock("poisoned".to_string())));

        let health = StoreHealthService::new(store).get_system_health().await;
        assert_eq!(health.status, SystemStatus::Unhealthy);
        assert_eq!(health.components["store"].status, ComponentStatus::Unhealthy);

        // The underlying error stays out of the report
        let details = health.components["store"].details.as_deref().unwrap();
        assert_eq!(details, STORE_UNREADABLE);
        assert!(!details.contains("poisoned"));
    }
}
