pub mod bmi;
pub mod patient;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use bmi::derive_metrics;
pub use patient::{create_patient_service, PatientService, PatientServiceError, PatientServiceTrait};
