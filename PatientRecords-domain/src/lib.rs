// PatientRecords Domain
// This crate contains the patient model and the business logic around the record store

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Re-export the repository module from patient_records_data for convenience
pub use patient_records_data::repository;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;
