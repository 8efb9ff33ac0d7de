// Domain entities and value objects
pub mod conversions;
pub mod patient;
pub mod sort;

// Re-export common types for easier imports
pub use patient::{
    merge, validate_patient, FieldViolation, Gender, Patient, PatientInput, PatientRecord,
    PatientValidationError, UpdatePatientRequest, Verdict,
};
pub use sort::{sort_records, SortField, SortOrder};
