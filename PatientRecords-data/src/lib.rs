// PatientRecords Data
// This crate owns the persisted patient document and the stores that read and write it

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
