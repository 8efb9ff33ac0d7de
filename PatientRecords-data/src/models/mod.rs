pub mod patient;

pub use patient::{PatientDocument, StoredPatient};
