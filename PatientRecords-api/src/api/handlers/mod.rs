pub mod health;
pub mod hello;
pub mod info;
pub mod patients;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use health::health_check;
pub use patients::{
    create_patient, delete_patient, get_patient, sort_patients, update_patient, view_patients,
};
