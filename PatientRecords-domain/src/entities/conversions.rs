use patient_records_data::models::StoredPatient;

use crate::entities::patient::{Patient, PatientInput, PatientRecord};

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert a validated patient to its stored form, computing BMI and verdict
pub fn convert_to_data_patient(patient: &Patient) -> StoredPatient {
    StoredPatient {
        name: patient.name.clone(),
        city: patient.city.clone(),
        age: i64::from(patient.age),
        gender: patient.gender.to_string(),
        height: patient.height,
        weight: patient.weight,
        bmi: Some(patient.bmi()),
        verdict: Some(patient.verdict().to_string()),
    }
}

/// Convert a stored record to the domain read model
pub fn convert_to_domain_record(stored: StoredPatient) -> PatientRecord {
    PatientRecord {
        name: stored.name,
        city: stored.city,
        age: stored.age,
        gender: stored.gender,
        height: stored.height,
        weight: stored.weight,
        bmi: stored.bmi,
        verdict: stored.verdict,
    }
}

/// Convert a stored record back to a raw payload, e.g. as a merge base.
///
/// The stored BMI and verdict are dropped; they are derived again after the merge.
pub fn convert_to_domain_input(id: &str, stored: &StoredPatient) -> PatientInput {
    PatientInput {
        id: id.to_string(),
        name: stored.name.clone(),
        city: stored.city.clone(),
        age: stored.age,
        gender: stored.gender.clone(),
        height: stored.height,
        weight: stored.weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::patient::{validate_patient, Gender};

    #[test]
    fn test_stored_patient_carries_derived_fields() {
        let patient = Patient {
            id: "P001".to_string(),
            name: "Ananya Verma".to_string(),
            city: "Guwahati".to_string(),
            age: 28,
            gender: Gender::Female,
            height: 1.75,
            weight: 75.0,
        };

        let stored = convert_to_data_patient(&patient);
        assert_eq!(stored.gender, "female");
        assert_eq!(stored.bmi, Some(24.49));
        assert_eq!(stored.verdict.as_deref(), Some("Normal"));
    }

    #[test]
    fn test_stored_round_trip_through_input() {
        let stored = StoredPatient {
            name: "Karan Mehta".to_string(),
            city: "Indore".to_string(),
            age: 52,
            gender: "male".to_string(),
            height: 1.68,
            weight: 95.0,
            // Stale derived values are recomputed, not carried over
            bmi: Some(1.0),
            verdict: Some("Underweight".to_string()),
        };

        let patient = validate_patient(&convert_to_domain_input("P002", &stored)).unwrap();
        let restored = convert_to_data_patient(&patient);
        assert_eq!(restored.bmi, Some(33.66));
        assert_eq!(restored.verdict.as_deref(), Some("Obese"));
    }
}
