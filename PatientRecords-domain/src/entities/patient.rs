use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::{Validate, ValidationErrors};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::services::bmi::derive_metrics;

/// Genders accepted when a patient is created
pub const CREATE_GENDERS: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

/// Genders accepted in a partial update.
///
/// Narrower than [`CREATE_GENDERS`]: a patient created as `other` cannot be
/// switched to `other` again through an update.
pub const UPDATE_GENDERS: [Gender; 2] = [Gender::Male, Gender::Female];

/// Field order used when reporting violations
const FIELD_ORDER: [&str; 7] = ["id", "name", "city", "age", "gender", "height", "weight"];

/// Gender of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Weight category derived from the BMI; stored as its display string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// BMI below 18.5
    Underweight,

    /// BMI from 18.5 up to 25
    Normal,

    /// BMI from 25 up to 30
    Overweight,

    /// BMI of 30 or more
    Obese,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Underweight => "Underweight",
            Verdict::Normal => "Normal",
            Verdict::Overweight => "Overweight",
            Verdict::Obese => "Obese",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single constraint violation on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct FieldViolation {
    /// Name of the offending field
    pub field: String,

    /// What is wrong with it
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation failure listing every offending field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientValidationError {
    pub violations: Vec<FieldViolation>,
}

impl PatientValidationError {
    fn from_violations(mut violations: Vec<FieldViolation>) -> Self {
        violations.sort_by_key(|v| {
            FIELD_ORDER
                .iter()
                .position(|field| *field == v.field)
                .unwrap_or(FIELD_ORDER.len())
        });
        Self { violations }
    }

    /// Whether a given field is among the violations
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for PatientValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for PatientValidationError {}

/// Raw patient payload, as received on create.
///
/// Nothing here is trusted until [`validate_patient`] turns it into a [`Patient`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct PatientInput {
    /// ID of the patient in the store
    #[validate(length(min = 3, max = 5, message = "must be between 3 and 5 characters"))]
    #[cfg_attr(feature = "with-api", schema(example = "P001"))]
    pub id: String,

    /// Name of the patient
    #[validate(length(min = 3, max = 50, message = "must be between 3 and 50 characters"))]
    #[cfg_attr(feature = "with-api", schema(example = "John Doe"))]
    pub name: String,

    /// City of the patient
    #[validate(length(min = 3, max = 50, message = "must be between 3 and 50 characters"))]
    #[cfg_attr(feature = "with-api", schema(example = "New York"))]
    pub city: String,

    /// Age of the patient
    #[validate(range(min = 1, max = 119, message = "must be greater than 0 and less than 120"))]
    #[cfg_attr(feature = "with-api", schema(example = 30))]
    pub age: i64,

    /// Gender of the patient: male, female or other
    #[cfg_attr(feature = "with-api", schema(example = "male"))]
    pub gender: String,

    /// Height of the patient in meters
    #[cfg_attr(feature = "with-api", schema(example = 1.75))]
    pub height: f64,

    /// Weight of the patient in kilograms
    #[cfg_attr(feature = "with-api", schema(example = 75.0))]
    pub weight: f64,
}

/// Partial update payload; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct UpdatePatientRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[validate(range(min = 1, message = "must be greater than 0"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,

    /// Only male or female are accepted here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl UpdatePatientRequest {
    /// True when the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.city.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.height.is_none()
            && self.weight.is_none()
    }

    /// Check the update on its own, before it is merged into a record
    pub fn check(&self) -> Result<(), PatientValidationError> {
        let mut violations = collect_violations(self.validate());

        if let Some(gender) = &self.gender {
            if let Err(violation) = parse_gender(gender, &UPDATE_GENDERS) {
                debug!("Rejecting gender '{}' on update", gender);
                violations.push(violation);
            }
        }
        if let Some(height) = self.height {
            check_positive("height", height, &mut violations);
        }
        if let Some(weight) = self.weight {
            check_positive("weight", weight, &mut violations);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(PatientValidationError::from_violations(violations))
        }
    }
}

/// A validated patient. BMI and verdict are computed, never stored here.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub city: String,
    pub age: u8,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
}

impl Patient {
    /// Body mass index, rounded to two decimals
    pub fn bmi(&self) -> f64 {
        derive_metrics(self.height, self.weight).0
    }

    /// Weight category for the current BMI
    pub fn verdict(&self) -> Verdict {
        derive_metrics(self.height, self.weight).1
    }
}

/// Read model of a stored record, as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct PatientRecord {
    pub name: String,
    pub city: String,
    pub age: i64,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
}

/// Validate a full patient payload against every field constraint
pub fn validate_patient(input: &PatientInput) -> Result<Patient, PatientValidationError> {
    let mut violations = collect_violations(input.validate());

    let gender = match parse_gender(&input.gender, &CREATE_GENDERS) {
        Ok(gender) => Some(gender),
        Err(violation) => {
            violations.push(violation);
            None
        }
    };
    check_open_range("height", input.height, 0.0, 3.0, &mut violations);
    check_open_range("weight", input.weight, 0.0, 300.0, &mut violations);

    match gender {
        Some(gender) if violations.is_empty() => Ok(Patient {
            id: input.id.clone(),
            name: input.name.clone(),
            city: input.city.clone(),
            // 1..=119 was checked above
            age: input.age as u8,
            gender,
            height: input.height,
            weight: input.weight,
        }),
        _ => Err(PatientValidationError::from_violations(violations)),
    }
}

/// Apply a partial update to an existing record and re-validate the result.
///
/// The update is checked on its own first; the merged record must then pass
/// full validation, so the update succeeds or fails as a whole.
pub fn merge(
    existing: PatientInput,
    update: &UpdatePatientRequest,
) -> Result<Patient, PatientValidationError> {
    update.check()?;

    let mut merged = existing;
    if let Some(name) = &update.name {
        merged.name = name.clone();
    }
    if let Some(city) = &update.city {
        merged.city = city.clone();
    }
    if let Some(age) = update.age {
        merged.age = age;
    }
    if let Some(gender) = &update.gender {
        merged.gender = gender.clone();
    }
    if let Some(height) = update.height {
        merged.height = height;
    }
    if let Some(weight) = update.weight {
        merged.weight = weight;
    }

    validate_patient(&merged)
}

fn collect_violations(result: Result<(), ValidationErrors>) -> Vec<FieldViolation> {
    let Err(errors) = result else {
        return Vec::new();
    };

    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field));
                FieldViolation::new(field, message)
            })
        })
        .collect()
}

fn parse_gender(value: &str, allowed: &[Gender]) -> Result<Gender, FieldViolation> {
    match value.parse::<Gender>() {
        Ok(gender) if allowed.contains(&gender) => Ok(gender),
        _ => {
            let names: Vec<&str> = allowed.iter().map(Gender::as_str).collect();
            Err(FieldViolation::new(
                "gender",
                format!("must be one of: {}", names.join(", ")),
            ))
        }
    }
}

fn check_open_range(field: &str, value: f64, min: f64, max: f64, violations: &mut Vec<FieldViolation>) {
    if !(value > min && value < max) {
        violations.push(FieldViolation::new(
            field,
            format!("must be greater than {} and less than {}", min, max),
        ));
    }
}

fn check_positive(field: &str, value: f64, violations: &mut Vec<FieldViolation>) {
    if !(value > 0.0) {
        violations.push(FieldViolation::new(field, "must be greater than 0"));
    }
}
