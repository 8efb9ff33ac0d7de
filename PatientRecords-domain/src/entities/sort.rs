use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::patient::PatientRecord;

/// Field a patient listing can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum SortField {
    Height,
    Weight,
    Bmi,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "height" => Ok(SortField::Height),
            "weight" => Ok(SortField::Weight),
            "bmi" => Ok(SortField::Bmi),
            _ => Err("Invalid field to sort by, select from height, weight, bmi".to_string()),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err("Invalid order to sort by, select between asc and desc".to_string()),
        }
    }
}

impl PatientRecord {
    /// Value used for sorting; a missing field counts as 0
    pub fn sort_value(&self, field: SortField) -> f64 {
        match field {
            SortField::Height => self.height,
            SortField::Weight => self.weight,
            SortField::Bmi => self.bmi.unwrap_or(0.0),
        }
    }
}

/// Sort records on a field.
///
/// The sort is stable in both directions: records with equal keys keep their
/// store order, also when sorting descending.
pub fn sort_records(mut records: Vec<PatientRecord>, field: SortField, order: SortOrder) -> Vec<PatientRecord> {
    records.sort_by(|a, b| {
        let (a, b) = (a.sort_value(field), b.sort_value(field));
        match order {
            SortOrder::Asc => a.total_cmp(&b),
            SortOrder::Desc => b.total_cmp(&a),
        }
    });
    records
}
