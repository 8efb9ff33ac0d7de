use crate::entities::patient::Verdict;

/// Body mass index for a height in meters and a weight in kilograms,
/// rounded to two decimals
pub fn calculate_bmi(height: f64, weight: f64) -> f64 {
    round_to_hundredths(weight / (height * height))
}

/// Round to two decimals from the exact binary value; exact ties go to the even digit
fn round_to_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Categorize a BMI value
pub fn categorize_bmi(bmi: f64) -> Verdict {
    if bmi < 18.5 {
        Verdict::Underweight
    } else if bmi < 25.0 {
        Verdict::Normal
    } else if bmi < 30.0 {
        Verdict::Overweight
    } else {
        Verdict::Obese
    }
}

/// Derived fields of a patient: the rounded BMI and its verdict.
///
/// The verdict is taken from the rounded value.
pub fn derive_metrics(height: f64, weight: f64) -> (f64, Verdict) {
    let bmi = calculate_bmi(height, weight);
    (bmi, categorize_bmi(bmi))
}
