use crate::entities::bmi::BmiCategory;

/// Categorize a BMI value
///
/// The normal band ends at 24.9 and the overweight band covers 25 up to
/// 29.9, so values falling between or above those bands classify as
/// `Obesity`.
pub fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if (18.5..24.9).contains(&bmi) {
        BmiCategory::NormalWeight
    } else if (25.0..29.9).contains(&bmi) {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}
