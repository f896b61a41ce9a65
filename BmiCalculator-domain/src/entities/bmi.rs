use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Default measurement system when a request omits one
fn default_unit_system() -> String {
    "metric".to_string()
}

/// Request to calculate a Body Mass Index
///
/// The unit system is carried as the raw submitted token so that
/// unrecognized values surface as a domain error with a descriptive
/// message rather than failing at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BmiCalculationRequest {
    /// Measurement system the height and weight are expressed in
    #[serde(default = "default_unit_system")]
    pub unit_system: String,

    /// Height in meters (metric) or inches (imperial)
    #[validate(range(min = 0.1, message = "Height must be at least 0.1"))]
    pub height: f64,

    /// Weight in kilograms (metric) or pounds (imperial)
    #[validate(range(min = 0.1, message = "Weight must be at least 0.1"))]
    pub weight: f64,
}

/// BMI classification labels
///
/// The bands are evaluated in order. Values between 24.9 and 25, and
/// values at or above 29.9, classify as `Obesity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to (but not including) 24.9
    #[serde(rename = "Normal weight")]
    NormalWeight,
    /// BMI from 25 up to (but not including) 29.9
    Overweight,
    /// Any BMI outside the bands above
    Obesity,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        };
        write!(f, "{}", label)
    }
}

/// Result of a BMI calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BmiAssessment {
    /// Body Mass Index rounded to two decimal places
    pub bmi: f64,

    /// Classification of the BMI value
    pub category: BmiCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_request(height: f64, weight: f64) -> BmiCalculationRequest {
        BmiCalculationRequest {
            unit_system: "metric".to_string(),
            height,
            weight,
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        let request = metric_request(1.75, 70.0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_minimum_measurements_pass_validation() {
        let request = metric_request(0.1, 0.1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_zero_height_fails_validation() {
        let request = metric_request(0.0, 70.0);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("height"));
    }

    #[test]
    fn test_negative_weight_fails_validation() {
        let request = metric_request(1.75, -5.0);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("weight"));
    }

    #[test]
    fn test_below_minimum_measurements_fail_validation() {
        let request = metric_request(0.05, 0.05);
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("height"));
        assert!(errors.field_errors().contains_key("weight"));
    }

    #[test]
    fn test_unit_system_defaults_to_metric_on_deserialization() {
        let request: BmiCalculationRequest =
            serde_json::from_str(r#"{"height": 1.75, "weight": 70.0}"#).unwrap();
        assert_eq!(request.unit_system, "metric");
    }

    #[test]
    fn test_category_serializes_to_display_labels() {
        assert_eq!(
            serde_json::to_string(&BmiCategory::NormalWeight).unwrap(),
            "\"Normal weight\""
        );
        assert_eq!(
            serde_json::to_string(&BmiCategory::Obesity).unwrap(),
            "\"Obesity\""
        );
    }

    #[test]
    fn test_category_display_labels() {
        assert_eq!(BmiCategory::Underweight.to_string(), "Underweight");
        assert_eq!(BmiCategory::NormalWeight.to_string(), "Normal weight");
        assert_eq!(BmiCategory::Overweight.to_string(), "Overweight");
        assert_eq!(BmiCategory::Obesity.to_string(), "Obesity");
    }
}
