use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Default measurement system when the form omits one
fn default_unit_system() -> String {
    "metric".to_string()
}

/// Form payload for calculating a Body Mass Index
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BmiCalculationRequest {
    /// Measurement system for height and weight, "metric" or "imperial"
    #[serde(default = "default_unit_system")]
    #[schema(default = "metric", example = "metric")]
    pub unit_system: String,

    /// Height in meters (metric) or inches (imperial)
    #[validate(range(min = 0.1, message = "Height must be at least 0.1"))]
    #[schema(minimum = 0.1, example = 1.75)]
    pub height: f64,

    /// Weight in kilograms (metric) or pounds (imperial)
    #[validate(range(min = 0.1, message = "Weight must be at least 0.1"))]
    #[schema(minimum = 0.1, example = 70.0)]
    pub weight: f64,
}

/// Response payload for a calculated Body Mass Index
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BmiCalculationResponse {
    /// Body Mass Index rounded to two decimal places
    #[schema(example = 22.86)]
    pub bmi: f64,

    /// Classification label for the BMI value
    #[schema(example = "Normal weight")]
    pub category: String,
}
