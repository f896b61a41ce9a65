use thiserror::Error;
use tracing::debug;
use validator::Validate;

use crate::entities::bmi::{BmiAssessment, BmiCalculationRequest, BmiCategory};
use crate::entities::units::{ParseUnitSystemError, UnitSystem};
use crate::services::classification::categorize_bmi;

/// BMI service errors
#[derive(Debug, Error)]
pub enum BmiServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Unrecognized unit system token, reported with the parse error's message
    #[error("{0}")]
    InvalidUnitSystem(#[from] ParseUnitSystemError),
}

/// Trait for BMI service operations
pub trait BmiServiceTrait {
    /// Validate a BMI calculation request
    fn validate_request(&self, request: &BmiCalculationRequest) -> Result<(), BmiServiceError>;

    /// Calculate the BMI and its category for a request
    fn calculate(&self, request: &BmiCalculationRequest) -> Result<BmiAssessment, BmiServiceError>;

    /// Get the category for an already calculated BMI value
    fn categorize(&self, bmi: f64) -> BmiCategory;
}

/// BMI service for domain logic
pub struct BmiService;

impl BmiService {
    /// Create a new BMI service
    pub fn new() -> Self {
        BmiService
    }

    /// Resolve the submitted unit system token
    fn parse_unit_system(
        &self,
        request: &BmiCalculationRequest,
    ) -> Result<UnitSystem, BmiServiceError> {
        Ok(request.unit_system.parse::<UnitSystem>()?)
    }
}

impl Default for BmiService {
    fn default() -> Self {
        Self::new()
    }
}

impl BmiServiceTrait for BmiService {
    /// Validate a BMI calculation request
    fn validate_request(&self, request: &BmiCalculationRequest) -> Result<(), BmiServiceError> {
        // Use the validator crate's validation
        if let Err(validation_errors) = request.validate() {
            // Convert validation errors to a meaningful error message
            let error_message = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| {
                            if let Some(msg) = &err.message {
                                msg.to_string()
                            } else {
                                format!("Invalid {}", field)
                            }
                        })
                        .collect();
                    format!("{}: {}", field, error_msgs.join(", "))
                })
                .collect::<Vec<String>>()
                .join("; ");

            return Err(BmiServiceError::ValidationError(error_message));
        }

        // Additional validation: the unit token must name a known system
        self.parse_unit_system(request)?;

        // All validations passed
        Ok(())
    }

    /// Calculate the BMI and its category for a request
    fn calculate(&self, request: &BmiCalculationRequest) -> Result<BmiAssessment, BmiServiceError> {
        // Validate the request
        self.validate_request(request)?;

        // Normalize the measurements to meters and kilograms
        let unit_system = self.parse_unit_system(request)?;
        let (height_m, weight_kg) = unit_system.to_metric(request.height, request.weight);

        // Validated height is at least 0.1, so the divisor is never zero
        let bmi = weight_kg / (height_m * height_m);
        let bmi = (bmi * 100.0).round() / 100.0;

        debug!("Calculated BMI {} from {} measurements", bmi, unit_system);

        Ok(BmiAssessment {
            bmi,
            category: categorize_bmi(bmi),
        })
    }

    /// Get the category for an already calculated BMI value
    fn categorize(&self, bmi: f64) -> BmiCategory {
        categorize_bmi(bmi)
    }
}

/// Create a default BMI service
pub fn create_default_bmi_service() -> impl BmiServiceTrait + Send + Sync {
    BmiService::new()
}

/// Create a mock BMI service for testing
/// This function is only available when the mock feature is enabled
#[cfg(feature = "mock")]
pub fn create_mock_bmi_service() -> impl BmiServiceTrait + Send {
    crate::testing::MockBmiService::new()
}
