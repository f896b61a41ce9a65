// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use crate::entities::bmi::{BmiAssessment, BmiCalculationRequest, BmiCategory};
use crate::services::bmi::{BmiServiceError, BmiServiceTrait};
use crate::services::classification::categorize_bmi;

/// Mock implementation of the BmiServiceTrait for testing
pub struct MockBmiService {
    should_fail_validation: bool,
    fixed_assessment: Option<BmiAssessment>,
}

impl Default for MockBmiService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBmiService {
    /// Create a new mock BMI service
    pub fn new() -> Self {
        Self {
            should_fail_validation: false,
            fixed_assessment: None,
        }
    }

    /// Configure the mock to fail validation
    pub fn with_validation_failure(mut self) -> Self {
        self.should_fail_validation = true;
        self
    }

    /// Configure the mock to return a pre-defined assessment
    pub fn with_assessment(mut self, assessment: BmiAssessment) -> Self {
        self.fixed_assessment = Some(assessment);
        self
    }
}

impl BmiServiceTrait for MockBmiService {
    fn validate_request(&self, _request: &BmiCalculationRequest) -> Result<(), BmiServiceError> {
        if self.should_fail_validation {
            Err(BmiServiceError::ValidationError(
                "Validation failed - mock is configured to fail validation".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    fn calculate(&self, request: &BmiCalculationRequest) -> Result<BmiAssessment, BmiServiceError> {
        // First validate the request
        self.validate_request(request)?;

        if let Some(assessment) = &self.fixed_assessment {
            return Ok(assessment.clone());
        }

        // Metric-only arithmetic; unit handling belongs to the real service
        let bmi = request.weight / (request.height * request.height);
        let bmi = (bmi * 100.0).round() / 100.0;

        Ok(BmiAssessment {
            bmi,
            category: categorize_bmi(bmi),
        })
    }

    fn categorize(&self, bmi: f64) -> BmiCategory {
        categorize_bmi(bmi)
    }
}
