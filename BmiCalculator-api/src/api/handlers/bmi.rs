use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, instrument, warn};

// Import domain entities and services
use bmi_calculator_domain::entities::bmi::BmiAssessment;
use bmi_calculator_domain::services::{
    create_default_bmi_service, BmiServiceError, BmiServiceTrait,
};

// Import our entities
use crate::entities::bmi::{BmiCalculationRequest, BmiCalculationResponse};
use crate::entities::common::ErrorResponse;

/// Service type for dependency injection
pub type BmiService = Arc<dyn BmiServiceTrait + Send + Sync>;

/// Create a default service for the handlers to use
pub fn create_service() -> BmiService {
    Arc::new(create_default_bmi_service())
}

/// Calculate the Body Mass Index for submitted measurements
#[utoipa::path(
    post,
    path = "/calculate_bmi",
    request_body(
        content = BmiCalculationRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "BMI calculated", body = BmiCalculationResponse),
        (status = 400, description = "Invalid measurements or unit system", body = ErrorResponse),
    ),
    tag = "bmi"
)]
#[instrument(skip(service, request))]
pub async fn calculate_bmi(
    State(service): State<BmiService>,
    Form(request): Form<BmiCalculationRequest>,
) -> Result<impl IntoResponse, Response> {
    info!("Calculating BMI for '{}' measurements", request.unit_system);

    // Convert public request to domain request
    let domain_request = convert_to_domain_request(&request);

    // Call domain service
    match service.calculate(&domain_request) {
        Ok(assessment) => {
            info!("BMI calculated: {} ({})", assessment.bmi, assessment.category);
            // Convert domain entity to public entity for API response
            let public_response = convert_to_public_response(assessment);
            Ok((StatusCode::OK, Json(public_response)))
        }
        Err(e) => {
            warn!("Rejected BMI calculation: {}", e);
            let error = match &e {
                BmiServiceError::InvalidUnitSystem(_) => ErrorResponse::bad_request(&e.to_string()),
                BmiServiceError::ValidationError(_) => {
                    ErrorResponse::validation_error(&e.to_string(), None)
                }
            };
            Err(error.into_response())
        }
    }
}

// Convert public request to domain request
fn convert_to_domain_request(
    request: &BmiCalculationRequest,
) -> bmi_calculator_domain::entities::bmi::BmiCalculationRequest {
    bmi_calculator_domain::entities::bmi::BmiCalculationRequest {
        unit_system: request.unit_system.clone(),
        height: request.height,
        weight: request.weight,
    }
}

// Convert domain assessment to public response
fn convert_to_public_response(assessment: BmiAssessment) -> BmiCalculationResponse {
    BmiCalculationResponse {
        bmi: assessment.bmi,
        category: assessment.category.to_string(),
    }
}
