use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

/// Status message reported while the service can answer requests
pub const RUNNING_STATUS: &str = "Application is running.";

/// Health check response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Fixed message confirming the service is up
    #[schema(example = "Application is running.")]
    pub status: String,
}

/// Health check endpoint to verify the API is running
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is running", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument]
pub async fn health_check() -> impl IntoResponse {
    info!("Health check requested");

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: RUNNING_STATUS.to_string(),
        }),
    )
}
