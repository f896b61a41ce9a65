use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // BMI endpoints
        crate::api::handlers::bmi::calculate_bmi,
    ),
    components(
        schemas(
            // Entities
            crate::entities::bmi::BmiCalculationRequest,
            crate::entities::bmi::BmiCalculationResponse,
            crate::entities::common::ErrorResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,

            // Domain vocabulary
            bmi_calculator_domain::entities::units::UnitSystem,
            bmi_calculator_domain::entities::bmi::BmiCategory,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "bmi", description = "Body Mass Index calculation endpoints")
    ),
    info(
        title = "BMI Calculator Tool",
        version = "1.0.0",
        description = "Calculates Body Mass Index (BMI).",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
struct ApiDoc;
