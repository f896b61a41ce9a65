use axum::{
    routing::get,
    routing::post,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{bmi, health};
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app() -> Router {
    debug!("Creating application router");

    // Create BMI service using factory function
    let bmi_service = bmi::create_service();

    // Set up the calculation and health routes
    let app = Router::new()
        .route("/calculate_bmi", post(bmi::calculate_bmi))
        // Clients that keep the trailing slash reach the same handler
        .route("/calculate_bmi/", post(bmi::calculate_bmi))
        .route("/health", get(health::health_check))
        .with_state(bmi_service);

    debug!("API routes configured");

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    // Apply the CORS policy and request tracing
    let app = configure_cors(app).layer(TraceLayer::new_for_http());

    debug!("CORS configuration applied");

    app
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    // Get Swagger UI routes
    let swagger = configure_swagger_routes();

    // Merge Swagger UI with the app router
    app.merge(swagger)
}

/// Apply the CORS policy to the router
///
/// Every origin, method, and header is allowed; the API never uses
/// credentials.
pub fn configure_cors(app: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(cors)
}
