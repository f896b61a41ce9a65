pub mod classification;
pub mod bmi;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use bmi::{create_default_bmi_service, BmiService, BmiServiceError, BmiServiceTrait};
pub use classification::categorize_bmi;

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use bmi::create_mock_bmi_service;
