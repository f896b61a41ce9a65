// Domain entities and value objects
pub mod bmi;
pub mod units;

// Re-export common types for easier imports
pub use bmi::{BmiAssessment, BmiCalculationRequest, BmiCategory};
pub use units::{ParseUnitSystemError, UnitSystem};
