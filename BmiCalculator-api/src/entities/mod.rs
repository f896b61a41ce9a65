// Public entities for the BMI Calculator API
// This module contains data structures that are shared across the application boundary

// Re-export data structures for BMI calculation
pub mod bmi;

// Common entities for error handling
pub mod common;
