pub mod bmi;
pub mod health;


// Re-export handlers for easier imports
pub use bmi::calculate_bmi;
pub use health::health_check;
