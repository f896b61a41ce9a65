// BmiCalculator-api lib.rs
//
// This is the main library file for the BMI Calculator API.
// It re-exports the APIs from the various modules.

// Public modules
pub mod api;
pub mod entities;
pub mod openapi;
