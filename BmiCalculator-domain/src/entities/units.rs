use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Conversion factor from inches to meters
pub const INCHES_TO_METERS: f64 = 0.0254;

/// Conversion factor from pounds to kilograms
pub const POUNDS_TO_KILOGRAMS: f64 = 0.453592;

/// Measurement system for submitted height and weight values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Height in meters, weight in kilograms
    Metric,
    /// Height in inches, weight in pounds
    Imperial,
}

/// Error returned when a unit system token is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid unit system '{0}'. Must be 'metric' or 'imperial'.")]
pub struct ParseUnitSystemError(pub String);

impl UnitSystem {
    /// Multiplier that converts a height in this system to meters
    pub fn height_factor(&self) -> f64 {
        match self {
            UnitSystem::Metric => 1.0,
            UnitSystem::Imperial => INCHES_TO_METERS,
        }
    }

    /// Multiplier that converts a weight in this system to kilograms
    pub fn weight_factor(&self) -> f64 {
        match self {
            UnitSystem::Metric => 1.0,
            UnitSystem::Imperial => POUNDS_TO_KILOGRAMS,
        }
    }

    /// Convert a height/weight pair in this system to meters and kilograms
    pub fn to_metric(&self, height: f64, weight: f64) -> (f64, f64) {
        (height * self.height_factor(), weight * self.weight_factor())
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        UnitSystem::Metric
    }
}

impl FromStr for UnitSystem {
    type Err = ParseUnitSystemError;

    /// Parse a unit system token, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(ParseUnitSystemError(s.to_string())),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}
