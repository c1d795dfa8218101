//! Unit conversion utilities.
//!
//! Handles conversion between grid squares and real-world distances
//! (feet and meters) using the grid's configured length-per-cell.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{FEET_PER_METER, METERS_PER_FOOT};

/// Measurement unit for grid distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    /// Imperial feet
    Feet,
    /// Metric meters
    Meters,
}

impl Default for MeasurementUnit {
    fn default() -> Self {
        Self::Feet
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feet => write!(f, "feet"),
            Self::Meters => write!(f, "meters"),
        }
    }
}

impl FromStr for MeasurementUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feet" | "ft" => Ok(Self::Feet),
            "meters" | "m" => Ok(Self::Meters),
            _ => Err(format!("Unknown measurement unit: {}", s)),
        }
    }
}

/// A distance expressed in grid squares, feet and meters at once.
///
/// Every field is rounded to one decimal place for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    /// Distance in grid squares.
    pub squares: f64,
    /// Distance in feet.
    pub feet: f64,
    /// Distance in meters.
    pub meters: f64,
}

impl fmt::Display for DistanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} squares ({} ft / {} m)",
            self.squares, self.feet, self.meters
        )
    }
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert a distance in grid squares into a [`DistanceResult`].
///
/// `unit_size` is the length of one cell edge in `unit`. The declared unit
/// is computed first, the other derived via the fixed ft/m factors, and all
/// three fields rounded to one decimal.
pub fn convert_distance(squares: f64, unit_size: f64, unit: MeasurementUnit) -> DistanceResult {
    match unit {
        MeasurementUnit::Feet => {
            let feet = squares * unit_size;
            DistanceResult {
                squares: round1(squares),
                feet: round1(feet),
                meters: round1(feet * METERS_PER_FOOT),
            }
        }
        MeasurementUnit::Meters => {
            let meters = squares * unit_size;
            DistanceResult {
                squares: round1(squares),
                feet: round1(meters * FEET_PER_METER),
                meters: round1(meters),
            }
        }
    }
}

/// Number of whole cells needed to cover a range declared in feet.
///
/// Rounding is always ceiling so a reachable area is never under-drawn.
/// When the grid is configured in meters the range is converted first.
pub fn cells_from_feet(feet: f64, unit_size: f64, unit: MeasurementUnit) -> i32 {
    let in_unit = match unit {
        MeasurementUnit::Feet => feet,
        MeasurementUnit::Meters => feet * METERS_PER_FOOT,
    };
    (in_unit / unit_size).ceil() as i32
}

/// Get the short unit label ("ft" or "m")
pub fn unit_label(unit: MeasurementUnit) -> &'static str {
    match unit {
        MeasurementUnit::Feet => "ft",
        MeasurementUnit::Meters => "m",
    }
}
