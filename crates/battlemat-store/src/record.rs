//! Raw entity rows as returned by the external store.
//!
//! Stored positions are untrusted: rows written by older clients may hold
//! null or non-numeric values, so every accessor coerces to a safe default
//! instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entity row, field names matching the remote table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Primary key of the entity row.
    pub id_entity: i64,
    /// Owning user.
    pub id_user: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Stored X cell, possibly null or non-numeric.
    #[serde(default)]
    pub positionx: Option<Value>,
    /// Stored Y cell, possibly null or non-numeric.
    #[serde(default)]
    pub positiony: Option<Value>,
    /// Footprint side length in cells.
    #[serde(default)]
    pub size: Option<i64>,
    /// Movement speed in feet.
    #[serde(default)]
    pub speed: Option<f64>,
    /// Relative path of the portrait image, if uploaded.
    #[serde(default)]
    pub image: Option<String>,
}

/// Coerce a stored coordinate to an integer cell, defaulting to 0.
///
/// Accepts JSON numbers and numeric strings; anything else is 0.
fn coerce_coord(value: Option<&Value>) -> i32 {
    match value {
        Some(Value::Number(n)) => n.as_i64().unwrap_or_else(|| {
            n.as_f64().map(|f| f.trunc() as i64).unwrap_or(0)
        }) as i32,
        Some(Value::String(s)) => s.trim().parse::<f64>().map(|f| f.trunc() as i32).unwrap_or(0),
        _ => 0,
    }
}

impl EntityRecord {
    /// Stored grid position with malformed values coerced to 0.
    pub fn position(&self) -> (i32, i32) {
        (
            coerce_coord(self.positionx.as_ref()),
            coerce_coord(self.positiony.as_ref()),
        )
    }

    /// Footprint side length, never below 1.
    pub fn footprint_cells(&self) -> i32 {
        self.size.map(|s| s.max(1) as i32).unwrap_or(1)
    }

    /// Movement speed in feet, never negative.
    pub fn speed_feet(&self) -> f64 {
        self.speed.map(|s| s.max(0.0)).unwrap_or(0.0)
    }
}
