//! Measurement mode.
//!
//! Holds at most two measurement points; placing a third replaces the
//! newest one so the first anchor survives repeated probing. The most
//! recently placed point doubles as the spell template origin. Leaving
//! the mode clears everything.

use battlemat_core::constants::MAX_MEASUREMENT_POINTS;
use battlemat_core::{pixel_to_cell, DistanceResult, GridConfig, GridPoint, PixelPoint, PixelVec};

use crate::geometry::{measure, SpellShape, SpellTemplate};

/// Measurement mode state: points, distance and the spell template.
#[derive(Debug, Clone, Default)]
pub struct MeasurementController {
    active: bool,
    points: Vec<GridPoint>,
    template: SpellTemplate,
}

impl MeasurementController {
    /// Creates an inactive controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while measurement mode is on.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Toggles measurement mode. Turning the mode off clears all points
    /// and resets the spell template. Returns true when the state changed.
    pub fn set_active(&mut self, active: bool) -> bool {
        if self.active == active {
            return false;
        }
        self.active = active;
        if !active {
            self.clear();
        }
        true
    }

    /// Clears points and template while keeping the mode as is.
    pub fn clear(&mut self) {
        self.points.clear();
        self.template.reset();
    }

    /// Points currently held, oldest first.
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// The spell template.
    pub fn template(&self) -> &SpellTemplate {
        &self.template
    }

    /// Sets the template shape.
    pub fn set_shape(&mut self, shape: SpellShape) {
        self.template.shape = shape;
    }

    /// Sets the template range in feet. Negative ranges are clamped to 0.
    pub fn set_range_feet(&mut self, range_feet: f64) {
        self.template.range_feet = range_feet.max(0.0);
    }

    /// Rotates the template facing by a step in degrees.
    pub fn rotate_template(&mut self, step_degrees: f64) -> f64 {
        self.template.rotate(step_degrees);
        self.template.rotation_degrees
    }

    /// Places a measurement point from a pixel click.
    ///
    /// The pixel is converted through the current pan offset and cell
    /// size; clicks outside the grid are silently rejected. Returns the
    /// placed cell, or `None` when inactive or out of bounds.
    pub fn place_pixel(
        &mut self,
        pixel: PixelPoint,
        offset: PixelVec,
        config: &GridConfig,
    ) -> Option<GridPoint> {
        if !self.active {
            return None;
        }
        let cell = pixel_to_cell(pixel, offset, config.cell_size_px);
        if !config.contains(cell) {
            return None;
        }
        self.place(cell);
        Some(cell)
    }

    /// Places a measurement point at a known cell, typically a token's
    /// position. Returns `None` when the mode is off.
    pub fn place_cell(&mut self, cell: GridPoint) -> Option<GridPoint> {
        if !self.active {
            return None;
        }
        self.place(cell);
        Some(cell)
    }

    fn place(&mut self, cell: GridPoint) {
        if self.points.len() == MAX_MEASUREMENT_POINTS {
            // Keep the anchor, replace the probe
            self.points.pop();
        }
        self.points.push(cell);
        self.template.origin = Some(cell);
    }

    /// Distance between the two held points, when both are placed.
    pub fn distance(&self, config: &GridConfig) -> Option<DistanceResult> {
        match self.points.as_slice() {
            [a, b] => Some(measure(*a, *b, config)),
            _ => None,
        }
    }
}
