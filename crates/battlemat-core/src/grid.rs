//! Grid coordinate model.
//!
//! Defines the mapping between continuous pixel space and discrete grid
//! cells. All conversions here are pure; callers decide what to do with
//! out-of-range results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    DEFAULT_CELL_SIZE_PX, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_UNIT_SIZE,
    MAX_CELL_SIZE_PX, MIN_CELL_SIZE_PX, MIN_GRID_CELLS,
};
use crate::error::{GridError, Result};
use crate::units::MeasurementUnit;

/// Discrete cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    /// Creates a new grid point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Continuous position in screen pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    /// Creates a new pixel point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Continuous pixel-space displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelVec {
    pub x: f64,
    pub y: f64,
}

impl PixelVec {
    /// Creates a new pixel vector.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Grid dimensions and scale for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid width in cells.
    pub width_cells: i32,
    /// Grid height in cells.
    pub height_cells: i32,
    /// Rendered size of one cell, in pixels.
    pub cell_size_px: f64,
    /// Unit in which `unit_size` is expressed.
    pub unit: MeasurementUnit,
    /// Length of one cell edge in `unit`.
    pub unit_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width_cells: DEFAULT_GRID_WIDTH,
            height_cells: DEFAULT_GRID_HEIGHT,
            cell_size_px: DEFAULT_CELL_SIZE_PX,
            unit: MeasurementUnit::Feet,
            unit_size: DEFAULT_UNIT_SIZE,
        }
    }
}

impl GridConfig {
    /// Validates dimensions, cell size and unit scale.
    pub fn validate(&self) -> Result<()> {
        if self.width_cells < MIN_GRID_CELLS || self.height_cells < MIN_GRID_CELLS {
            return Err(GridError::InvalidConfig {
                reason: format!(
                    "grid must be at least {}x{} cells, got {}x{}",
                    MIN_GRID_CELLS, MIN_GRID_CELLS, self.width_cells, self.height_cells
                ),
            }
            .into());
        }
        if self.cell_size_px < MIN_CELL_SIZE_PX || self.cell_size_px > MAX_CELL_SIZE_PX {
            return Err(GridError::InvalidConfig {
                reason: format!(
                    "cell size must be within [{}, {}] px, got {}",
                    MIN_CELL_SIZE_PX, MAX_CELL_SIZE_PX, self.cell_size_px
                ),
            }
            .into());
        }
        if self.unit_size <= 0.0 {
            return Err(GridError::InvalidConfig {
                reason: format!("unit size must be positive, got {}", self.unit_size),
            }
            .into());
        }
        Ok(())
    }

    /// True when the point lies inside the grid bounds.
    pub fn contains(&self, point: GridPoint) -> bool {
        point.x >= 0 && point.x < self.width_cells && point.y >= 0 && point.y < self.height_cells
    }

    /// Clamps a cell position so a token of the given footprint stays on
    /// the grid: each axis lands in `[0, dimension - footprint]`.
    pub fn clamp_for_footprint(&self, point: GridPoint, footprint_cells: i32) -> GridPoint {
        let max_x = (self.width_cells - footprint_cells).max(0);
        let max_y = (self.height_cells - footprint_cells).max(0);
        GridPoint::new(point.x.clamp(0, max_x), point.y.clamp(0, max_y))
    }
}

/// Converts a pixel position to the cell it falls in.
///
/// Formula per axis: `floor((pixel - offset) / cell_size)`.
///
/// The result is not clamped; a click left of the grid yields a negative
/// coordinate and callers decide whether to reject it.
pub fn pixel_to_cell(pixel: PixelPoint, offset: PixelVec, cell_size_px: f64) -> GridPoint {
    GridPoint::new(
        ((pixel.x - offset.x) / cell_size_px).floor() as i32,
        ((pixel.y - offset.y) / cell_size_px).floor() as i32,
    )
}

/// Top-left pixel of a cell. Inverse of [`pixel_to_cell`].
pub fn cell_to_pixel_origin(cell: GridPoint, offset: PixelVec, cell_size_px: f64) -> PixelPoint {
    PixelPoint::new(
        cell.x as f64 * cell_size_px + offset.x,
        cell.y as f64 * cell_size_px + offset.y,
    )
}

/// Center pixel of a cell.
pub fn cell_center(cell: GridPoint, offset: PixelVec, cell_size_px: f64) -> PixelPoint {
    let origin = cell_to_pixel_origin(cell, offset, cell_size_px);
    PixelPoint::new(origin.x + cell_size_px / 2.0, origin.y + cell_size_px / 2.0)
}

/// Snaps a continuous pixel displacement to whole cells.
///
/// Each axis is `round(delta / cell_size)`, so a drag must cross at least
/// half a cell to move one. Halves round away from zero.
pub fn snap_delta(delta: PixelVec, cell_size_px: f64) -> (i32, i32) {
    (
        (delta.x / cell_size_px).round() as i32,
        (delta.y / cell_size_px).round() as i32,
    )
}

/// Map-style label for a cell: row letter plus 1-based column number.
///
/// Rows past `Z` wrap to `AA`, `AB`, ... like spreadsheet columns.
pub fn cell_label(cell: GridPoint) -> String {
    let mut letters = String::new();
    let mut row = cell.y;
    loop {
        letters.insert(0, (b'A' + (row % 26) as u8) as char);
        row = row / 26 - 1;
        if row < 0 {
            break;
        }
    }
    format!("{}{}", letters, cell.x + 1)
}
