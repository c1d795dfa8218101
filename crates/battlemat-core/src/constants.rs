//! Shared constants for grid geometry and interaction tuning.

/// Meters per foot, used for all distance conversions.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Feet per meter, used for all distance conversions.
pub const FEET_PER_METER: f64 = 3.28084;

/// Smallest allowed grid dimension, in cells.
pub const MIN_GRID_CELLS: i32 = 5;

/// Smallest allowed cell size, in pixels.
pub const MIN_CELL_SIZE_PX: f64 = 20.0;

/// Largest allowed cell size, in pixels.
pub const MAX_CELL_SIZE_PX: f64 = 200.0;

/// Cell size change per wheel tick when zooming, in pixels.
pub const ZOOM_STEP_PX: f64 = 5.0;

/// Spell rotation change per wheel tick in measurement mode, in degrees.
pub const ROTATION_STEP_DEGREES: f64 = 15.0;

/// Fixed aperture of the cone area template, in degrees.
pub const CONE_APERTURE_DEGREES: f64 = 60.0;

/// Maximum number of measurement points held at once.
pub const MAX_MEASUREMENT_POINTS: usize = 2;

/// Default grid width, in cells.
pub const DEFAULT_GRID_WIDTH: i32 = 20;

/// Default grid height, in cells.
pub const DEFAULT_GRID_HEIGHT: i32 = 15;

/// Default cell size, in pixels.
pub const DEFAULT_CELL_SIZE_PX: f64 = 50.0;

/// Default length of one cell edge in the configured unit.
pub const DEFAULT_UNIT_SIZE: f64 = 5.0;

/// Default spell template range, in feet.
pub const DEFAULT_SPELL_RANGE_FEET: f64 = 30.0;
