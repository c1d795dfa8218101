//! # Battlemat Core
//!
//! Core types and utilities for the battlemat grid engine: the grid
//! coordinate model, unit conversion, the error taxonomy and the
//! application event bus.

pub mod constants;
pub mod error;
pub mod event_bus;
pub mod grid;
pub mod units;

pub use error::{Error, GridError, InteractionError, Result, StoreError};

pub use grid::{
    cell_center, cell_label, cell_to_pixel_origin, pixel_to_cell, snap_delta, GridConfig,
    GridPoint, PixelPoint, PixelVec,
};

pub use units::{cells_from_feet, convert_distance, unit_label, DistanceResult, MeasurementUnit};

// Re-export event bus for convenience
pub use event_bus::{
    event_bus, AppEvent, DragEvent, ErrorEvent, EventBus, EventCategory, EventFilter,
    MeasurementEvent, StoreEvent, SubscriptionId, TokenEvent, ViewportEvent,
};
