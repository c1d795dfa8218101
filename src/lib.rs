//! # Battlemat
//!
//! A grid engine for browser-style virtual tabletops: square-grid
//! coordinate math, drag-to-move tokens with snapping and clamping,
//! two-point distance measurement, spell area templates and viewport
//! pan/zoom, with best-effort position persistence.
//!
//! ## Architecture
//!
//! Battlemat is organized as a workspace with multiple crates:
//!
//! 1. **battlemat-core** - Grid model, unit conversion, errors, event bus
//! 2. **battlemat-store** - Entity persistence boundary and backends
//! 3. **battlemat-board** - Tokens, drag, measurement, templates, viewport
//! 4. **battlemat-settings** - Configuration files
//! 5. **battlemat** - Main binary that wires a session together

pub use battlemat_board::{
    Board, ClickOutcome, DragController, DragSession, MeasurementController, PositionCommit,
    PositionSyncer, ShapeGeometry, SpellShape, SpellTemplate, Token, TokenStore, Viewport,
    WheelAction, WheelDirection, ZoomDirection,
};

pub use battlemat_core::{
    cell_center, cell_label, cell_to_pixel_origin, cells_from_feet, convert_distance,
    pixel_to_cell, snap_delta, AppEvent, DistanceResult, DragEvent, Error, EventBus, EventFilter,
    GridConfig, GridError, GridPoint, InteractionError, MeasurementEvent, MeasurementUnit,
    PixelPoint, PixelVec, Result, StoreError, StoreEvent, TokenEvent, ViewportEvent,
};

pub use battlemat_settings::{Config, GridSettings, SessionSettings, Theme, UiSettings};
pub use battlemat_store::{EntityRecord, EntityStore, JsonFileStore, MemoryStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
