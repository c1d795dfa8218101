//! # Battlemat Board
//!
//! The interactive board: tokens, drag-to-move with grid snapping,
//! two-point measurement, spell area templates, viewport pan/zoom and
//! background position persistence.
//!
//! [`Board`] is the facade the input and rendering layers talk to; the
//! controllers underneath it are pure state machines that can be tested
//! in isolation.

pub mod board;
pub mod drag;
pub mod geometry;
pub mod measure;
pub mod sync;
pub mod token;
pub mod viewport;

pub use board::{Board, ClickOutcome, WheelAction, WheelDirection};
pub use drag::{DragController, DragSession, PositionCommit};
pub use geometry::{
    euclidean_distance, measure as measure_distance, movement_range, project, ShapeGeometry,
    SpellShape, SpellTemplate,
};
pub use measure::MeasurementController;
pub use sync::PositionSyncer;
pub use token::{Token, TokenStore};
pub use viewport::{Viewport, ZoomDirection};
