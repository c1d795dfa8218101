//! Event type definitions for the event bus.
//!
//! Events are organized by category and designed to be cloneable and
//! serializable for logging.

use serde::{Deserialize, Serialize};

use crate::grid::GridPoint;
use crate::units::DistanceResult;

/// Root event enum for all application events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    /// Token lifecycle and position events
    Token(TokenEvent),
    /// Drag interaction events
    Drag(DragEvent),
    /// Measurement mode events
    Measurement(MeasurementEvent),
    /// Viewport pan/zoom events
    Viewport(ViewportEvent),
    /// Persistence boundary events
    Store(StoreEvent),
    /// Error and diagnostic events
    Error(ErrorEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Token(_) => EventCategory::Token,
            AppEvent::Drag(_) => EventCategory::Drag,
            AppEvent::Measurement(_) => EventCategory::Measurement,
            AppEvent::Viewport(_) => EventCategory::Viewport,
            AppEvent::Store(_) => EventCategory::Store,
            AppEvent::Error(_) => EventCategory::Error,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Token(e) => e.description(),
            AppEvent::Drag(e) => e.description(),
            AppEvent::Measurement(e) => e.description(),
            AppEvent::Viewport(e) => e.description(),
            AppEvent::Store(e) => e.description(),
            AppEvent::Error(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Token lifecycle and position events.
    Token,
    /// Drag interaction events.
    Drag,
    /// Measurement mode events.
    Measurement,
    /// Viewport pan/zoom events.
    Viewport,
    /// Persistence boundary events.
    Store,
    /// Error and diagnostic events.
    Error,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Token => write!(f, "Token"),
            EventCategory::Drag => write!(f, "Drag"),
            EventCategory::Measurement => write!(f, "Measurement"),
            EventCategory::Viewport => write!(f, "Viewport"),
            EventCategory::Store => write!(f, "Store"),
            EventCategory::Error => write!(f, "Error"),
        }
    }
}

/// Token-related events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TokenEvent {
    /// Tokens were loaded from the entity store.
    Loaded {
        /// Number of tokens materialized.
        count: usize,
    },
    /// A drag commit moved a token to a new cell.
    PositionCommitted {
        /// The moved token.
        token_id: i64,
        /// Cell the drag started from.
        from: GridPoint,
        /// Clamped destination cell.
        to: GridPoint,
    },
}

impl TokenEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            TokenEvent::Loaded { count } => format!("{} tokens loaded", count),
            TokenEvent::PositionCommitted { token_id, from, to } => {
                format!("token {} moved {} -> {}", token_id, from, to)
            }
        }
    }
}

/// Drag interaction events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DragEvent {
    /// A drag session started.
    Started {
        /// The token being dragged.
        token_id: i64,
        /// Cell the token occupied at drag start.
        from: GridPoint,
    },
    /// A drag session ended without a position change.
    Ended {
        /// The token that was dragged.
        token_id: i64,
    },
    /// A drag session was cancelled.
    Cancelled {
        /// The token that was being dragged.
        token_id: i64,
    },
}

impl DragEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            DragEvent::Started { token_id, from } => {
                format!("drag of token {} started at {}", token_id, from)
            }
            DragEvent::Ended { token_id } => format!("drag of token {} ended in place", token_id),
            DragEvent::Cancelled { token_id } => format!("drag of token {} cancelled", token_id),
        }
    }
}

/// Measurement mode events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MeasurementEvent {
    /// Measurement mode was toggled.
    ModeChanged {
        /// Whether measurement mode is now active.
        active: bool,
    },
    /// A measurement point was placed or replaced.
    PointPlaced {
        /// The placed point.
        point: GridPoint,
        /// Number of points now held.
        count: usize,
    },
    /// Two points are held and a distance is available.
    DistanceAvailable {
        /// Distance between the two held points.
        distance: DistanceResult,
    },
    /// All measurement state was cleared.
    Cleared,
}

impl MeasurementEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            MeasurementEvent::ModeChanged { active } => {
                format!("measurement mode {}", if *active { "on" } else { "off" })
            }
            MeasurementEvent::PointPlaced { point, count } => {
                format!("measurement point {} placed ({} held)", point, count)
            }
            MeasurementEvent::DistanceAvailable { distance } => {
                format!("measured {}", distance)
            }
            MeasurementEvent::Cleared => "measurement cleared".to_string(),
        }
    }
}

/// Viewport events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ViewportEvent {
    /// The pan offset changed.
    Panned {
        /// New X offset in pixels.
        offset_x: f64,
        /// New Y offset in pixels.
        offset_y: f64,
    },
    /// The cell size changed through zooming.
    Zoomed {
        /// New cell size in pixels.
        cell_size_px: f64,
    },
}

impl ViewportEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            ViewportEvent::Panned { offset_x, offset_y } => {
                format!("panned to ({:.1}, {:.1})", offset_x, offset_y)
            }
            ViewportEvent::Zoomed { cell_size_px } => {
                format!("zoomed to {:.0} px cells", cell_size_px)
            }
        }
    }
}

/// Persistence boundary events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StoreEvent {
    /// A position write reached the store.
    PositionPersisted {
        /// The persisted entity.
        entity_id: i64,
    },
    /// A position write failed; the local state stands regardless.
    PersistFailed {
        /// The entity whose write failed.
        entity_id: i64,
        /// Error message from the store.
        error: String,
    },
}

impl StoreEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            StoreEvent::PositionPersisted { entity_id } => {
                format!("position of entity {} persisted", entity_id)
            }
            StoreEvent::PersistFailed { entity_id, error } => {
                format!("persist failed for entity {}: {}", entity_id, error)
            }
        }
    }
}

/// Error and diagnostic events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ErrorEvent {
    /// A recoverable error occurred.
    Warning {
        /// What went wrong.
        message: String,
    },
    /// A non-recoverable error occurred.
    Fatal {
        /// What went wrong.
        message: String,
    },
}

impl ErrorEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            ErrorEvent::Warning { message } => format!("warning: {}", message),
            ErrorEvent::Fatal { message } => format!("fatal: {}", message),
        }
    }
}
