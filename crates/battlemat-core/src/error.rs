//! Error handling for battlemat.
//!
//! Provides error types for the layers of the engine:
//! - Grid errors (invalid configuration)
//! - Interaction errors (drag/measurement state machine violations)
//! - Store errors (entity fetch and position persistence)
//!
//! All error types use `thiserror`. Out-of-bounds clicks and malformed
//! stored positions are not errors at all: they are silently rejected or
//! coerced at the boundary where they occur.

use thiserror::Error;

/// Grid configuration error type
#[derive(Error, Debug, Clone)]
pub enum GridError {
    /// Configuration value outside its allowed range
    #[error("Invalid grid configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected.
        reason: String,
    },
}

/// Interaction error type
///
/// Represents violations of the drag and measurement state machines.
#[derive(Error, Debug, Clone)]
pub enum InteractionError {
    /// Invalid state transition
    #[error("Invalid state transition from {current} to {requested}")]
    InvalidStateTransition {
        /// The current state name.
        current: String,
        /// The requested state name.
        requested: String,
    },

    /// Referenced token does not exist on the board
    #[error("Token {id} not found")]
    TokenNotFound {
        /// The token id that was not found.
        id: i64,
    },
}

/// Store error type
///
/// Represents failures talking to the external entity store.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// Entity fetch failed
    #[error("Failed to fetch entities: {reason}")]
    Fetch {
        /// Why the fetch failed.
        reason: String,
    },

    /// Position persistence failed
    #[error("Failed to persist position for entity {entity_id}: {reason}")]
    Persist {
        /// The entity whose position could not be saved.
        entity_id: i64,
        /// Why the write failed.
        reason: String,
    },

    /// Stored data could not be read or decoded
    #[error("Store data error: {reason}")]
    Data {
        /// Why the data was unreadable.
        reason: String,
    },
}

/// Main error type for battlemat
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Grid configuration error
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Interaction state machine error
    #[error(transparent)]
    Interaction(#[from] InteractionError),

    /// Entity store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an invalid state transition
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Error::Interaction(InteractionError::InvalidStateTransition { .. })
        )
    }

    /// Check if this is a store error
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
