//! # Battlemat Settings
//!
//! Application configuration: grid defaults, UI preferences and session
//! settings, persisted as JSON or TOML in the platform config directory.

pub mod config;

pub use config::{Config, GridSettings, SessionSettings, Theme, UiSettings};
