//! Configuration file handling.
//!
//! Supports JSON and TOML files stored in the platform config directory.
//! Configuration is organized into sections:
//! - Grid defaults (dimensions, cell size, units)
//! - UI preferences (theme, overlays)
//! - Session settings (user, entity data location)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use battlemat_core::constants::{
    DEFAULT_CELL_SIZE_PX, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_UNIT_SIZE,
};
use battlemat_core::{Error, GridConfig, MeasurementUnit, Result};

/// Theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow system preference
    System,
    /// Force light theme
    Light,
    /// Force dark theme
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::System
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "System"),
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}

/// Default grid parameters for new sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Grid width in cells
    pub width_cells: i32,
    /// Grid height in cells
    pub height_cells: i32,
    /// Initial cell size in pixels
    pub cell_size_px: f64,
    /// Measurement unit for distances
    pub unit: MeasurementUnit,
    /// Length of one cell edge in `unit`
    pub unit_size: f64,
}

impl Default for GridSettings {
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

impl GridSettings {
    /// Builds the runtime grid configuration from these settings.
    pub fn to_grid_config(&self) -> GridConfig {
        GridConfig {
            width_cells: self.width_cells,
            height_cells: self.height_cells,
            cell_size_px: self.cell_size_px,
            unit: self.unit,
            unit_size: self.unit_size,
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Color theme
    pub theme: Theme,
    /// Draw map-style cell labels along the grid edges
    pub show_cell_labels: bool,
    /// Draw the movement-range circle while dragging a token
    pub show_movement_range: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            show_cell_labels: true,
            show_movement_range: true,
        }
    }
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// User whose entities are loaded onto the board
    pub user_id: i64,
    /// Entity data file for the JSON-file store
    pub entities_file: PathBuf,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            user_id: 1,
            entities_file: PathBuf::from("entities.json"),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Grid defaults
    pub grid: GridSettings,
    /// UI preferences
    pub ui: UiSettings,
    /// Session settings
    pub session: SessionSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location, `battlemat/config.toml` under the
    /// user's configuration directory.
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| Error::other("No config directory on this platform"))?;
        Ok(dir.join("battlemat").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::other(format!("Failed to read config file: {}", e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::other(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        config.validate()?;
        Ok(config)
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist yet.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(Error::other(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::other(format!("Failed to create config directory: {}", e)))?;
        }
        std::fs::write(path, content)
            .map_err(|e| Error::other(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.grid.to_grid_config().validate()?;

        if self.session.user_id <= 0 {
            return Err(Error::other("Session user id must be positive".to_string()));
        }

        Ok(())
    }
}
