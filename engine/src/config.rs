//! Rig Configuration
//!
//! All tunables for a player rig in one serde-friendly struct, with JSON
//! persistence so hosts can ship movement/camera presets as plain files.
//! Every field has a documented default; partial files deserialize against
//! those defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::player::MovementConfig;

/// Complete tunable set for a [`PlayerRig`](crate::rig::PlayerRig).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Eye height above the feet (default: 64.0). Fixed - the crouch eye drop
    /// is handled by the camera's smoothed offset, not by moving the head.
    pub eye_height: f32,
    /// Movement tunables.
    pub movement: MovementConfig,
    /// Camera tunables.
    pub camera: CameraConfig,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            eye_height: 64.0,
            movement: MovementConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

/// Errors that can occur loading or saving a rig config.
#[derive(Debug)]
pub enum ConfigError {
    /// Underlying filesystem failure.
    Io(std::io::Error),
    /// Malformed JSON or schema mismatch.
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl RigConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Save the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
