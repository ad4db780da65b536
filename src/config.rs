//! Runtime configuration.
//!
//! Loaded from an optional JSON file. Every field has a default, so a partial
//! file (or none at all) is fine.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::*;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "ballerina.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    /// Length of a pose transition
    pub transition_ms: u64,
    /// Figure yaw per pixel of horizontal drag (radians)
    pub drag_sensitivity: f32,
    /// Pose shown at startup; unknown ids fall back to the first pose
    pub initial_pose: u32,
    /// Serve puffin frame profiles on PROFILER_ADDR
    pub profiler: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: WINDOW_DEFAULT_WIDTH,
            window_height: WINDOW_DEFAULT_HEIGHT,
            transition_ms: TRANSITION_DEFAULT_MS,
            drag_sensitivity: DRAG_SENSITIVITY,
            initial_pose: 1,
            profiler: false,
        }
    }
}

impl Config {
    /// Load the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json_str).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Transition length in seconds, the unit the frame loop works in
    pub fn transition_secs(&self) -> f32 {
        self.transition_ms as f32 / 1000.0
    }
}
