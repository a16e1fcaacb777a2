//! Data definitions for the tuning file.
//!
//! Mirrors assets/data/movement.ron. Every field falls back to its default,
//! so a file only needs the values it changes.

use serde::{Deserialize, Serialize};

use crate::movement::{AxisSmoothing, MovementConfig};

/// Schema version this build understands.
pub const TUNING_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    #[serde(default)]
    pub movement: MovementConfig,
    #[serde(default)]
    pub input: AxisSmoothing,
}

impl Default for TuningFile {
    fn default() -> Self {
        Self {
            schema_version: TUNING_SCHEMA_VERSION,
            movement: MovementConfig::default(),
            input: AxisSmoothing::default(),
        }
    }
}
