//! Content domain: data-driven tuning loaded from assets/data.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{TUNING_SCHEMA_VERSION, TuningFile};
pub use loader::{TuningLoadError, load_tuning, parse_tuning};
pub use validation::{TuningIssue, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

/// Tuning file location, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/movement.ron";

/// Load tuning, falling back to built-in defaults on any failure.
pub fn load_tuning_or_default(path: &Path) -> TuningFile {
    match load_tuning(path) {
        Ok(tuning) => {
            info!(
                "Loaded tuning from {}: walk_speed={}, jump_force={}, hang_time={}, jump_buffer_length={}",
                path.display(),
                tuning.movement.walk_speed,
                tuning.movement.jump_force,
                tuning.movement.hang_time,
                tuning.movement.jump_buffer_length
            );
            tuning
        }
        Err(e) => {
            error!("{}", e);
            warn!("Using default movement tuning");
            TuningFile::default()
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = load_tuning_or_default(Path::new(TUNING_PATH));
        app.insert_resource(tuning.movement)
            .insert_resource(tuning.input);
    }
}
