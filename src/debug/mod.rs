//! Debug mode for tuning locomotion feel.
//!
//! Features:
//! - Toggle an overlay with contacts, flags and timers (F1 or `)
//! - Reload assets/data/movement.ron without restarting (Ctrl+R)

mod systems;
mod ui;

use bevy::prelude::*;

use crate::debug::systems::{reload_tuning, toggle_debug_overlay, update_debug_overlay};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the locomotion overlay is visible
    pub overlay_visible: bool,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Age the status message, dropping it once expired.
    pub fn tick_message(&mut self, dt: f32) {
        if let Some((_, remaining)) = &mut self.status_message {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.status_message = None;
            }
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_overlay, reload_tuning, update_debug_overlay).chain(),
        );
    }
}
