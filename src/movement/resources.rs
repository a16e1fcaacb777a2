//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Locomotion tunables. Distances are world units, times are seconds.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Rate at which the horizontal drive ramps toward full input, per second.
    pub movement_acceleration: f32,
    pub walk_speed: f32,
    /// Baseline for the rate (units/s) at which velocity approaches its target.
    pub movement_lerp_speed: f32,
    pub jump_force: f32,
    pub fall_multiplier: f32,
    /// Vertical speed below which fall shaping always applies.
    pub jump_velocity_falloff: f32,
    /// Coyote-time window.
    pub hang_time: f32,
    pub jump_buffer_length: f32,
    pub slide_speed: f32,
    pub dash_speed: f32,
    pub dash_length: f32,
    /// Upper bound on vertical speed when a dash ends.
    pub dash_exit_vertical_cap: f32,
    /// Wall grab re-entry suppression after a wall jump.
    pub wall_jump_lock: f32,
    /// Reduced lerp speed after a wall jump; also the recovery rate toward the baseline.
    pub wall_jump_movement_lerp: f32,
    pub ground_probe_distance: f32,
    pub wall_probe_distance: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            movement_acceleration: 2.0,
            walk_speed: 6.0,
            movement_lerp_speed: 100.0,
            jump_force: 23.0,
            fall_multiplier: 7.0,
            jump_velocity_falloff: 0.0,
            hang_time: 0.1,
            jump_buffer_length: 0.5,
            slide_speed: 1.0,
            dash_speed: 12.5,
            dash_length: 0.3,
            dash_exit_vertical_cap: 2.0,
            wall_jump_lock: 0.25,
            wall_jump_movement_lerp: 2.0,
            ground_probe_distance: 0.1,
            wall_probe_distance: 0.1,
        }
    }
}

/// Smoothing applied to the digital axes before the core sees them.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AxisSmoothing {
    /// Speed (per second) toward a held direction.
    pub sensitivity: f32,
    /// Speed (per second) back to rest once released.
    pub gravity: f32,
    /// Jump to zero when the held direction reverses.
    pub snap: bool,
}

impl Default for AxisSmoothing {
    fn default() -> Self {
        Self {
            sensitivity: 3.0,
            gravity: 3.0,
            snap: true,
        }
    }
}

/// Device state latched between frames. Edge flags stay set until a fixed
/// tick consumes them.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct RawInput {
    pub horizontal: i8,
    pub vertical: i8,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub alt_jump_pressed: bool,
    pub dash_pressed: bool,
    pub sustain_held: bool,
}

impl RawInput {
    /// Clear edge flags after a tick has observed them.
    pub fn consume_edges(&mut self) {
        self.jump_pressed = false;
        self.alt_jump_pressed = false;
        self.dash_pressed = false;
    }
}

/// One tick of normalized input, read-only to the controller.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct InputFrame {
    pub horizontal: f32,
    pub vertical: f32,
    pub horizontal_raw: f32,
    pub vertical_raw: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
    /// Alternate jump button; ground and coyote jumps only.
    pub alt_jump_pressed: bool,
    pub dash_pressed: bool,
    /// Hold to jump higher.
    pub sustain_held: bool,
}

impl InputFrame {
    pub fn any_jump_pressed(&self) -> bool {
        self.jump_pressed || self.alt_jump_pressed
    }
}
