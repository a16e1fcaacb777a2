//! Movement domain: normalizes latched device state into an `InputFrame`.

use bevy::prelude::*;

use crate::movement::math::move_towards;
use crate::movement::{AxisSmoothing, InputFrame, RawInput};

/// Turns digital axes into smoothed ones and passes edges through unchanged.
#[derive(Resource, Debug, Clone)]
pub struct InputSampler {
    pub smoothing: AxisSmoothing,
    axis: Vec2,
}

impl InputSampler {
    pub fn new(smoothing: AxisSmoothing) -> Self {
        Self {
            smoothing,
            axis: Vec2::ZERO,
        }
    }

    pub fn sample(&mut self, raw: &RawInput, dt: f32) -> InputFrame {
        let horizontal_raw = f32::from(raw.horizontal.clamp(-1, 1));
        let vertical_raw = f32::from(raw.vertical.clamp(-1, 1));

        self.axis.x = smooth_axis(self.axis.x, horizontal_raw, &self.smoothing, dt);
        self.axis.y = smooth_axis(self.axis.y, vertical_raw, &self.smoothing, dt);

        InputFrame {
            horizontal: self.axis.x,
            vertical: self.axis.y,
            horizontal_raw,
            vertical_raw,
            jump_pressed: raw.jump_pressed,
            jump_held: raw.jump_held,
            alt_jump_pressed: raw.alt_jump_pressed,
            dash_pressed: raw.dash_pressed,
            sustain_held: raw.sustain_held,
        }
    }
}

impl FromWorld for InputSampler {
    fn from_world(world: &mut World) -> Self {
        let smoothing = world
            .get_resource::<AxisSmoothing>()
            .copied()
            .unwrap_or_default();
        Self::new(smoothing)
    }
}

fn smooth_axis(current: f32, target: f32, smoothing: &AxisSmoothing, dt: f32) -> f32 {
    if target == 0.0 {
        return move_towards(current, 0.0, smoothing.gravity * dt);
    }
    let start = if smoothing.snap && current != 0.0 && current.signum() != target.signum() {
        0.0
    } else {
        current
    };
    move_towards(start, target, smoothing.sensitivity * dt).clamp(-1.0, 1.0)
}
