//! Movement domain: per-tick grace timers.

use crate::movement::{ContactState, InputFrame, LocomotionFlags, MovementConfig};

/// Tolerance for comparing accumulated fixed-step time against a duration.
pub const TIME_EPSILON: f32 = 1e-5;

/// Counters advanced once per fixed tick. Counters may go arbitrarily
/// negative between resets; only their sign gates behavior.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TimerSet {
    /// Controller clock, seconds since construction.
    pub now: f32,
    /// Coyote time remaining.
    pub hang_time_counter: f32,
    pub jump_buffer_counter: f32,
    /// Wall grabs are suppressed until `now` passes this.
    pub wall_jump_lock_until: f32,
    /// Seconds since the current dash began. Meaningless outside a dash.
    pub dash_elapsed: f32,
    pub left_ground_at: Option<f32>,
}

impl TimerSet {
    /// `contacts` is the snapshot the previous tick resolved against.
    pub fn advance(
        &mut self,
        dt: f32,
        contacts: &ContactState,
        input: &InputFrame,
        flags: &LocomotionFlags,
        config: &MovementConfig,
    ) {
        self.now += dt;

        if contacts.grounded {
            self.hang_time_counter = config.hang_time;
        } else {
            self.hang_time_counter -= dt;
        }

        // The alternate button doubles as climb while grabbing.
        let buffers_jump =
            input.jump_pressed || (input.alt_jump_pressed && !flags.is_wall_grabbing);
        if buffers_jump {
            self.jump_buffer_counter = config.jump_buffer_length;
        } else {
            self.jump_buffer_counter -= dt;
        }

        if flags.is_dashing {
            self.dash_elapsed += dt;
        }
    }

    pub fn can_jump(&self) -> bool {
        self.jump_buffer_counter > 0.0 && self.hang_time_counter > 0.0
    }

    pub fn consume_jump_buffer(&mut self) {
        self.jump_buffer_counter = 0.0;
    }

    pub fn start_wall_jump_lock(&mut self, config: &MovementConfig) {
        self.wall_jump_lock_until = self.now + config.wall_jump_lock;
    }

    pub fn wall_jump_locked(&self) -> bool {
        self.now <= self.wall_jump_lock_until
    }

    pub fn dash_expired(&self, config: &MovementConfig) -> bool {
        self.dash_elapsed + TIME_EPSILON >= config.dash_length
    }

    /// Seconds since leaving the ground, if airborne since then.
    pub fn airborne_for(&self, grounded: bool) -> Option<f32> {
        if grounded {
            return None;
        }
        self.left_ground_at.map(|t| self.now - t)
    }
}
