//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::core::GameplayPaused;
use crate::movement::{InputFrame, InputSampler, RawInput};

/// Latch keyboard state every frame. Edges accumulate until a fixed tick
/// consumes them, so a tap between two ticks is neither lost nor repeated.
/// No fixed tick runs while paused, so edges are dropped instead of latched.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    paused: Res<GameplayPaused>,
    mut raw: ResMut<RawInput>,
) {
    // Horizontal axis
    let mut x = 0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1;
    }

    // Vertical axis (climb and dash aim)
    let mut y = 0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1;
    }

    raw.horizontal = x;
    raw.vertical = y;
    raw.jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);
    raw.sustain_held = raw.jump_held || keyboard.pressed(KeyCode::KeyC);

    if paused.is_paused() {
        raw.consume_edges();
        return;
    }

    raw.jump_pressed |=
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    raw.alt_jump_pressed |=
        keyboard.just_pressed(KeyCode::KeyW) || keyboard.just_pressed(KeyCode::ArrowUp);
    raw.dash_pressed |=
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);
}

/// Produce this tick's `InputFrame` and clear the consumed edges.
pub(crate) fn sample_input(
    time: Res<Time>,
    mut raw: ResMut<RawInput>,
    mut sampler: ResMut<InputSampler>,
    mut frame: ResMut<InputFrame>,
) {
    *frame = sampler.sample(&raw, time.delta_secs());
    raw.consume_edges();
}
