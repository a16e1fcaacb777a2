//! Debug systems for overlay toggling and tuning reload.

use bevy::prelude::*;
use std::path::Path;

use crate::content::{TUNING_PATH, load_tuning};
use crate::debug::DebugState;
use crate::debug::ui::{DebugInfoOverlay, format_locomotion, spawn_debug_info_overlay};
use crate::movement::{
    AxisSmoothing, InputFrame, InputSampler, LocomotionController, MovementConfig, Player,
};

pub(crate) fn toggle_debug_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugInfoOverlay>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);
    if !toggle {
        return;
    }

    debug_state.overlay_visible = !debug_state.overlay_visible;
    if debug_state.overlay_visible {
        spawn_debug_info_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

/// Ctrl+R: re-read the tuning file and push it into every controller.
/// A file that fails to load leaves the current tuning in place.
pub(crate) fn reload_tuning(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut config: ResMut<MovementConfig>,
    mut smoothing: ResMut<AxisSmoothing>,
    mut sampler: ResMut<InputSampler>,
    mut controllers: Query<&mut LocomotionController, With<Player>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !(ctrl && keyboard.just_pressed(KeyCode::KeyR)) {
        return;
    }

    match load_tuning(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            *config = tuning.movement;
            *smoothing = tuning.input;
            sampler.smoothing = tuning.input;
            for mut controller in &mut controllers {
                controller.reconfigure(config.clone());
            }
            debug_state.set_message("Tuning reloaded", 2.0);
            info!("[DEBUG] Reloaded tuning from {}", TUNING_PATH);
        }
        Err(e) => {
            debug_state.set_message("Tuning reload failed, see log", 3.0);
            warn!("[DEBUG] {}", e);
        }
    }
}

pub(crate) fn update_debug_overlay(
    time: Res<Time>,
    input: Res<InputFrame>,
    mut debug_state: ResMut<DebugState>,
    players: Query<&LocomotionController, With<Player>>,
    mut overlay: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    debug_state.tick_message(time.delta_secs());

    let Ok(mut text) = overlay.single_mut() else {
        return;
    };
    let Some(controller) = players.iter().next() else {
        return;
    };

    let status = debug_state.status_message.as_ref().map(|(m, _)| m.as_str());
    **text = format_locomotion(controller, &input, status);
}
