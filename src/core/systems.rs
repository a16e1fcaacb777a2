//! Core domain: camera setup and pause handling.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::resources::GameplayPaused;

/// World units per screen pixel.
pub(crate) const CAMERA_SCALE: f32 = 1.0 / 32.0;

const PAUSE_MENU_SOURCE: &str = "pause_menu";

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        let now_paused = paused.toggle(PAUSE_MENU_SOURCE);
        info!("Pause menu: {}", if now_paused { "on" } else { "off" });
    }
}

/// Keep the physics clock in step with the gameplay pause state.
pub(crate) fn sync_physics_pause(
    paused: Res<GameplayPaused>,
    mut physics_time: ResMut<Time<Physics>>,
) {
    if !paused.is_changed() {
        return;
    }
    if paused.is_paused() {
        physics_time.pause();
    } else {
        physics_time.unpause();
    }
}
