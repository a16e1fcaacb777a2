//! Debug overlay UI spawning and text formatting.

use bevy::prelude::*;

use crate::movement::{InputFrame, LocomotionController};

/// Marker for the locomotion overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "-" }
}

pub(crate) fn format_locomotion(
    controller: &LocomotionController,
    input: &InputFrame,
    status: Option<&str>,
) -> String {
    let contacts = controller.contacts;
    let flags = controller.flags;
    let timers = controller.timers;
    let motion = controller.motion;

    let mut text = format!(
        "LOCOMOTION  (F1 hide | Ctrl+R reload tuning | Esc pause)\n\
         velocity: ({:.2}, {:.2})  gravity_scale: {:.1}  facing: {:+.0}\n\
         contacts: ground {}  left {}  right {}\n\
         flags: jumped {}  dashed {}  dashing {}  sliding {}  grabbing {}\n\
         hang_time: {:.3}  jump_buffer: {:.3}  can_jump: {}\n\
         lerp_speed: {:.1}  wall_lock_left: {:.3}\n\
         input: h {:+.2} ({:+.0})  v {:+.2} ({:+.0})",
        motion.velocity.x,
        motion.velocity.y,
        motion.gravity_scale,
        motion.facing,
        on_off(contacts.grounded),
        on_off(contacts.left_wall),
        on_off(contacts.right_wall),
        on_off(flags.has_jumped),
        on_off(flags.has_dashed),
        on_off(flags.is_dashing),
        on_off(flags.is_wall_sliding),
        on_off(flags.is_wall_grabbing),
        timers.hang_time_counter,
        timers.jump_buffer_counter,
        on_off(timers.can_jump()),
        motion.current_lerp_speed,
        (timers.wall_jump_lock_until - timers.now).max(0.0),
        input.horizontal,
        input.horizontal_raw,
        input.vertical,
        input.vertical_raw,
    );

    if let Some(airborne) = timers.airborne_for(contacts.grounded) {
        text.push_str(&format!("\nairborne for: {:.2}s", airborne));
    }
    if let Some(message) = status {
        text.push_str(&format!("\n{}", message));
    }
    text
}
