//! Movement domain: runs the controller and hands results to the physics body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::collisions::{SpatialProbe, collider_bounds};
use crate::movement::{
    AnimationFlags, AnimationSignal, AnimationSignalEvent, BodyState, DashLifecycleEvent,
    GroundContactEvent, InputFrame, JumpKind, JumpedEvent, LocomotionController, LocomotionEvent,
    Player, PlayerVisual, TickContext, WallSlideChangedEvent,
};

#[allow(clippy::type_complexity)]
pub(crate) fn step_locomotion(
    time: Res<Time>,
    gravity: Res<Gravity>,
    input: Res<InputFrame>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &Collider,
            &mut LocomotionController,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
    mut animation_writer: MessageWriter<AnimationSignalEvent>,
    mut dash_writer: MessageWriter<DashLifecycleEvent>,
    mut slide_writer: MessageWriter<WallSlideChangedEvent>,
    mut jump_writer: MessageWriter<JumpedEvent>,
    mut ground_writer: MessageWriter<GroundContactEvent>,
) {
    let ctx = TickContext {
        dt: time.delta_secs(),
        gravity_y: gravity.0.y,
    };

    for (entity, transform, collider, mut controller, mut velocity, mut gravity_scale) in
        &mut query
    {
        let body = BodyState {
            position: transform.translation.truncate(),
            bounds: collider_bounds(collider),
            velocity: velocity.0,
        };
        let probe = SpatialProbe::new(
            &spatial_query,
            entity,
            controller.config().ground_probe_distance,
            controller.config().wall_probe_distance,
        );

        let output = controller.tick(&input, &probe, body, ctx);

        velocity.0 = output.velocity;
        gravity_scale.0 = output.gravity_scale;

        for event in output.events {
            match event {
                LocomotionEvent::Animation(signal) => {
                    animation_writer.write(AnimationSignalEvent { entity, signal });
                }
                LocomotionEvent::Jumped(kind) => {
                    jump_writer.write(JumpedEvent { entity, kind });
                }
                LocomotionEvent::DashStarted { direction } => {
                    dash_writer.write(DashLifecycleEvent::Started { entity, direction });
                }
                LocomotionEvent::DashStopped { cancelled } => {
                    dash_writer.write(DashLifecycleEvent::Stopped { entity, cancelled });
                }
                LocomotionEvent::WallSlideStarted(side) => {
                    slide_writer.write(WallSlideChangedEvent {
                        entity,
                        side: Some(side),
                    });
                }
                LocomotionEvent::WallSlideStopped => {
                    slide_writer.write(WallSlideChangedEvent { entity, side: None });
                }
                LocomotionEvent::Landed => {
                    ground_writer.write(GroundContactEvent {
                        entity,
                        grounded: true,
                    });
                }
                LocomotionEvent::LeftGround => {
                    ground_writer.write(GroundContactEvent {
                        entity,
                        grounded: false,
                    });
                }
            }
        }
    }
}

/// Mirror the visual child to match facing.
pub(crate) fn apply_facing(
    players: Query<(&LocomotionController, &Children), With<Player>>,
    mut visuals: Query<&mut Transform, With<PlayerVisual>>,
) {
    for (controller, children) in &players {
        for child in children.iter() {
            if let Ok(mut transform) = visuals.get_mut(child) {
                transform.scale.x = transform.scale.x.abs() * controller.motion.facing;
            }
        }
    }
}

/// Fold controller messages into the player's `AnimationFlags`.
pub(crate) fn track_animation_flags(
    mut animation_reader: MessageReader<AnimationSignalEvent>,
    mut dash_reader: MessageReader<DashLifecycleEvent>,
    mut slide_reader: MessageReader<WallSlideChangedEvent>,
    mut ground_reader: MessageReader<GroundContactEvent>,
    mut jump_reader: MessageReader<JumpedEvent>,
    mut query: Query<&mut AnimationFlags, With<Player>>,
) {
    for mut flags in &mut query {
        flags.triggers.clear();
    }

    for event in animation_reader.read() {
        let Ok(mut flags) = query.get_mut(event.entity) else {
            continue;
        };
        let signal = event.signal;
        if signal.is_trigger() {
            flags.triggers.push(signal.name());
            continue;
        }
        match signal {
            AnimationSignal::Falling(on) => flags.falling = on,
            AnimationSignal::Running(on) => flags.running = on,
            _ => {}
        }
    }

    for event in dash_reader.read() {
        let (entity, dashing) = match event {
            DashLifecycleEvent::Started { entity, .. } => (*entity, true),
            DashLifecycleEvent::Stopped { entity, .. } => (*entity, false),
        };
        if let Ok(mut flags) = query.get_mut(entity) {
            flags.dashing = dashing;
        }
    }

    for event in slide_reader.read() {
        if let Ok(mut flags) = query.get_mut(event.entity) {
            flags.wall_sliding = event.side.is_some();
        }
    }

    // Landing before jumping, so a jump on the landing tick survives
    for event in ground_reader.read() {
        if let Ok(mut flags) = query.get_mut(event.entity) {
            flags.grounded = event.grounded;
            if event.grounded {
                flags.airborne_jump = None;
            }
        }
    }

    for event in jump_reader.read() {
        if let Ok(mut flags) = query.get_mut(event.entity) {
            flags.airborne_jump = Some(event.kind);
        }
    }
}

/// Tint the visual from its animation flags. Stands in for clip playback.
pub(crate) fn tint_player_visual(
    players: Query<(&AnimationFlags, &Children), With<Player>>,
    mut visuals: Query<&mut Sprite, With<PlayerVisual>>,
) {
    for (flags, children) in &players {
        let color = if flags.dashing {
            Color::srgb(0.4, 0.9, 1.0)
        } else if flags.airborne_jump == Some(JumpKind::Wall) && !flags.grounded {
            Color::srgb(1.0, 0.8, 0.6)
        } else if flags.wall_sliding {
            Color::srgb(0.9, 0.7, 0.4)
        } else if flags.falling {
            Color::srgb(0.8, 0.8, 1.0)
        } else if flags.running {
            Color::srgb(0.95, 0.95, 0.8)
        } else {
            Color::srgb(0.9, 0.9, 0.9)
        };

        for child in children.iter() {
            if let Ok(mut sprite) = visuals.get_mut(child) {
                sprite.color = color;
            }
        }
    }
}
