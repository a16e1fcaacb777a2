//! Movement domain: player spawn and the sandbox test room.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AnimationFlags, GameLayer, Ground, LocomotionController, MovementConfig, Player,
    PlayerVisual, Wall,
};

/// Player body size in world units.
pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.6);

pub(crate) fn spawn_player(mut commands: Commands, config: Res<MovementConfig>) {
    info!(
        "Spawning player: walk_speed={}, jump_force={}, dash_speed={}",
        config.walk_speed, config.jump_force, config.dash_speed
    );

    commands
        .spawn((
            // Identity & Movement
            (
                Player,
                LocomotionController::new(config.clone()),
                AnimationFlags::default(),
            ),
            Transform::from_xyz(0.0, -2.0, 0.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(1.0),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
            ),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    PlayerVisual,
                    Sprite {
                        color: Color::srgb(0.9, 0.9, 0.9),
                        custom_size: Some(PLAYER_SIZE),
                        ..default()
                    },
                    Transform::default(),
                ))
                .with_children(|visual| {
                    // Eye, so the mirror is visible
                    visual.spawn((
                        Sprite {
                            color: Color::srgb(0.1, 0.1, 0.15),
                            custom_size: Some(Vec2::new(0.2, 0.2)),
                            ..default()
                        },
                        Transform::from_xyz(0.2, 0.45, 0.1),
                    ));
                });
        });
}

fn spawn_block(
    commands: &mut Commands,
    kind: SurfaceBlock,
    color: Color,
    center: Vec2,
    size: Vec2,
) {
    let sprite = Sprite {
        color,
        custom_size: Some(size),
        ..default()
    };
    let transform = Transform::from_xyz(center.x, center.y, 0.0);
    let body = (RigidBody::Static, Collider::rectangle(size.x, size.y));

    match kind {
        SurfaceBlock::Ground => {
            commands.spawn((
                Ground,
                sprite,
                transform,
                body,
                CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
            ));
        }
        SurfaceBlock::Wall => {
            commands.spawn((
                Wall,
                sprite,
                transform,
                body,
                CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]),
            ));
        }
    }
}

#[derive(Clone, Copy)]
enum SurfaceBlock {
    Ground,
    Wall,
}

pub(crate) fn spawn_sandbox_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor
    spawn_block(
        &mut commands,
        SurfaceBlock::Ground,
        ground_color,
        Vec2::new(0.0, -6.0),
        Vec2::new(26.0, 1.0),
    );

    // Side walls
    for x in [-13.0, 13.0] {
        spawn_block(
            &mut commands,
            SurfaceBlock::Wall,
            wall_color,
            Vec2::new(x, 1.5),
            Vec2::new(1.0, 16.0),
        );
    }

    // Platforms
    for (center, width) in [
        (Vec2::new(-7.5, -2.0), 4.5),
        (Vec2::new(7.5, 1.0), 4.5),
        (Vec2::new(0.0, 4.5), 3.5),
    ] {
        spawn_block(
            &mut commands,
            SurfaceBlock::Ground,
            platform_color,
            center,
            Vec2::new(width, 0.6),
        );
    }

    // Pillar for wall jump practice, capped so its top counts as ground
    spawn_block(
        &mut commands,
        SurfaceBlock::Wall,
        wall_color,
        Vec2::new(-3.0, -2.5),
        Vec2::new(1.0, 6.0),
    );
    spawn_block(
        &mut commands,
        SurfaceBlock::Ground,
        platform_color,
        Vec2::new(-3.0, 0.6),
        Vec2::new(1.0, 0.2),
    );
}
