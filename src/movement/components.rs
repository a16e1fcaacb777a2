//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::JumpKind;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Child entity carrying the player's sprite. Facing mirrors this transform,
/// never the physics body.
#[derive(Component, Debug)]
pub struct PlayerVisual;

/// Latest animation levels and triggers seen by the visual, for the
/// animation collaborator to consume.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct AnimationFlags {
    pub running: bool,
    pub falling: bool,
    pub wall_sliding: bool,
    pub dashing: bool,
    pub grounded: bool,
    /// Kind of the jump in progress, cleared on landing.
    pub airborne_jump: Option<JumpKind>,
    /// One-shot triggers fired since the last frame, by name.
    pub triggers: Vec<&'static str>,
}
