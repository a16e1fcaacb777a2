//! Movement domain: outbound messages from the locomotion controller.
//!
//! Each message names the character it came from, so several characters never
//! share lifecycle signals.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::{AnimationSignal, JumpKind, WallSide};

/// Animation trigger or level change for the animation collaborator.
#[derive(Debug)]
pub struct AnimationSignalEvent {
    pub entity: Entity,
    pub signal: AnimationSignal,
}

impl Message for AnimationSignalEvent {}

#[derive(Debug)]
pub enum DashLifecycleEvent {
    Started { entity: Entity, direction: Vec2 },
    Stopped { entity: Entity, cancelled: bool },
}

impl Message for DashLifecycleEvent {}

/// Slide enter (`side` set) or exit (`side` empty), for scene attachment.
#[derive(Debug)]
pub struct WallSlideChangedEvent {
    pub entity: Entity,
    pub side: Option<WallSide>,
}

impl Message for WallSlideChangedEvent {}

/// Landing (`grounded` set) or leaving the ground.
#[derive(Debug)]
pub struct GroundContactEvent {
    pub entity: Entity,
    pub grounded: bool,
}

impl Message for GroundContactEvent {}

#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
    pub kind: JumpKind,
}

impl Message for JumpedEvent {}
