//! Movement domain: locomotion plugin wiring and public exports.

mod bootstrap;
mod components;
mod controller;
mod events;
mod input;
mod math;
mod probe;
mod resources;
mod systems;
mod timers;


pub use components::{AnimationFlags, GameLayer, Ground, Player, PlayerVisual, Wall};
pub use controller::{
    AnimationSignal, BodyState, JumpKind, LocomotionController, LocomotionEvent,
    LocomotionFlags, MotionState, TickContext, TickOutput,
};
pub use events::{
    AnimationSignalEvent, DashLifecycleEvent, GroundContactEvent, JumpedEvent, WallSlideChangedEvent,
};
pub use input::InputSampler;
pub use probe::{AabbProbe, ContactProbe, ContactState, SurfaceKind, WallSide};
pub use resources::{AxisSmoothing, InputFrame, MovementConfig, RawInput};
pub use timers::TimerSet;

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::bootstrap::{spawn_player, spawn_sandbox_room};
use crate::movement::systems::{
    apply_facing, read_input, sample_input, step_locomotion, tint_player_visual,
    track_animation_flags,
};

/// Physics and locomotion step rate.
pub const FIXED_TICK_HZ: f64 = 50.0;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ))
            .init_resource::<MovementConfig>()
            .init_resource::<AxisSmoothing>()
            .init_resource::<InputSampler>()
            .init_resource::<RawInput>()
            .init_resource::<InputFrame>()
            .add_message::<AnimationSignalEvent>()
            .add_message::<DashLifecycleEvent>()
            .add_message::<WallSlideChangedEvent>()
            .add_message::<JumpedEvent>()
            .add_message::<GroundContactEvent>()
            .add_systems(Startup, (spawn_sandbox_room, spawn_player))
            .add_systems(Update, read_input)
            .add_systems(
                Update,
                (track_animation_flags, tint_player_visual).chain(),
            )
            .add_systems(
                FixedUpdate,
                (sample_input, step_locomotion, apply_facing)
                    .chain()
                    .run_if(gameplay_active),
            );
    }
}
