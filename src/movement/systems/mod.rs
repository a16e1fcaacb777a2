//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::{read_input, sample_input};
pub(crate) use movement::{
    apply_facing, step_locomotion, tint_player_visual, track_animation_flags,
};
