//! Movement domain: contact probing against ground and wall surfaces.
//!
//! A probe answers three questions per tick (ground below, wall left, wall
//! right) by sweeping the character's bounding box a short fixed distance.
//! The answers are collected once into a [`ContactState`] so every later step
//! in the tick sees the same snapshot.

use bevy::math::bounding::{Aabb2d, IntersectsVolume};
use bevy::prelude::*;

/// Contact snapshot for one tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContactState {
    pub grounded: bool,
    pub left_wall: bool,
    pub right_wall: bool,
}

impl ContactState {
    pub fn touching_wall(&self) -> bool {
        self.left_wall || self.right_wall
    }

    /// The wall the character is against, preferring the left one when both touch.
    pub fn wall_side(&self) -> Option<WallSide> {
        if self.left_wall {
            Some(WallSide::Left)
        } else if self.right_wall {
            Some(WallSide::Right)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

impl WallSide {
    pub fn direction(self) -> Dir2 {
        match self {
            WallSide::Left => Dir2::NEG_X,
            WallSide::Right => Dir2::X,
        }
    }
}

/// Read-only geometric queries against the world.
///
/// `position` is the center of the character's bounds and `bounds` their full
/// size. Implementations must treat any failure (missing collider, query
/// outside the world) as "no contact".
pub trait ContactProbe {
    fn probe_ground(&self, position: Vec2, bounds: Vec2) -> bool;

    fn probe_wall(&self, position: Vec2, bounds: Vec2, side: WallSide) -> bool;

    fn contacts(&self, position: Vec2, bounds: Vec2) -> ContactState {
        ContactState {
            grounded: self.probe_ground(position, bounds),
            left_wall: self.probe_wall(position, bounds, WallSide::Left),
            right_wall: self.probe_wall(position, bounds, WallSide::Right),
        }
    }
}

/// Which probe a static box answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Ground,
    Wall,
}

/// Probe over a fixed set of axis-aligned boxes. Used for headless
/// simulation, where there is no physics world to ask.
#[derive(Debug, Clone, Default)]
pub struct AabbProbe {
    surfaces: Vec<(Aabb2d, SurfaceKind)>,
    pub ground_distance: f32,
    pub wall_distance: f32,
}

impl AabbProbe {
    pub fn new(ground_distance: f32, wall_distance: f32) -> Self {
        Self {
            surfaces: Vec::new(),
            ground_distance,
            wall_distance,
        }
    }

    pub fn with_surface(mut self, center: Vec2, size: Vec2, kind: SurfaceKind) -> Self {
        self.surfaces.push((Aabb2d::new(center, size * 0.5), kind));
        self
    }

    /// Box swept from `start` by `offset`. The sweep is axis-aligned so the
    /// covered region is exactly the union of both end boxes.
    fn swept(start: Vec2, bounds: Vec2, offset: Vec2) -> Aabb2d {
        let from = Aabb2d::new(start, bounds * 0.5);
        let to = Aabb2d::new(start + offset, bounds * 0.5);
        Aabb2d {
            min: from.min.min(to.min),
            max: from.max.max(to.max),
        }
    }

    fn hits(&self, sweep: &Aabb2d, kind: SurfaceKind) -> bool {
        self.surfaces
            .iter()
            .any(|(aabb, surface)| *surface == kind && sweep.intersects(aabb))
    }
}

impl ContactProbe for AabbProbe {
    fn probe_ground(&self, position: Vec2, bounds: Vec2) -> bool {
        let sweep = Self::swept(position, bounds, Vec2::NEG_Y * self.ground_distance);
        self.hits(&sweep, SurfaceKind::Ground)
    }

    fn probe_wall(&self, position: Vec2, bounds: Vec2, side: WallSide) -> bool {
        let sweep = Self::swept(position, bounds, *side.direction() * self.wall_distance);
        self.hits(&sweep, SurfaceKind::Wall)
    }
}
