//! Movement domain: contact probe backed by the physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::bootstrap::PLAYER_SIZE;
use crate::movement::{ContactProbe, GameLayer, WallSide};

/// Full size of a box collider, as the physics world sees it. Falls back to
/// the player size for other shapes.
pub(crate) fn collider_bounds(collider: &Collider) -> Vec2 {
    match collider.shape_scaled().as_cuboid() {
        Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y) * 2.0,
        None => PLAYER_SIZE,
    }
}

/// Box casts against the `Ground` and `Wall` layers, ignoring the body itself.
pub(crate) struct SpatialProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    owner: Entity,
    ground_distance: f32,
    wall_distance: f32,
}

impl<'a, 'w, 's> SpatialProbe<'a, 'w, 's> {
    pub(crate) fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        owner: Entity,
        ground_distance: f32,
        wall_distance: f32,
    ) -> Self {
        Self {
            spatial_query,
            owner,
            ground_distance,
            wall_distance,
        }
    }

    fn cast(
        &self,
        position: Vec2,
        bounds: Vec2,
        direction: Dir2,
        distance: f32,
        layer: GameLayer,
    ) -> bool {
        if !bounds.is_finite() || bounds.min_element() <= 0.0 {
            return false;
        }
        let shape = Collider::rectangle(bounds.x, bounds.y);
        let filter = SpatialQueryFilter::from_mask(layer).with_excluded_entities([self.owner]);
        let config = ShapeCastConfig::from_max_distance(distance);

        self.spatial_query
            .cast_shape(&shape, position, 0.0, direction, &config, &filter)
            .is_some()
    }
}

impl ContactProbe for SpatialProbe<'_, '_, '_> {
    fn probe_ground(&self, position: Vec2, bounds: Vec2) -> bool {
        self.cast(
            position,
            bounds,
            Dir2::NEG_Y,
            self.ground_distance,
            GameLayer::Ground,
        )
    }

    fn probe_wall(&self, position: Vec2, bounds: Vec2, side: WallSide) -> bool {
        self.cast(
            position,
            bounds,
            side.direction(),
            self.wall_distance,
            GameLayer::Wall,
        )
    }
}
