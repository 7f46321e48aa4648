//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundCheck, MovementState, Player};

/// Fallback half height when the player collider is not a box.
const DEFAULT_HALF_HEIGHT: f32 = 24.0;

/// Point at the bottom edge of the player's collider.
pub(crate) fn feet_position(transform: &Transform, collider: &Collider) -> Vec2 {
    let half_height = match collider.shape_scaled().as_cuboid() {
        Some(c) => c.half_extents.y,
        None => DEFAULT_HALF_HEIGHT,
    };
    transform.translation.truncate() - Vec2::new(0.0, half_height)
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    ground_check: Res<GroundCheck>,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not enemies, effects, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let was_grounded = state.grounded;
        let feet = feet_position(transform, collider);

        state.grounded = ground_check.probe_origins(feet).iter().any(|origin| {
            spatial_query
                .cast_ray(
                    *origin,
                    Dir2::NEG_Y,
                    ground_check.check_y,
                    true,
                    &ground_filter,
                )
                .is_some()
        });

        if state.grounded && !was_grounded {
            debug!("Landed at {:?}", feet);
        } else if !state.grounded && was_grounded {
            debug!("Left ground at {:?}", feet);
        }
    }
}
