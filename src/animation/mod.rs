//! Animation module: animator parameters and the player's animation state.
//!
//! This module handles:
//! - Walking/jumping flags and dash/attack triggers set by gameplay
//! - Resolving those parameters into an animation state with frame timing
//! - Tinting the placeholder sprite per state

pub mod controller;
mod systems;

use bevy::prelude::*;

pub use controller::*;

use crate::animation::systems::{drive_animation, sync_animator_params, tint_by_animation};
use crate::core::ControllerSet;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>().add_systems(
            Update,
            (sync_animator_params, drive_animation, tint_by_animation)
                .chain()
                .in_set(ControllerSet::React),
        );
    }
}
