//! Movement domain: input, ground detection, walking, jumping and dashing.

mod components;
mod events;
mod resources;
pub(crate) mod systems;

pub use components::{
    DashState, Facing, GameLayer, Ground, JumpKind, MovementState, Player,
};
pub use events::DashStarted;
pub use resources::{DashTuning, GroundCheck, MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::movement::systems::{
    apply_gravity, apply_horizontal_movement, apply_jump, detect_ground, read_input,
    update_dash, update_facing, update_jump_variables,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<GroundCheck>()
            .init_resource::<DashTuning>()
            .init_resource::<MovementInput>()
            .add_message::<DashStarted>()
            .add_systems(Update, read_input.in_set(ControllerSet::Input))
            .add_systems(
                Update,
                (detect_ground, update_jump_variables, update_dash)
                    .chain()
                    .in_set(ControllerSet::Sense),
            )
            .add_systems(
                Update,
                (
                    update_facing,
                    apply_horizontal_movement,
                    apply_jump,
                    apply_gravity,
                )
                    .chain()
                    .in_set(ControllerSet::Act),
            );
    }
}
