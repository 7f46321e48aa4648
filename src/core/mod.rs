//! Core domain: game states, pausing, camera and player ownership.

mod resources;
mod sets;
mod state;
mod systems;
#[cfg(test)]
pub(crate) mod testing;

pub use resources::{ActivePlayer, GameplayPaused, gameplay_active};
pub use sets::ControllerSet;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{
    enforce_single_player, finish_boot, follow_player, setup_camera, sync_physics_pause,
    toggle_pause,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameplayPaused>()
            .init_resource::<ActivePlayer>()
            .configure_sets(
                Update,
                (
                    ControllerSet::Input,
                    ControllerSet::Sense,
                    ControllerSet::Act,
                    ControllerSet::React,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_active),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)))
            .add_systems(PreUpdate, enforce_single_player)
            .add_systems(
                Update,
                (toggle_pause, follow_player).run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                PostUpdate,
                sync_physics_pause.run_if(resource_changed::<GameplayPaused>),
            );
    }
}
