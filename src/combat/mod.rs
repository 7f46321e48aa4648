//! Combat domain: directional melee attacks, enemies and damage.

mod attacks;
mod components;
mod events;
mod resources;
mod spawn;
mod systems;
#[cfg(test)]
mod tests;

pub use attacks::AttackDirection;
pub use components::{AttackState, Enemy, Health, Recoil};
pub use events::{AttackPerformed, DamageEvent, DeathEvent};
pub use resources::{AttackArea, AttackTuning, CombatInput, EnemyTuning};
pub use spawn::EnemyBundle;

use bevy::prelude::*;

use crate::combat::systems::{
    apply_damage, process_deaths, process_player_attack, read_combat_input, update_recoil,
};
use crate::core::ControllerSet;
use crate::movement::systems::apply_jump;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackTuning>()
            .init_resource::<EnemyTuning>()
            .init_resource::<CombatInput>()
            .add_message::<AttackPerformed>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_systems(Update, read_combat_input.in_set(ControllerSet::Input))
            .add_systems(
                Update,
                process_player_attack
                    .after(apply_jump)
                    .in_set(ControllerSet::Act),
            )
            .add_systems(
                Update,
                (update_recoil, apply_damage, process_deaths)
                    .chain()
                    .in_set(ControllerSet::React),
            );
    }
}
