//! Effects domain: short-lived slash and dash sprites.

#[cfg(test)]
mod tests;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{AttackPerformed, AttackTuning};
use crate::core::ControllerSet;
use crate::movement::{DashStarted, Facing};

const DASH_EFFECT_LIFETIME: f32 = 0.25;
const DASH_EFFECT_SIZE: Vec2 = Vec2::new(28.0, 10.0);
/// Distance behind the player's center where the dash puff appears
const DASH_EFFECT_TRAIL: f32 = 18.0;
/// Puff sits at the player's feet
const DASH_EFFECT_DROP: f32 = 20.0;

/// Despawns the entity once the remaining seconds run out
#[derive(Component, Debug)]
pub struct EffectLifetime(pub f32);

#[derive(Component, Debug)]
pub struct SlashEffect;

#[derive(Component, Debug)]
pub struct DashEffect;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (spawn_slash_effects, spawn_dash_effects, cleanup_effects)
                .in_set(ControllerSet::React),
        );
    }
}

pub(crate) fn spawn_slash_effects(
    mut commands: Commands,
    tuning: Res<AttackTuning>,
    mut attacks: MessageReader<AttackPerformed>,
) {
    for attack in attacks.read() {
        // Connecting swings flash brighter
        let color = if attack.hits > 0 {
            Color::srgba(1.0, 0.85, 0.4, 0.9)
        } else {
            Color::srgba(1.0, 1.0, 0.9, 0.6)
        };

        commands.spawn((
            SlashEffect,
            EffectLifetime(tuning.slash_lifetime),
            Sprite {
                color,
                custom_size: Some(attack.size),
                flip_x: attack.facing == Facing::Left,
                ..default()
            },
            Transform::from_xyz(attack.center.x, attack.center.y, 1.0)
                .with_rotation(Quat::from_rotation_z(attack.direction.slash_angle())),
        ));
    }
}

/// Dust puff behind the player, only for dashes that start on the ground
pub(crate) fn spawn_dash_effects(mut commands: Commands, mut dashes: MessageReader<DashStarted>) {
    for dash in dashes.read() {
        if !dash.grounded {
            continue;
        }

        let position =
            dash.position + Vec2::new(-dash.facing.sign() * DASH_EFFECT_TRAIL, -DASH_EFFECT_DROP);
        commands.spawn((
            DashEffect,
            EffectLifetime(DASH_EFFECT_LIFETIME),
            Sprite {
                color: Color::srgba(0.8, 0.8, 0.8, 0.5),
                custom_size: Some(DASH_EFFECT_SIZE),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.5),
        ));
    }
}

pub(crate) fn cleanup_effects(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut EffectLifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
