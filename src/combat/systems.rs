//! Combat domain: combat systems for input, attacks, damage and cleanup.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::attacks::AttackDirection;
use crate::combat::components::{AttackState, Enemy, Health, Recoil};
use crate::combat::events::{AttackPerformed, DamageEvent, DeathEvent};
use crate::combat::resources::{AttackTuning, CombatInput};
use crate::movement::{DashState, GameLayer, MovementInput, MovementState, Player};

pub(crate) fn read_combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<CombatInput>,
) {
    input.attack = keyboard.just_pressed(KeyCode::KeyJ) || keyboard.just_pressed(KeyCode::KeyZ);
}

/// Swing at the current direction and damage every enemy inside the hit box
pub(crate) fn process_player_attack(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    input: Res<CombatInput>,
    move_input: Res<MovementInput>,
    tuning: Res<AttackTuning>,
    mut attack_events: MessageWriter<AttackPerformed>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut players: Query<
        (
            Entity,
            &Transform,
            &MovementState,
            &DashState,
            &mut AttackState,
        ),
        With<Player>,
    >,
    enemies: Query<&Transform, With<Enemy>>,
) {
    let dt = time.delta_secs();
    let attackable_filter = SpatialQueryFilter::from_mask(GameLayer::Attackable);

    for (entity, transform, movement, dash, mut attack) in &mut players {
        attack.tick(dt);

        // No attacking mid-dash
        if dash.is_dashing() {
            continue;
        }

        if !input.attack || !attack.is_ready(tuning.time_between_attacks) {
            continue;
        }
        attack.time_since_attack = 0.0;

        let direction = AttackDirection::from_input(move_input.axis.y, movement.grounded);
        let origin = transform.translation.truncate();
        let center = tuning.hitbox_center(direction, movement.facing, origin);
        let size = tuning.area(direction).size();

        let overlapping = spatial_query.shape_intersections(
            &Collider::rectangle(size.x, size.y),
            center,
            0.0,
            &attackable_filter,
        );

        let mut hits = 0;
        for target in overlapping {
            // Only enemies take damage; other attackables just get swung through
            let Ok(enemy_transform) = enemies.get(target) else {
                continue;
            };

            let hit_direction = (origin - enemy_transform.translation.truncate()).normalize_or_zero();
            damage_events.write(DamageEvent {
                source: entity,
                target,
                amount: tuning.damage,
                hit_direction,
                recoil_strength: tuning.recoil_strength,
            });
            hits += 1;
        }

        attack_events.write(AttackPerformed {
            entity,
            direction,
            facing: movement.facing,
            center,
            size,
            hits,
        });

        debug!(
            "Player attack: direction={:?}, facing={:?}, hits={}",
            direction, movement.facing, hits
        );
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut query: Query<(&mut Health, &mut Recoil, Option<&mut LinearVelocity>), With<Enemy>>,
) {
    for event in damage_events.read() {
        let Ok((mut health, mut recoil, velocity)) = query.get_mut(event.target) else {
            continue;
        };

        // Already dying this frame
        if health.is_dead() {
            continue;
        }

        let dealt = health.take_damage(event.amount);

        if let Some(knockback) = recoil.start(event.hit_direction, event.recoil_strength) {
            if let Some(mut velocity) = velocity {
                velocity.0 += knockback;
            }
        }

        debug!(
            "Enemy {:?} took {} damage from {:?}, {}/{} left",
            event.target, dealt, event.source, health.current, health.max
        );

        if health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

pub(crate) fn update_recoil(time: Res<Time>, mut query: Query<&mut Recoil>) {
    let dt = time.delta_secs();
    for mut recoil in &mut query {
        recoil.update(dt);
    }
}

pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    enemy_query: Query<Entity, With<Enemy>>,
) {
    for event in death_events.read() {
        if let Ok(entity) = enemy_query.get(event.entity) {
            info!("Enemy {:?} defeated", entity);
            commands.entity(entity).despawn();
        }
    }
}
