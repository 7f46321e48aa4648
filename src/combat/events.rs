//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::attacks::AttackDirection;
use crate::movement::Facing;

/// Event emitted when the player swings, whether or not anything was hit
#[derive(Debug, Clone)]
pub struct AttackPerformed {
    pub entity: Entity,
    pub direction: AttackDirection,
    pub facing: Facing,
    pub center: Vec2,
    pub size: Vec2,
    pub hits: usize,
}

impl Message for AttackPerformed {}

#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
    /// Unit vector from the target toward the attacker
    pub hit_direction: Vec2,
    pub recoil_strength: f32,
}

impl Message for DamageEvent {}

#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}
