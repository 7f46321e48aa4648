//! Combat domain: enemy spawning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{Enemy, Health, Recoil};
use crate::combat::resources::EnemyTuning;
use crate::movement::GameLayer;

/// Bundle for spawning a damageable enemy
#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub health: Health,
    pub recoil: Recoil,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub damping: LinearDamping,
    pub locked_axes: LockedAxes,
}

impl EnemyBundle {
    pub fn new(position: Vec2, tuning: &EnemyTuning) -> Self {
        let size = Vec2::splat(tuning.size);
        Self {
            enemy: Enemy,
            health: Health::new(tuning.health),
            recoil: Recoil::new(tuning.recoil_length, tuning.recoil_factor),
            sprite: Sprite {
                color: Color::srgb(0.8, 0.3, 0.3),
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(size.x, size.y),
            collision_layers: CollisionLayers::new(
                GameLayer::Attackable,
                [GameLayer::Ground, GameLayer::Player, GameLayer::Attackable],
            ),
            velocity: LinearVelocity::default(),
            // Bleeds off recoil so enemies slide to a stop
            damping: LinearDamping(3.0),
            locked_axes: LockedAxes::ROTATION_LOCKED,
        }
    }
}
