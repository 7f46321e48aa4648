//! Combat domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Size of an attack hit box and its offset from the attacker's center.
/// `offset_x` is given for a right-facing attacker.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AttackArea {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl AttackArea {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AttackTuning {
    pub damage: f32,
    pub recoil_strength: f32,
    pub time_between_attacks: f32,
    pub side: AttackArea,
    pub up: AttackArea,
    pub down: AttackArea,
    /// Seconds a slash effect stays on screen
    pub slash_lifetime: f32,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            damage: 10.0,
            recoil_strength: 1.0,
            time_between_attacks: 0.3,
            side: AttackArea {
                width: 48.0,
                height: 36.0,
                offset_x: 36.0,
                offset_y: 0.0,
            },
            up: AttackArea {
                width: 40.0,
                height: 48.0,
                offset_x: 0.0,
                offset_y: 44.0,
            },
            down: AttackArea {
                width: 40.0,
                height: 48.0,
                offset_x: 0.0,
                offset_y: -44.0,
            },
            slash_lifetime: 0.12,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub health: f32,
    pub size: f32,
    pub recoil_length: f32,
    pub recoil_factor: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            health: 30.0,
            size: 32.0,
            recoil_length: 0.2,
            recoil_factor: 400.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub attack: bool,
}
