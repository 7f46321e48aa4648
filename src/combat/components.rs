//! Combat domain: components for attackers and damageable enemies.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Enemy;

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Knockback state. While active, further hits still deal damage but do
/// not push the entity again.
#[derive(Component, Debug, Clone)]
pub struct Recoil {
    /// Seconds a recoil lasts
    pub length: f32,
    /// Multiplier applied to the attacker's recoil strength
    pub factor: f32,
    pub timer: f32,
    pub active: bool,
}

impl Recoil {
    pub fn new(length: f32, factor: f32) -> Self {
        Self {
            length,
            factor,
            timer: 0.0,
            active: false,
        }
    }

    /// Start recoiling away from the attacker. `hit_direction` points from
    /// this entity toward the attacker. Returns the velocity change, or
    /// `None` when already recoiling.
    pub fn start(&mut self, hit_direction: Vec2, strength: f32) -> Option<Vec2> {
        if self.active {
            return None;
        }
        self.active = true;
        self.timer = 0.0;
        Some(-hit_direction * self.factor * strength)
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.timer += dt;
        if self.timer >= self.length {
            self.active = false;
            self.timer = 0.0;
        }
    }
}

/// Player melee timing
#[derive(Component, Debug)]
pub struct AttackState {
    pub time_since_attack: f32,
}

impl Default for AttackState {
    /// Ready to swing immediately
    fn default() -> Self {
        Self {
            time_since_attack: f32::INFINITY,
        }
    }
}

impl AttackState {
    pub fn tick(&mut self, dt: f32) {
        self.time_since_attack += dt;
    }

    pub fn is_ready(&self, time_between_attacks: f32) -> bool {
        self.time_since_attack >= time_between_attacks
    }
}
