//! Combat domain: attack direction rules and hit-box geometry.

use bevy::prelude::*;

use crate::combat::resources::{AttackArea, AttackTuning};
use crate::movement::Facing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttackDirection {
    #[default]
    Side,
    Up,
    Down,
}

impl AttackDirection {
    /// Pick the attack direction from the vertical axis. Down attacks only
    /// happen in the air; pressing down on the ground swings sideways.
    pub fn from_input(y: f32, grounded: bool) -> Self {
        if y > 0.0 {
            AttackDirection::Up
        } else if y < 0.0 && !grounded {
            AttackDirection::Down
        } else {
            AttackDirection::Side
        }
    }

    /// Rotation of the slash effect, in radians.
    pub fn slash_angle(self) -> f32 {
        match self {
            AttackDirection::Side => 0.0,
            AttackDirection::Up => 80f32.to_radians(),
            AttackDirection::Down => (-90f32).to_radians(),
        }
    }
}

impl AttackTuning {
    pub fn area(&self, direction: AttackDirection) -> &AttackArea {
        match direction {
            AttackDirection::Side => &self.side,
            AttackDirection::Up => &self.up,
            AttackDirection::Down => &self.down,
        }
    }

    /// Center of the hit box relative to the world. Horizontal offsets are
    /// mirrored when facing left.
    pub fn hitbox_center(
        &self,
        direction: AttackDirection,
        facing: Facing,
        origin: Vec2,
    ) -> Vec2 {
        let area = self.area(direction);
        origin + Vec2::new(area.offset_x * facing.sign(), area.offset_y)
    }
}
