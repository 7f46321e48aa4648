//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub jump_force: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    /// Frames a jump press stays buffered before landing
    pub jump_buffer_frames: u32,
    pub coyote_time: f32,
    /// Maximum air jumps (0 = no double jump, 1 = double jump, etc.)
    pub max_air_jumps: u8,
    /// Releasing jump only cuts the jump while rising faster than this
    pub jump_cut_velocity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 320.0,
            jump_force: 680.0,
            gravity: 1800.0,
            max_fall_speed: 1200.0,
            jump_buffer_frames: 8,
            coyote_time: 0.1,
            max_air_jumps: 1,
            jump_cut_velocity: 0.0,
        }
    }
}

impl MovementTuning {
    /// Calculate the maximum height reachable from a single ground jump.
    /// Uses physics formula: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        self.jump_force * self.jump_force / (2.0 * self.gravity)
    }

    /// Height reachable with a ground jump plus every air jump at its apex.
    pub fn max_reachable_height(&self) -> f32 {
        self.single_jump_height() * (1.0 + self.max_air_jumps as f32)
    }
}

/// Ground probe geometry: three rays of length `check_y` cast down from the
/// feet at horizontal offsets `-check_x`, `0` and `+check_x`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroundCheck {
    pub check_x: f32,
    pub check_y: f32,
}

impl Default for GroundCheck {
    fn default() -> Self {
        Self {
            check_x: 10.0,
            check_y: 4.0,
        }
    }
}

impl GroundCheck {
    pub fn probe_origins(&self, feet: Vec2) -> [Vec2; 3] {
        [
            feet - Vec2::new(self.check_x, 0.0),
            feet,
            feet + Vec2::new(self.check_x, 0.0),
        ]
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashTuning {
    pub dash_speed: f32,
    pub dash_time: f32,
    pub dash_cooldown: f32,
    /// One dash is allowed per airtime when set
    pub allow_air_dash: bool,
}

impl Default for DashTuning {
    fn default() -> Self {
        Self {
            dash_speed: 900.0,
            dash_time: 0.16,
            dash_cooldown: 0.35,
            allow_air_dash: true,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Raw axes, each component in {-1, 0, 1}
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
}
