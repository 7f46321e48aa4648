//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{DashTuning, MovementInput, MovementTuning};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, walls)
    Ground,
    /// Player character
    Player,
    /// Anything the player's melee can hit
    Attackable,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Facing after reading a horizontal axis; zero keeps the current facing.
    pub fn from_axis(self, x: f32) -> Facing {
        if x < 0.0 {
            Facing::Left
        } else if x > 0.0 {
            Facing::Right
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Grounded, coyote-time or buffered jump
    Ground,
    /// Mid-air jump, limited by `max_air_jumps`
    Air,
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub grounded: bool,
    pub facing: Facing,
    /// Set by a jump, cleared on landing or an early release
    pub jumping: bool,
    /// Frames left during which a jump press is still honoured
    pub jump_buffer_counter: u32,
    /// Seconds left during which a jump off a ledge is still allowed
    pub coyote_timer: f32,
    pub air_jumps_used: u8,
    pub dashed_since_grounded: bool,
}

impl MovementState {
    /// Per-frame bookkeeping for coyote time, the jump buffer and the
    /// counters that refill on landing.
    ///
    /// `vy` is the current vertical velocity. Ground contact while still
    /// rising from a jump is not a landing.
    pub fn update_jump_variables(
        &mut self,
        tuning: &MovementTuning,
        jump_just_pressed: bool,
        vy: f32,
        dt: f32,
    ) {
        if self.has_landed(vy) {
            self.jumping = false;
            self.coyote_timer = tuning.coyote_time;
            self.air_jumps_used = 0;
            self.dashed_since_grounded = false;
        } else {
            self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        }

        if jump_just_pressed {
            self.jump_buffer_counter = tuning.jump_buffer_frames;
        } else {
            self.jump_buffer_counter = self.jump_buffer_counter.saturating_sub(1);
        }
    }

    pub fn has_landed(&self, vy: f32) -> bool {
        self.grounded && !(self.jumping && vy > 0.0)
    }

    pub fn can_ground_jump(&self) -> bool {
        !self.jumping && self.jump_buffer_counter > 0 && self.coyote_timer > 0.0
    }

    pub fn can_air_jump(&self, tuning: &MovementTuning) -> bool {
        !self.grounded && self.air_jumps_used < tuning.max_air_jumps
    }

    /// Apply jump input to the vertical velocity `vy`.
    ///
    /// Releasing the button while rising cancels the rest of the jump. At
    /// most one jump fires per call, ground jumps taking precedence.
    pub fn apply_jump(
        &mut self,
        tuning: &MovementTuning,
        input: &MovementInput,
        vy: &mut f32,
    ) -> Option<JumpKind> {
        if input.jump_just_released && *vy > tuning.jump_cut_velocity {
            *vy = 0.0;
            self.jumping = false;
        }

        if self.can_ground_jump() {
            *vy = tuning.jump_force;
            self.jumping = true;
            self.jump_buffer_counter = 0;
            self.coyote_timer = 0.0;
            Some(JumpKind::Ground)
        } else if input.jump_just_pressed && self.can_air_jump(tuning) {
            *vy = tuning.jump_force;
            self.jumping = true;
            self.jump_buffer_counter = 0;
            self.air_jumps_used += 1;
            Some(JumpKind::Air)
        } else {
            None
        }
    }
}

/// Dash phases. A dash overrides velocity for `dash_time`, then the
/// cooldown runs for `dash_cooldown` before the next dash is allowed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub enum DashState {
    #[default]
    Ready,
    Dashing {
        remaining: f32,
    },
    Cooldown {
        remaining: f32,
    },
}

impl DashState {
    pub fn is_dashing(&self) -> bool {
        matches!(self, DashState::Dashing { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DashState::Ready)
    }

    pub fn can_start(&self, state: &MovementState, tuning: &DashTuning) -> bool {
        if !self.is_ready() || state.dashed_since_grounded {
            return false;
        }
        state.grounded || tuning.allow_air_dash
    }

    pub fn start(&mut self, tuning: &DashTuning) {
        *self = DashState::Dashing {
            remaining: tuning.dash_time,
        };
    }

    /// Advance the phase timers. Returns true on the tick the dash ends.
    pub fn tick(&mut self, dt: f32, tuning: &DashTuning) -> bool {
        match *self {
            DashState::Ready => false,
            DashState::Dashing { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    *self = DashState::Cooldown {
                        remaining: tuning.dash_cooldown,
                    };
                    true
                } else {
                    *self = DashState::Dashing { remaining };
                    false
                }
            }
            DashState::Cooldown { remaining } => {
                let remaining = remaining - dt;
                *self = if remaining <= 0.0 {
                    DashState::Ready
                } else {
                    DashState::Cooldown { remaining }
                };
                false
            }
        }
    }
}
