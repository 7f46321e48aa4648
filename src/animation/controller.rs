//! Animation state machine and playback.
//!
//! Animator parameters are written by gameplay (walking, jumping and the
//! dash/attack triggers) and resolved into a single `AnimationState` with
//! frame timing.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::AttackDirection;

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Jump,
    Fall,
    Dash,
    Attack(AttackDirection),
}

impl AnimationState {
    fn frame_count(self) -> u32 {
        match self {
            AnimationState::Idle => 4,
            AnimationState::Walk => 6,
            AnimationState::Jump => 2,
            AnimationState::Fall => 2,
            AnimationState::Dash => 3,
            AnimationState::Attack(_) => 3,
        }
    }

    fn frame_duration(self) -> f32 {
        match self {
            AnimationState::Attack(_) => 0.06, // Faster attacks
            AnimationState::Dash => 0.05,
            _ => 0.12,
        }
    }

    fn looping(self) -> bool {
        matches!(
            self,
            AnimationState::Idle | AnimationState::Walk | AnimationState::Jump | AnimationState::Fall
        )
    }
}

/// Parameters gameplay feeds into the animator. Triggers stay latched until
/// the animator consumes them.
#[derive(Component, Debug, Default)]
pub struct AnimatorParams {
    pub walking: bool,
    pub jumping: bool,
    dash_trigger: bool,
    attack_trigger: Option<AttackDirection>,
}

impl AnimatorParams {
    pub fn trigger_dash(&mut self) {
        self.dash_trigger = true;
    }

    pub fn trigger_attack(&mut self, direction: AttackDirection) {
        self.attack_trigger = Some(direction);
    }

    pub fn take_dash_trigger(&mut self) -> bool {
        std::mem::take(&mut self.dash_trigger)
    }

    pub fn take_attack_trigger(&mut self) -> Option<AttackDirection> {
        self.attack_trigger.take()
    }
}

/// Component for animation playback on the player sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
    /// Whether the animation has finished (for non-looping).
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        let state = AnimationState::Idle;
        Self {
            state,
            previous_state: state,
            current_frame: 0,
            total_frames: state.frame_count(),
            frame_timer: 0.0,
            frame_duration: state.frame_duration(),
            looping: state.looping(),
            finished: false,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting frame if state changed.
    /// Returns true when the state actually changed.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }
        self.previous_state = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
        self.looping = state.looping();
        self.total_frames = state.frame_count();
        self.frame_duration = state.frame_duration();
        true
    }

    /// Advance frame timing by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.finished {
            return;
        }
        self.frame_timer += dt;
        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            if self.current_frame + 1 < self.total_frames {
                self.current_frame += 1;
            } else if self.looping {
                self.current_frame = 0;
            } else {
                self.finished = true;
                break;
            }
        }
    }

    /// A one-shot attack holds until its last frame has played.
    fn attack_in_progress(&self) -> bool {
        matches!(self.state, AnimationState::Attack(_)) && !self.finished
    }

    /// Pick the next state. Priority: dash, attack, airborne, walk, idle.
    pub fn resolve(&self, params: &mut AnimatorParams, dashing: bool, vy: f32) -> AnimationState {
        let dash_triggered = params.take_dash_trigger();
        let attack_triggered = params.take_attack_trigger();

        if dashing || dash_triggered {
            AnimationState::Dash
        } else if let Some(direction) = attack_triggered {
            AnimationState::Attack(direction)
        } else if self.attack_in_progress() {
            self.state
        } else if params.jumping {
            if vy > 0.0 {
                AnimationState::Jump
            } else {
                AnimationState::Fall
            }
        } else if params.walking {
            AnimationState::Walk
        } else {
            AnimationState::Idle
        }
    }
}

/// Event emitted when an animation state changes.
#[derive(Debug, Clone)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub old_state: AnimationState,
    pub new_state: AnimationState,
}

impl Message for AnimationStateChanged {}
