//! Core domain: per-frame ordering of the controller.

use bevy::prelude::*;

/// Stages of one controller tick, run in this order every frame while
/// playing and not paused.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Sample devices
    Input,
    /// Ground probes, timers and dash phases
    Sense,
    /// Facing, walking, jumping, gravity and attacks
    Act,
    /// Damage, effects and animation driven by this frame's actions
    React,
}
