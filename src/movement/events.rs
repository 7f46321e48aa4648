//! Movement domain: locomotion events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::Facing;

/// Event emitted on the frame a dash begins
#[derive(Debug, Clone)]
pub struct DashStarted {
    pub entity: Entity,
    pub facing: Facing,
    pub grounded: bool,
    pub position: Vec2,
}

impl Message for DashStarted {}
