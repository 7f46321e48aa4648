//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{detect_ground, feet_position};
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_gravity, apply_horizontal_movement, apply_jump, update_dash, update_facing,
    update_jump_variables,
};
