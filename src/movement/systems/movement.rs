//! Movement domain: locomotion systems for timers, dashing and physics.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    DashStarted, DashState, DashTuning, MovementInput, MovementState, MovementTuning, Player,
};

pub(crate) fn update_jump_variables(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, velocity) in &mut query {
        state.update_jump_variables(&tuning, input.jump_just_pressed, velocity.y, dt);
    }
}

pub(crate) fn update_dash(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<DashTuning>,
    mut dash_events: MessageWriter<DashStarted>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut MovementState,
            &mut DashState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut state, mut dash, mut velocity) in &mut query {
        if dash.tick(dt, &tuning) {
            // Vertical velocity stays zero; gravity picks up again next frame
            debug!("Dash ended, cooldown {}s", tuning.dash_cooldown);
        }

        if input.dash_just_pressed && dash.can_start(&state, &tuning) {
            dash.start(&tuning);
            state.dashed_since_grounded = true;
            dash_events.write(DashStarted {
                entity,
                facing: state.facing,
                grounded: state.grounded,
                position: transform.translation.truncate(),
            });
            debug!(
                "Dash started: facing={:?}, grounded={}",
                state.facing, state.grounded
            );
        }

        // Dash owns the velocity until it ends
        if dash.is_dashing() {
            velocity.x = state.facing.sign() * tuning.dash_speed;
            velocity.y = 0.0;
        }
    }
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<(&mut MovementState, &DashState, &mut Sprite), With<Player>>,
) {
    for (mut state, dash, mut sprite) in &mut query {
        if dash.is_dashing() {
            continue;
        }

        state.facing = state.facing.from_axis(input.axis.x);
        sprite.flip_x = state.facing.sign() < 0.0;
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&DashState, &mut LinearVelocity), With<Player>>,
) {
    for (dash, mut velocity) in &mut query {
        if dash.is_dashing() {
            continue;
        }

        velocity.x = tuning.walk_speed * input.axis.x;
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &DashState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, dash, mut velocity) in &mut query {
        if dash.is_dashing() {
            continue;
        }

        if let Some(kind) = state.apply_jump(&tuning, &input, &mut velocity.y) {
            debug!(
                "{:?} jump: air_jumps_used={}, coyote_timer={:.3}",
                kind, state.air_jumps_used, state.coyote_timer
            );
        }
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&DashState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (dash, mut velocity) in &mut query {
        // No gravity during dash
        if dash.is_dashing() {
            continue;
        }

        velocity.y = (velocity.y - tuning.gravity * dt).max(-tuning.max_fall_speed);
    }
}
