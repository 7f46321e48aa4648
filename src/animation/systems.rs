//! Animation systems: parameter sync, state resolution and sprite tinting.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::animation::controller::{
    AnimationController, AnimationState, AnimationStateChanged, AnimatorParams,
};
use crate::combat::AttackPerformed;
use crate::movement::{DashStarted, DashState, MovementState, Player};

pub(crate) fn sync_animator_params(
    mut dashes: MessageReader<DashStarted>,
    mut attacks: MessageReader<AttackPerformed>,
    mut query: Query<(&MovementState, &LinearVelocity, &mut AnimatorParams), With<Player>>,
) {
    for (movement, velocity, mut params) in &mut query {
        params.walking = velocity.x != 0.0 && movement.grounded;
        params.jumping = !movement.grounded;
    }

    for dash in dashes.read() {
        if let Ok((_, _, mut params)) = query.get_mut(dash.entity) {
            params.trigger_dash();
        }
    }

    for attack in attacks.read() {
        if let Ok((_, _, mut params)) = query.get_mut(attack.entity) {
            params.trigger_attack(attack.direction);
        }
    }
}

pub(crate) fn drive_animation(
    time: Res<Time>,
    mut changes: MessageWriter<AnimationStateChanged>,
    mut query: Query<(
        Entity,
        &DashState,
        &LinearVelocity,
        &mut AnimatorParams,
        &mut AnimationController,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, dash, velocity, mut params, mut controller) in &mut query {
        let next = controller.resolve(&mut params, dash.is_dashing(), velocity.y);
        let old_state = controller.state;

        if controller.set_state(next) {
            trace!("Animation {:?} -> {:?}", old_state, next);
            changes.write(AnimationStateChanged {
                entity,
                old_state,
                new_state: next,
            });
        }

        controller.advance(dt);
    }
}

/// Stand-in for sprite sheets: each state gets its own tint.
pub(crate) fn tint_by_animation(
    mut query: Query<(&AnimationController, &mut Sprite), Changed<AnimationController>>,
) {
    for (controller, mut sprite) in &mut query {
        sprite.color = match controller.state {
            AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Walk => Color::srgb(0.85, 0.9, 1.0),
            AnimationState::Jump => Color::srgb(0.7, 0.9, 1.0),
            AnimationState::Fall => Color::srgb(0.6, 0.75, 0.95),
            AnimationState::Dash => Color::srgb(0.5, 1.0, 0.9),
            AnimationState::Attack(_) => Color::srgb(1.0, 0.95, 0.6),
        };
    }
}
