//! Debug overlay (dev-tools): ground probes, attack boxes and velocity.
//!
//! F3 toggles the overlay.

use avian2d::prelude::*;
use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::animation::AnimationStateChanged;
use crate::combat::{AttackDirection, AttackTuning};
use crate::movement::systems::feet_position;
use crate::movement::{GroundCheck, MovementState, Player};

const VELOCITY_SCALE: f32 = 0.1;

#[derive(Resource, Debug)]
pub struct DebugOverlay {
    pub enabled: bool,
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self { enabled: true }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlay>()
            .add_systems(Update, (toggle_overlay, log_animation_changes))
            .add_systems(
                PostUpdate,
                (draw_ground_probes, draw_attack_areas, draw_velocity)
                    .run_if(|overlay: Res<DebugOverlay>| overlay.enabled),
            );
    }
}

fn toggle_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut overlay: ResMut<DebugOverlay>) {
    if keyboard.just_pressed(KeyCode::F3) {
        overlay.enabled = !overlay.enabled;
        info!(
            "Debug overlay {}",
            if overlay.enabled { "enabled" } else { "disabled" }
        );
    }
}

fn log_animation_changes(mut changes: MessageReader<AnimationStateChanged>) {
    for change in changes.read() {
        trace!(
            "{:?} animation {:?} -> {:?}",
            change.entity, change.old_state, change.new_state
        );
    }
}

fn draw_ground_probes(
    mut gizmos: Gizmos,
    ground_check: Res<GroundCheck>,
    players: Query<(&Transform, &Collider, &MovementState), With<Player>>,
) {
    for (transform, collider, state) in &players {
        let color = if state.grounded {
            Color::srgb(0.2, 1.0, 0.2)
        } else {
            Color::srgb(1.0, 0.2, 0.2)
        };
        let feet = feet_position(transform, collider);
        for origin in ground_check.probe_origins(feet) {
            gizmos.line_2d(origin, origin - Vec2::new(0.0, ground_check.check_y), color);
        }
    }
}

fn draw_attack_areas(
    mut gizmos: Gizmos,
    tuning: Res<AttackTuning>,
    players: Query<(&Transform, &MovementState), With<Player>>,
) {
    for (transform, state) in &players {
        let origin = transform.translation.truncate();
        for direction in [
            AttackDirection::Side,
            AttackDirection::Up,
            AttackDirection::Down,
        ] {
            let center = tuning.hitbox_center(direction, state.facing, origin);
            gizmos.rect_2d(
                Isometry2d::from_translation(center),
                tuning.area(direction).size(),
                Color::srgba(1.0, 0.9, 0.2, 0.6),
            );
        }
    }
}

fn draw_velocity(
    mut gizmos: Gizmos,
    players: Query<(&Transform, &LinearVelocity), With<Player>>,
) {
    for (transform, velocity) in &players {
        if velocity.length_squared() > 0.01 {
            let start = transform.translation.truncate();
            gizmos.line_2d(start, start + velocity.0 * VELOCITY_SCALE, Color::srgb(1.0, 1.0, 0.0));
        }
    }
}
