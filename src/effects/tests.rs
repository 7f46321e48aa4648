//! Effects domain: tests for effect spawning and expiry.

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use std::time::Duration;

use super::{
    DashEffect, EffectLifetime, SlashEffect, cleanup_effects, spawn_dash_effects,
    spawn_slash_effects,
};
use crate::combat::{AttackDirection, AttackPerformed, AttackTuning};
use crate::movement::{DashStarted, Facing};

fn effects_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>()
        .add_message::<DashStarted>()
        .add_systems(Update, (spawn_dash_effects, cleanup_effects).chain());
    app
}

fn dash(app: &mut App, grounded: bool) {
    let entity = app.world_mut().spawn_empty().id();
    app.world_mut()
        .resource_mut::<Messages<DashStarted>>()
        .write(DashStarted {
            entity,
            facing: Facing::Right,
            grounded,
            position: Vec2::ZERO,
        });
}

fn dash_effect_count(app: &mut App) -> usize {
    let world = app.world_mut();
    world
        .query_filtered::<Entity, With<DashEffect>>()
        .iter(world)
        .count()
}

#[test]
fn test_grounded_dash_spawns_effect_behind_player() {
    let mut app = effects_app();
    dash(&mut app, true);
    app.update();

    assert_eq!(dash_effect_count(&mut app), 1);
    let world = app.world_mut();
    let transform = world
        .query_filtered::<&Transform, With<DashEffect>>()
        .single(world)
        .unwrap();
    assert!(transform.translation.x < 0.0);
}

#[test]
fn test_air_dash_spawns_no_effect() {
    let mut app = effects_app();
    dash(&mut app, false);
    app.update();

    assert_eq!(dash_effect_count(&mut app), 0);
}

#[test]
fn test_effects_expire() {
    let mut app = effects_app();
    let effect = app.world_mut().spawn(EffectLifetime(0.1)).id();

    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(0.05));
    app.update();
    assert!(app.world().get_entity(effect).is_ok());

    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(0.06));
    app.update();
    assert!(app.world().get_entity(effect).is_err());
}

fn slash(app: &mut App, direction: AttackDirection, facing: Facing, hits: usize) {
    let entity = app.world_mut().spawn_empty().id();
    app.world_mut()
        .resource_mut::<Messages<AttackPerformed>>()
        .write(AttackPerformed {
            entity,
            direction,
            facing,
            center: Vec2::new(30.0, 0.0),
            size: Vec2::new(40.0, 24.0),
            hits,
        });
}

#[test]
fn test_slash_effect_follows_attack() {
    let mut app = App::new();
    app.init_resource::<Time>()
        .init_resource::<AttackTuning>()
        .add_message::<AttackPerformed>()
        .add_systems(Update, spawn_slash_effects);

    slash(&mut app, AttackDirection::Side, Facing::Left, 0);
    slash(&mut app, AttackDirection::Up, Facing::Right, 2);
    app.update();

    let lifetime = app.world().resource::<AttackTuning>().slash_lifetime;
    let world = app.world_mut();
    let mut slashes: Vec<(Sprite, Transform, f32)> = world
        .query_filtered::<(&Sprite, &Transform, &EffectLifetime), With<SlashEffect>>()
        .iter(world)
        .map(|(sprite, transform, life)| (sprite.clone(), *transform, life.0))
        .collect();
    assert_eq!(slashes.len(), 2);
    slashes.sort_by_key(|(sprite, _, _)| !sprite.flip_x);

    let (missed, side, missed_life) = &slashes[0];
    assert!(missed.flip_x);
    assert_eq!(missed.custom_size, Some(Vec2::new(40.0, 24.0)));
    assert_eq!(side.translation.truncate(), Vec2::new(30.0, 0.0));
    assert_eq!(*missed_life, lifetime);

    let (connected, up, _) = &slashes[1];
    assert!(!connected.flip_x);
    assert!(connected.color.alpha() > missed.color.alpha());
    let (_, angle) = up.rotation.to_axis_angle();
    assert!((angle - 80f32.to_radians()).abs() < 1e-4);
}
