//! Combat domain: tests for attack rules, recoil and damage handling.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, Messages};
use bevy::prelude::*;
use std::time::Duration;

use super::systems::{apply_damage, process_deaths, process_player_attack};
use super::{
    AttackDirection, AttackPerformed, AttackState, AttackTuning, CombatInput, DamageEvent,
    DeathEvent, Enemy, EnemyBundle, EnemyTuning, Health, Recoil,
};
use crate::core::testing::{physics_app, run_frames};
use crate::movement::{DashState, Facing, GameLayer, MovementInput, MovementState, Player};

// -----------------------------------------------------------------------------
// Attack direction
// -----------------------------------------------------------------------------

#[test]
fn test_attack_direction_rules() {
    assert_eq!(AttackDirection::from_input(0.0, true), AttackDirection::Side);
    assert_eq!(AttackDirection::from_input(0.0, false), AttackDirection::Side);
    assert_eq!(AttackDirection::from_input(1.0, true), AttackDirection::Up);
    assert_eq!(AttackDirection::from_input(1.0, false), AttackDirection::Up);
    assert_eq!(AttackDirection::from_input(-1.0, false), AttackDirection::Down);
}

#[test]
fn test_down_on_ground_swings_sideways() {
    assert_eq!(AttackDirection::from_input(-1.0, true), AttackDirection::Side);
}

#[test]
fn test_hitbox_center_mirrors_side_offset() {
    let tuning = AttackTuning::default();
    let origin = Vec2::new(100.0, 50.0);

    let right = tuning.hitbox_center(AttackDirection::Side, Facing::Right, origin);
    let left = tuning.hitbox_center(AttackDirection::Side, Facing::Left, origin);
    assert_eq!(right, Vec2::new(100.0 + tuning.side.offset_x, 50.0));
    assert_eq!(left, Vec2::new(100.0 - tuning.side.offset_x, 50.0));

    let up = tuning.hitbox_center(AttackDirection::Up, Facing::Left, origin);
    assert_eq!(up, Vec2::new(100.0, 50.0 + tuning.up.offset_y));
    let down = tuning.hitbox_center(AttackDirection::Down, Facing::Right, origin);
    assert_eq!(down, Vec2::new(100.0, 50.0 + tuning.down.offset_y));
}

#[test]
fn test_slash_angles() {
    assert_eq!(AttackDirection::Side.slash_angle(), 0.0);
    assert!(AttackDirection::Up.slash_angle() > 0.0);
    assert!(AttackDirection::Down.slash_angle() < 0.0);
}

// -----------------------------------------------------------------------------
// Cooldown, health and recoil
// -----------------------------------------------------------------------------

#[test]
fn test_attack_cooldown() {
    let mut attack = AttackState::default();
    assert!(attack.is_ready(0.3));

    attack.time_since_attack = 0.0;
    attack.tick(0.2);
    assert!(!attack.is_ready(0.3));

    attack.tick(0.15);
    assert!(attack.is_ready(0.3));
}

#[test]
fn test_health_never_negative() {
    let mut health = Health::new(15.0);
    assert_eq!(health.take_damage(10.0), 10.0);
    assert!(!health.is_dead());
    assert_eq!(health.take_damage(10.0), 5.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());
}

#[test]
fn test_recoil_pushes_away_from_attacker() {
    let mut recoil = Recoil::new(0.2, 400.0);
    // Attacker is to the left of the target
    let knockback = recoil.start(Vec2::NEG_X, 1.0);
    assert_eq!(knockback, Some(Vec2::new(400.0, 0.0)));
    assert!(recoil.active);
}

#[test]
fn test_recoil_does_not_stack() {
    let mut recoil = Recoil::new(0.2, 400.0);
    assert!(recoil.start(Vec2::X, 1.0).is_some());
    assert!(recoil.start(Vec2::X, 1.0).is_none());

    recoil.update(0.1);
    assert!(recoil.active);
    recoil.update(0.1);
    assert!(!recoil.active);
    assert!(recoil.start(Vec2::X, 1.0).is_some());
}

// -----------------------------------------------------------------------------
// Damage systems
// -----------------------------------------------------------------------------

fn damage_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>()
        .add_message::<DamageEvent>()
        .add_message::<DeathEvent>()
        .add_systems(Update, (apply_damage, process_deaths).chain());
    app
}

fn spawn_enemy(app: &mut App, health: f32) -> Entity {
    app.world_mut()
        .spawn((
            Enemy,
            Health::new(health),
            Recoil::new(0.2, 400.0),
            LinearVelocity::default(),
        ))
        .id()
}

fn hit(app: &mut App, source: Entity, target: Entity, amount: f32) {
    app.world_mut()
        .resource_mut::<Messages<DamageEvent>>()
        .write(DamageEvent {
            source,
            target,
            amount,
            hit_direction: Vec2::X,
            recoil_strength: 1.0,
        });
}

#[test]
fn test_damage_reduces_health_and_recoils_once() {
    let mut app = damage_app();
    let player = app.world_mut().spawn_empty().id();
    let enemy = spawn_enemy(&mut app, 30.0);

    hit(&mut app, player, enemy, 10.0);
    hit(&mut app, player, enemy, 10.0);
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(0.016));
    app.update();

    assert_eq!(app.world().get::<Health>(enemy).unwrap().current, 10.0);
    let velocity = app.world().get::<LinearVelocity>(enemy).unwrap();
    assert_eq!(velocity.x, -400.0);
    assert!(app.world().get::<Recoil>(enemy).unwrap().active);
}

#[test]
fn test_lethal_damage_despawns_enemy() {
    let mut app = damage_app();
    let player = app.world_mut().spawn_empty().id();
    let enemy = spawn_enemy(&mut app, 10.0);

    hit(&mut app, player, enemy, 25.0);
    app.update();

    assert!(app.world().get_entity(enemy).is_err());
}

#[test]
fn test_damage_ignores_non_enemies() {
    let mut app = damage_app();
    let player = app.world_mut().spawn_empty().id();
    let bystander = app
        .world_mut()
        .spawn((Health::new(10.0), Recoil::new(0.2, 400.0)))
        .id();

    hit(&mut app, player, bystander, 25.0);
    app.update();

    assert_eq!(app.world().get::<Health>(bystander).unwrap().current, 10.0);
}

// -----------------------------------------------------------------------------
// Player attack against the physics world
// -----------------------------------------------------------------------------

#[derive(Resource, Default)]
struct SwingLog {
    swings: Vec<(AttackDirection, usize)>,
    targets: Vec<Entity>,
}

fn record_swings(
    mut attacks: MessageReader<AttackPerformed>,
    mut damage: MessageReader<DamageEvent>,
    mut log: ResMut<SwingLog>,
) {
    for attack in attacks.read() {
        log.swings.push((attack.direction, attack.hits));
    }
    for event in damage.read() {
        log.targets.push(event.target);
    }
}

fn attack_app() -> App {
    let mut app = physics_app();
    app.init_resource::<CombatInput>()
        .init_resource::<MovementInput>()
        .init_resource::<AttackTuning>()
        .init_resource::<SwingLog>()
        .add_message::<AttackPerformed>()
        .add_message::<DamageEvent>()
        .add_systems(Update, (process_player_attack, record_swings).chain());
    app
}

fn spawn_attacker(app: &mut App, dash: DashState) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            MovementState {
                grounded: true,
                facing: Facing::Right,
                ..default()
            },
            dash,
            AttackState::default(),
            Transform::default(),
            RigidBody::Kinematic,
            Collider::rectangle(24.0, 48.0),
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Attackable],
            ),
        ))
        .id()
}

fn spawn_target_enemy(app: &mut App, position: Vec2) -> Entity {
    app.world_mut()
        .spawn(EnemyBundle::new(position, &EnemyTuning::default()))
        .id()
}

fn hold_attack(app: &mut App, held: bool) {
    app.world_mut().resource_mut::<CombatInput>().attack = held;
}

#[test]
fn test_attack_damages_only_enemies_inside_the_box() {
    let mut app = attack_app();
    spawn_attacker(&mut app, DashState::Ready);
    let inside = spawn_target_enemy(&mut app, Vec2::new(30.0, 0.0));
    let behind = spawn_target_enemy(&mut app, Vec2::new(-40.0, 0.0));
    let crate_box = app
        .world_mut()
        .spawn((
            Transform::from_xyz(55.0, 0.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(8.0, 8.0),
            CollisionLayers::new(GameLayer::Attackable, [GameLayer::Player]),
        ))
        .id();

    // Let the physics step register the colliders before swinging
    run_frames(&mut app, 3);
    hold_attack(&mut app, true);
    run_frames(&mut app, 1);

    let log = app.world().resource::<SwingLog>();
    assert_eq!(log.swings, vec![(AttackDirection::Side, 1)]);
    assert_eq!(log.targets, vec![inside]);
    assert!(!log.targets.contains(&behind));
    assert!(!log.targets.contains(&crate_box));
}

#[test]
fn test_attack_waits_for_cooldown() {
    let mut app = attack_app();
    spawn_attacker(&mut app, DashState::Ready);
    run_frames(&mut app, 3);

    // 10 frames is well under time_between_attacks
    hold_attack(&mut app, true);
    run_frames(&mut app, 10);
    assert_eq!(app.world().resource::<SwingLog>().swings.len(), 1);

    run_frames(&mut app, 20);
    assert_eq!(app.world().resource::<SwingLog>().swings.len(), 2);
}

#[test]
fn test_no_attack_while_dashing() {
    let mut app = attack_app();
    spawn_attacker(&mut app, DashState::Dashing { remaining: 10.0 });
    spawn_target_enemy(&mut app, Vec2::new(30.0, 0.0));
    run_frames(&mut app, 3);

    hold_attack(&mut app, true);
    run_frames(&mut app, 5);

    let log = app.world().resource::<SwingLog>();
    assert!(log.swings.is_empty());
    assert!(log.targets.is_empty());
}
