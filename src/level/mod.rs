//! Level domain: the test room and the player body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationController, AnimatorParams};
use crate::combat::{AttackState, EnemyBundle, EnemyTuning};
use crate::core::GameState;
use crate::movement::{DashState, GameLayer, Ground, MovementState, MovementTuning, Player};

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const PLAYER_SPAWN: Vec2 = Vec2::new(-300.0, -120.0);

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Playing),
            (spawn_test_room, spawn_enemies, spawn_player),
        );
    }
}

pub(crate) fn ground_block(position: Vec2, size: Vec2, color: Color) -> impl Bundle {
    (
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(
            GameLayer::Ground,
            [GameLayer::Player, GameLayer::Attackable],
        ),
    )
}

pub(crate) fn spawn_test_room(mut commands: Commands, tuning: Res<MovementTuning>) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor and walls
    commands.spawn(ground_block(
        Vec2::new(0.0, -200.0),
        Vec2::new(1200.0, 40.0),
        ground_color,
    ));
    commands.spawn(ground_block(
        Vec2::new(-620.0, 50.0),
        Vec2::new(40.0, 540.0),
        wall_color,
    ));
    commands.spawn(ground_block(
        Vec2::new(620.0, 50.0),
        Vec2::new(40.0, 540.0),
        wall_color,
    ));

    // Platforms: the low pair is reachable with one jump, the top one needs an air jump
    for (position, width) in [
        (Vec2::new(-250.0, -80.0), 160.0),
        (Vec2::new(150.0, -85.0), 140.0),
        (Vec2::new(-20.0, 90.0), 120.0),
    ] {
        commands.spawn(ground_block(position, Vec2::new(width, 20.0), platform_color));
    }

    info!(
        "Test room spawned: jump height {:.0}, reachable height {:.0}",
        tuning.single_jump_height(),
        tuning.max_reachable_height()
    );
}

pub(crate) fn spawn_enemies(mut commands: Commands, tuning: Res<EnemyTuning>) {
    for position in [
        Vec2::new(0.0, -160.0),
        Vec2::new(260.0, -160.0),
        Vec2::new(150.0, -30.0),
    ] {
        commands.spawn(EnemyBundle::new(position, &tuning));
    }
}

pub(crate) fn spawn_player(mut commands: Commands) {
    info!("Spawning player at {:?}", PLAYER_SPAWN);

    commands.spawn((
        // Identity & state
        (
            Player,
            MovementState::default(),
            DashState::default(),
            AttackState::default(),
            AnimatorParams::default(),
            AnimationController::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(PLAYER_SPAWN.x, PLAYER_SPAWN.y, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is applied by the controller
            Friction::new(0.0),
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Attackable],
            ),
        ),
    ));
}
