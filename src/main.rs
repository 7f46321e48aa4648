mod animation;
mod combat;
mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod level;
mod movement;

use avian2d::prelude::*;
use bevy::prelude::*;

/// World gravity for bodies the controller does not drive (enemies).
const WORLD_GRAVITY: f32 = 1800.0;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Knight Controller".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * WORLD_GRAVITY))
    .add_plugins((
        core::CorePlugin,
        config::ConfigPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        effects::EffectsPlugin,
        animation::AnimationPlugin,
        level::LevelPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
