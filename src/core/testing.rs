//! Headless app with the full physics stack, shared by the domain tests.

use avian2d::prelude::*;
use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

pub(crate) const FIXED_HZ: f64 = 60.0;

/// One physics step per `app.update()`. World gravity is off, so only
/// velocities set by the test move bodies.
pub(crate) fn physics_app() -> App {
    let mut app = App::new();

    app.add_plugins((MinimalPlugins, TransformPlugin, AssetPlugin::default()));
    app.init_asset::<Mesh>();
    // Avian's collider hierarchy plugin expects a scene spawner
    app.insert_resource(bevy::scene::SceneSpawner::default());
    app.add_plugins(PhysicsPlugins::default());
    app.insert_resource(Gravity::ZERO);
    app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / FIXED_HZ,
    )));

    app.finish();
    app.cleanup();
    app
}

pub(crate) fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}
