//! Core domain: boot flow, camera, pause toggling and the single-player rule.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::resources::{ActivePlayer, GameplayPaused};
use crate::core::state::GameState;
use crate::movement::Player;

const PAUSE_SOURCE_MENU: &str = "menu";

/// Horizontal camera follow speed (fraction of the gap closed per second).
const CAMERA_FOLLOW_RATE: f32 = 6.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Settings are applied during Startup, so the first Update can leave Boot.
pub(crate) fn finish_boot(mut game_state: ResMut<NextState<GameState>>) {
    info!("Boot complete, entering play");
    game_state.set(GameState::Playing);
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        let now_paused = paused.toggle(PAUSE_SOURCE_MENU);
        info!("Gameplay {}", if now_paused { "paused" } else { "resumed" });
    }
}

/// Physics keeps stepping in the fixed schedules, so it has to be paused
/// alongside the gameplay systems.
pub(crate) fn sync_physics_pause(
    paused: Res<GameplayPaused>,
    physics_time: Option<ResMut<Time<Physics>>>,
) {
    let Some(mut physics_time) = physics_time else {
        return;
    };

    if paused.is_paused() && !physics_time.is_paused() {
        physics_time.pause();
        debug!("Physics paused");
    } else if !paused.is_paused() && physics_time.is_paused() {
        physics_time.unpause();
        debug!("Physics resumed");
    }
}

pub(crate) fn follow_player(
    time: Res<Time>,
    players: Query<&Transform, With<Player>>,
    mut cameras: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    let blend = (CAMERA_FOLLOW_RATE * time.delta_secs()).min(1.0);
    for mut camera in &mut cameras {
        camera.translation.x += (player.translation.x - camera.translation.x) * blend;
    }
}

/// Keeps exactly one player alive. The first player seen becomes the active
/// one; any other player spawned while it still exists is despawned.
pub(crate) fn enforce_single_player(
    mut commands: Commands,
    mut active: ResMut<ActivePlayer>,
    added: Query<Entity, Added<Player>>,
    existing: Query<(), With<Player>>,
) {
    for entity in &added {
        match active.get() {
            Some(current) if current != entity && existing.contains(current) => {
                warn!(
                    "Player {:?} is already active, despawning duplicate {:?}",
                    current, entity
                );
                commands.entity(entity).despawn();
            }
            _ => {
                debug!("Player {:?} is now the active player", entity);
                active.0 = Some(entity);
            }
        }
    }
}
