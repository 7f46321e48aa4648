//! Config domain: loads controller settings from RON and installs them as
//! tuning resources.

mod data;
mod loader;
mod validation;

pub use data::ControllerSettings;
pub use loader::load_settings;
pub use validation::validate_settings;

use bevy::prelude::*;
use std::path::Path;

pub const SETTINGS_PATH: &str = "assets/data/controller.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, apply_settings);
    }
}

/// Resolve the settings to use: the file when it loads and validates,
/// otherwise the defaults. Every problem is logged.
pub fn resolve_settings(path: &Path) -> ControllerSettings {
    if !path.exists() {
        info!("No settings file at {}, using defaults", path.display());
        return ControllerSettings::default();
    }

    let settings = match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            warn!("Falling back to default controller settings");
            return ControllerSettings::default();
        }
    };

    let errors = validate_settings(&settings);
    if !errors.is_empty() {
        for e in &errors {
            error!("Invalid setting {}", e);
        }
        warn!(
            "{} invalid setting(s), falling back to default controller settings",
            errors.len()
        );
        return ControllerSettings::default();
    }

    info!("Loaded controller settings from {}", path.display());
    settings
}

fn apply_settings(mut commands: Commands) {
    let settings = resolve_settings(Path::new(SETTINGS_PATH));
    debug!("Controller settings: {:?}", settings);

    commands.insert_resource(settings.movement);
    commands.insert_resource(settings.ground_check);
    commands.insert_resource(settings.dash);
    commands.insert_resource(settings.attack);
    commands.insert_resource(settings.enemy);
}
