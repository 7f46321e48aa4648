//! Range checks for loaded settings.

use super::data::{ControllerSettings, SCHEMA_VERSION};
use crate::combat::AttackArea;

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a value is finite and non-negative
macro_rules! check_non_negative {
    ($errors:expr, $section:expr, $field:literal, $value:expr) => {
        if !$value.is_finite() || $value < 0.0 {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!("must be a finite non-negative number, got {}", $value),
            });
        }
    };
}

/// Helper macro for checking a value is finite and strictly positive
macro_rules! check_positive {
    ($errors:expr, $section:expr, $field:literal, $value:expr) => {
        if !$value.is_finite() || $value <= 0.0 {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!("must be a finite positive number, got {}", $value),
            });
        }
    };
}

fn check_area(errors: &mut Vec<ValidationError>, field: &'static str, area: &AttackArea) {
    if !(area.width.is_finite() && area.width > 0.0 && area.height.is_finite() && area.height > 0.0)
    {
        errors.push(ValidationError {
            section: "attack",
            field,
            message: format!("area must have a positive size, got {}x{}", area.width, area.height),
        });
    }
    if !(area.offset_x.is_finite() && area.offset_y.is_finite()) {
        errors.push(ValidationError {
            section: "attack",
            field,
            message: "area offset must be finite".to_string(),
        });
    }
}

/// Validate all settings ranges.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_settings(settings: &ControllerSettings) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if settings.schema_version != SCHEMA_VERSION {
        errors.push(ValidationError {
            section: "settings",
            field: "schema_version",
            message: format!(
                "expected {}, got {}",
                SCHEMA_VERSION, settings.schema_version
            ),
        });
    }

    let movement = &settings.movement;
    check_non_negative!(errors, "movement", "walk_speed", movement.walk_speed);
    check_positive!(errors, "movement", "jump_force", movement.jump_force);
    check_positive!(errors, "movement", "gravity", movement.gravity);
    check_positive!(errors, "movement", "max_fall_speed", movement.max_fall_speed);
    check_non_negative!(errors, "movement", "coyote_time", movement.coyote_time);
    check_non_negative!(
        errors,
        "movement",
        "jump_cut_velocity",
        movement.jump_cut_velocity
    );

    let ground = &settings.ground_check;
    check_non_negative!(errors, "ground_check", "check_x", ground.check_x);
    check_positive!(errors, "ground_check", "check_y", ground.check_y);

    let dash = &settings.dash;
    check_non_negative!(errors, "dash", "dash_speed", dash.dash_speed);
    check_positive!(errors, "dash", "dash_time", dash.dash_time);
    check_non_negative!(errors, "dash", "dash_cooldown", dash.dash_cooldown);

    let attack = &settings.attack;
    check_non_negative!(errors, "attack", "damage", attack.damage);
    check_non_negative!(errors, "attack", "recoil_strength", attack.recoil_strength);
    check_non_negative!(
        errors,
        "attack",
        "time_between_attacks",
        attack.time_between_attacks
    );
    check_positive!(errors, "attack", "slash_lifetime", attack.slash_lifetime);
    check_area(&mut errors, "side", &attack.side);
    check_area(&mut errors, "up", &attack.up);
    check_area(&mut errors, "down", &attack.down);

    let enemy = &settings.enemy;
    check_positive!(errors, "enemy", "health", enemy.health);
    check_positive!(errors, "enemy", "size", enemy.size);
    check_non_negative!(errors, "enemy", "recoil_length", enemy.recoil_length);
    check_non_negative!(errors, "enemy", "recoil_factor", enemy.recoil_factor);

    errors
}
