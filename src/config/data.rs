//! Settings file schema.

use serde::{Deserialize, Serialize};

use crate::combat::{AttackTuning, EnemyTuning};
use crate::movement::{DashTuning, GroundCheck, MovementTuning};

pub const SCHEMA_VERSION: u32 = 1;

/// Everything tunable about the controller, as stored in
/// `assets/data/controller.ron`. Missing sections and fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerSettings {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub ground_check: GroundCheck,
    pub dash: DashTuning,
    pub attack: AttackTuning,
    pub enemy: EnemyTuning,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            movement: MovementTuning::default(),
            ground_check: GroundCheck::default(),
            dash: DashTuning::default(),
            attack: AttackTuning::default(),
            enemy: EnemyTuning::default(),
        }
    }
}
