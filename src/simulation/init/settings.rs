use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::drag::DragSettings;
use crate::rigid_body_system::PhysicsSettings;
use crate::vec2::Vec2;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(String),
}

/// Static ground box created with the world
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundSettings {
    pub enabled: bool,
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Default for GroundSettings {
    fn default() -> Self {
        // 1200x900 px viewport at 50 px/m: ground along the bottom edge.
        Self {
            enabled: true,
            center: Vec2::new(12.0, -18.0),
            half_extents: Vec2::new(24.0, 0.5),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub physics: PhysicsSettings,
    pub drag: DragSettings,
    pub ground: GroundSettings,
    /// Zoom range the zoom events are clamped to
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            physics: PhysicsSettings::default(),
            drag: DragSettings::default(),
            ground: GroundSettings::default(),
            min_zoom: 0.1,
            max_zoom: 5.0,
        }
    }
}

impl SimulationSettings {
    /// Parse an override document; absent keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}
