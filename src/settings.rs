//! Presentation preferences
//!
//! Nothing here affects the simulation; these only change what the render
//! step draws.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// HUD and debug overlay preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Debug ===
    /// Outline every entity's bounding box (toggled by the debug key)
    pub show_hitboxes: bool,

    // === HUD ===
    /// FPS, latency and entity count in the corners
    pub show_stats: bool,
    /// Kill count, objective and wave number
    pub show_progress: bool,
    /// Remaining time of active power-ups
    pub show_power_up_timers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hitboxes: false,

            show_stats: true,
            show_progress: true,
            show_power_up_timers: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing keys keep their defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Flip the hitbox overlay, returning the new state
    pub fn toggle_debug(&mut self) -> bool {
        self.show_hitboxes = !self.show_hitboxes;
        log::info!("Hitbox overlay: {}", self.show_hitboxes);
        self.show_hitboxes
    }
}
