//! Data-driven game balance
//!
//! [`Tuning`] mirrors the balance constants in [`crate::consts`]. Projectile
//! and power-up dimensions, the frame rate and the default surface stay
//! compile-time. Every field
//! defaults to its constant, so a JSON document only needs the keys it wants
//! to override:
//!
//! ```json
//! { "kill_objective": 50, "wave_cap": 10 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Runtime-tunable gameplay values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // Player
    pub player_size: f32,
    pub player_velocity: f32,

    // Enemies
    pub enemy_size: f32,
    pub enemy_sides: u32,
    pub enemy_velocity_x: f32,
    pub enemy_velocity_y: f32,
    pub enemy_bounce_gain: f32,
    pub max_velocity: f32,

    // Meteorites
    pub meteorite_sides: u32,
    pub meteorite_velocity: f32,
    pub meteorite_spin: f32,
    /// Speed multiplier range drawn per velocity component at spawn
    pub meteorite_jitter_min: f32,
    pub meteorite_jitter_max: f32,

    // Projectiles
    pub projectile_velocity: f32,
    pub projectile_decay: f32,

    // Power-ups
    pub power_up_duration: f32,
    pub power_up_chance: f64,
    pub speed_multiplier: f32,

    // Waves
    pub wave_interval_ms: f64,
    pub wave_rows: u32,
    pub wave_columns: u32,
    /// Grid row whose even columns also carry a meteorite
    pub wave_meteorite_row: u32,
    /// Stop spawning after this many waves (earlier rule set used 10)
    pub wave_cap: Option<u32>,

    /// Enemy kills needed to win
    pub kill_objective: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            player_velocity: PLAYER_VELOCITY,

            enemy_size: ENEMY_SIZE,
            enemy_sides: ENEMY_SIDES,
            enemy_velocity_x: ENEMY_VELOCITY_X,
            enemy_velocity_y: ENEMY_VELOCITY_Y,
            enemy_bounce_gain: ENEMY_BOUNCE_GAIN,
            max_velocity: MAX_VELOCITY,

            meteorite_sides: METEORITE_SIDES,
            meteorite_velocity: METEORITE_VELOCITY,
            meteorite_spin: METEORITE_SPIN,
            meteorite_jitter_min: METEORITE_JITTER_MIN,
            meteorite_jitter_max: METEORITE_JITTER_MAX,

            projectile_velocity: PROJECTILE_VELOCITY,
            projectile_decay: PROJECTILE_DECAY,

            power_up_duration: POWER_UP_DURATION,
            power_up_chance: POWER_UP_CHANCE,
            speed_multiplier: SPEED_MULTIPLIER,

            wave_interval_ms: WAVE_INTERVAL_MS,
            wave_rows: WAVE_ROWS,
            wave_columns: WAVE_COLUMNS,
            wave_meteorite_row: WAVE_METEORITE_ROW,
            wave_cap: None,

            kill_objective: KILL_OBJECTIVE,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read a JSON tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_size <= 0.0 {
            return Err(ConfigError::invalid("player_size", "must be positive"));
        }
        if self.enemy_size <= 0.0 {
            return Err(ConfigError::invalid("enemy_size", "must be positive"));
        }
        if self.enemy_sides < 3 {
            return Err(ConfigError::invalid("enemy_sides", "a polygon needs at least 3 sides"));
        }
        if self.meteorite_sides < 3 {
            return Err(ConfigError::invalid(
                "meteorite_sides",
                "a polygon needs at least 3 sides",
            ));
        }
        let (jitter_min, jitter_max) = (self.meteorite_jitter_min, self.meteorite_jitter_max);
        if !(jitter_min > 0.0 && jitter_min < jitter_max) {
            return Err(ConfigError::invalid(
                "meteorite_jitter_min",
                "must be positive and below meteorite_jitter_max",
            ));
        }
        if self.enemy_velocity_x == 0.0 {
            return Err(ConfigError::invalid(
                "enemy_velocity_x",
                "must be non-zero so enemies have a heading",
            ));
        }
        if !(0.0..=1.0).contains(&self.projectile_decay) {
            return Err(ConfigError::invalid("projectile_decay", "must be within 0..=1"));
        }
        if !(0.0..=1.0).contains(&self.power_up_chance) {
            return Err(ConfigError::invalid("power_up_chance", "must be within 0..=1"));
        }
        if self.speed_multiplier < 1.0 {
            return Err(ConfigError::invalid("speed_multiplier", "must be at least 1"));
        }
        if self.wave_interval_ms <= 0.0 {
            return Err(ConfigError::invalid("wave_interval_ms", "must be positive"));
        }
        if self.wave_columns == 0 {
            return Err(ConfigError::invalid("wave_columns", "must be at least 1"));
        }
        if self.kill_objective == 0 {
            return Err(ConfigError::invalid("kill_objective", "must be at least 1"));
        }
        Ok(())
    }

    /// Circumradius of the player triangle
    #[inline]
    pub fn player_radius(&self) -> f32 {
        self.player_size / 2.0
    }

    /// Circumradius of an enemy polygon
    #[inline]
    pub fn enemy_radius(&self) -> f32 {
        self.enemy_size / 2.0
    }

    /// Meteorites are half the enemy radius
    #[inline]
    pub fn meteorite_radius(&self) -> f32 {
        self.enemy_size / 4.0
    }

    /// Whether another wave may spawn after `waves` have already spawned
    pub fn allows_wave(&self, waves: u32) -> bool {
        self.wave_cap.is_none_or(|cap| waves < cap)
    }
}
