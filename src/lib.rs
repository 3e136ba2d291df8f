//! Lost in Space - a small 2D arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, power-ups, waves, tick)
//! - `render`: Drawing-surface abstraction and frame composition
//! - `clock`: Frame delta measurement and the real-time wave interval
//! - `session`: Host-facing wrapper tying input, timing, and drawing together
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences (debug overlay, HUD)

pub mod clock;
pub mod error;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use session::Session;
pub use settings::Settings;
pub use tuning::Tuning;

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate of the simulation+render timer
    pub const FRAMERATE: f32 = 60.0;
    /// Frame timer period in milliseconds
    pub const FRAME_INTERVAL_MS: f64 = 1000.0 / FRAMERATE as f64;

    /// Default drawing surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Player ship (triangle, diameter in pixels)
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_SIDES: u32 = 3;
    /// Player speed, pixels/s
    pub const PLAYER_VELOCITY: f32 = 300.0;

    /// Enemy polygon diameter
    pub const ENEMY_SIZE: f32 = 50.0;
    pub const ENEMY_SIDES: u32 = 3;
    /// Initial enemy velocity components, pixels/s
    pub const ENEMY_VELOCITY_X: f32 = 100.0;
    pub const ENEMY_VELOCITY_Y: f32 = 50.0;
    /// Bounce amplification below the velocity cap
    pub const ENEMY_BOUNCE_GAIN: f32 = 1.1;
    /// Velocity cap for bounce amplification
    pub const MAX_VELOCITY: f32 = 275.0;

    /// Meteorites: heptagons at half the enemy radius
    pub const METEORITE_SIDES: u32 = 7;
    pub const METEORITE_VELOCITY: f32 = 100.0;
    /// Rotation added every tick (radians)
    pub const METEORITE_SPIN: f32 = 0.05;
    /// Velocity jitter range, multiplied into METEORITE_VELOCITY
    pub const METEORITE_JITTER_MIN: f32 = 0.5;
    pub const METEORITE_JITTER_MAX: f32 = 1.5;

    /// Projectile rectangle and launch speed
    pub const PROJECTILE_WIDTH: f32 = 3.0;
    pub const PROJECTILE_HEIGHT: f32 = 12.0;
    pub const PROJECTILE_VELOCITY: f32 = 300.0;
    /// Per-tick velocity decay
    pub const PROJECTILE_DECAY: f32 = 0.99;

    /// Collectible icon radius and hitbox margin
    pub const POWER_UP_RADIUS: f32 = 14.0;
    pub const POWER_UP_HITBOX_MARGIN: f32 = 3.0;
    /// Effect duration in seconds
    pub const POWER_UP_DURATION: f32 = 15.0;
    /// Chance of a power-up per wave
    pub const POWER_UP_CHANCE: f64 = 0.3;
    /// Speed multiplier while the speed-up is active
    pub const SPEED_MULTIPLIER: f32 = 2.0;

    /// Wave spawner
    pub const WAVE_INTERVAL_MS: f64 = 5000.0;
    pub const WAVE_ROWS: u32 = 3;
    pub const WAVE_COLUMNS: u32 = 10;
    /// Row that carries meteorites (alternating columns)
    pub const WAVE_METEORITE_ROW: u32 = 1;

    /// Enemy kills needed to win
    pub const KILL_OBJECTIVE: u32 = 300;
}

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(consts::SURFACE_WIDTH, consts::SURFACE_HEIGHT)
    }
}

/// Heading of a velocity vector as a polygon rotation.
///
/// A polygon drawn with rotation 0 points its apex up; the returned rotation
/// points the apex along `(vx, vy)`.
#[inline]
pub fn heading(vx: f32, vy: f32) -> f32 {
    let base = (vy / vx).atan() + std::f32::consts::FRAC_PI_2;
    if vx < 0.0 {
        base + std::f32::consts::PI
    } else {
        base
    }
}
