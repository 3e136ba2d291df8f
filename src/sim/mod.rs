//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module draws or touches the
//! host: the only inputs are held keys, fire requests, `delta`, and the
//! seeded random source inside [`GameState`].

pub mod autopilot;
pub mod collision;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod powerup;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::{Autopilot, AutopilotInput};
pub use collision::{CornerHits, collides, corner_hits};
pub use entities::{Enemy, EntityRef, Meteorite, Player, PowerUp, Projectile, bounce_velocity};
pub use geometry::{Aabb, Body, Bounded, Offsets, polygon_vertices};
pub use input::{Key, KeyState};
pub use powerup::{MultiShootPowerUp, PowerUpComponent, PowerUpKind, SpeedPowerUp};
pub use spawn::{Side, WaveReport, spawn_wave};
pub use state::{GamePhase, GameState};
pub use tick::tick;
