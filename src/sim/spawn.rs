//! Wave spawner
//!
//! Fired once at load and then on a fixed real-time interval by the host.
//! Spawning only appends to the entity collections.

use glam::Vec2;
use rand::Rng;

use super::entities::{Enemy, Meteorite, PowerUp};
use super::powerup::PowerUpKind;
use super::state::GameState;
use crate::consts::*;

/// Screen edge a meteorite enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
}

impl Side {
    const ALL: [Side; 3] = [Side::Left, Side::Right, Side::Top];
}

/// What a wave added, for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveReport {
    pub wave: u32,
    pub enemies: usize,
    pub meteorites: usize,
    pub power_up: Option<PowerUpKind>,
}

/// Spawn the next wave. Returns `None` without touching the world when the
/// game is over, won, or the wave cap is reached.
pub fn spawn_wave(state: &mut GameState) -> Option<WaveReport> {
    if !state.phase().is_running() || !state.tuning.allows_wave(state.waves) {
        return None;
    }
    state.waves += 1;

    let rows = state.tuning.wave_rows;
    let columns = state.tuning.wave_columns;
    let spacing = state.surface.width / columns as f32;
    let row_height = state.tuning.enemy_size * 1.5;

    let mut report = WaveReport {
        wave: state.waves,
        ..Default::default()
    };

    for row in 0..rows {
        // Odd rows shift a quarter column to stagger the grid
        let stagger = if row % 2 == 1 { spacing / 4.0 } else { -spacing / 4.0 };
        let y = -row_height * (row + 1) as f32;

        for column in 0..columns {
            let x = spacing * (column as f32 + 0.5) + stagger;
            let enemy = Enemy::new(Vec2::new(x, y), &state.surface, &state.tuning);
            state.enemies.push(enemy);
            report.enemies += 1;

            if row == state.tuning.wave_meteorite_row && column % 2 == 0 {
                let meteorite = spawn_meteorite(state, x);
                state.meteorites.push(meteorite);
                report.meteorites += 1;
            }
        }
    }

    if state.rng.random_bool(state.tuning.power_up_chance) {
        let power_up = spawn_power_up(state);
        report.power_up = Some(power_up.kind);
        state.power_ups.push(power_up);
    }

    log::info!(
        "Wave {}: {} enemies, {} meteorites, power-up: {:?}",
        report.wave,
        report.enemies,
        report.meteorites,
        report.power_up
    );
    Some(report)
}

/// A meteorite just off a random edge, drifting onto the screen with
/// jittered speed. `column_x` places it when entering from the top.
fn spawn_meteorite(state: &mut GameState, column_x: f32) -> Meteorite {
    let surface = state.surface;
    let margin = state.tuning.meteorite_radius() * 2.0;
    let side = Side::ALL[state.rng.random_range(0..Side::ALL.len())];

    let pos = match side {
        Side::Left => Vec2::new(-margin, state.rng.random_range(0.0..surface.height / 2.0)),
        Side::Right => Vec2::new(
            surface.width + margin,
            state.rng.random_range(0.0..surface.height / 2.0),
        ),
        Side::Top => Vec2::new(column_x, -margin),
    };

    let base = state.tuning.meteorite_velocity;
    let jitter = state.tuning.meteorite_jitter_min..state.tuning.meteorite_jitter_max;
    let jitter_x = state.rng.random_range(jitter.clone());
    let jitter_y = state.rng.random_range(jitter);
    let direction = if pos.x < surface.width / 2.0 { 1.0 } else { -1.0 };
    let vel = Vec2::new(direction * base * jitter_x, base * jitter_y);

    Meteorite::new(pos, vel, &state.tuning)
}

/// A random power-up somewhere fully on screen
fn spawn_power_up(state: &mut GameState) -> PowerUp {
    let margin = POWER_UP_RADIUS + POWER_UP_HITBOX_MARGIN;
    let surface = state.surface;
    let kind = PowerUpKind::ALL[state.rng.random_range(0..PowerUpKind::ALL.len())];
    let pos = Vec2::new(
        random_within(&mut state.rng, margin, surface.width - margin),
        random_within(&mut state.rng, margin, surface.height - margin),
    );
    PowerUp::new(pos, kind, state.tuning.power_up_duration)
}

/// Uniform in `lo..hi`, or the midpoint when the range is empty
fn random_within(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if lo < hi {
        rng.random_range(lo..hi)
    } else {
        (lo + hi) / 2.0
    }
}
