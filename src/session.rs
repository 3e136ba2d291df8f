//! Host-facing game session
//!
//! Owns the world and everything the host loop needs around it: held keys,
//! presentation settings, the autopilot, frame timing, and the wave timer.
//! Hosts forward key events and timestamps here and hand over a canvas.

use serde::Serialize;

use crate::Surface;
use crate::clock::{FrameClock, FrameStats, IntervalTimer};
use crate::render::{Canvas, draw_frame};
use crate::settings::Settings;
use crate::sim::{Autopilot, GamePhase, GameState, Key, KeyState, WaveReport, spawn_wave, tick};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    keys: KeyState,
    settings: Settings,
    autopilot: Option<Autopilot>,
    clock: FrameClock,
    /// Only advanced by [`Session::poll_waves`]. Hosts with their own
    /// interval timer call [`Session::spawn_wave`] instead and leave it idle.
    wave_timer: IntervalTimer,
}

/// End-of-run numbers reported by hosts
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub phase: GamePhase,
    pub kills: u32,
    pub waves: u32,
    pub ticks: u64,
    pub entities: usize,
    pub stats: FrameStats,
}

impl Session {
    pub fn new(surface: Surface, tuning: Tuning, settings: Settings, seed: u64) -> Self {
        let wave_timer = IntervalTimer::new(tuning.wave_interval_ms);
        Self {
            state: GameState::new(surface, tuning, seed),
            keys: KeyState::default(),
            settings,
            autopilot: None,
            clock: FrameClock::new(),
            wave_timer,
        }
    }

    /// Spawn the first wave and arm the wave timer
    pub fn start(&mut self, now_ms: f64) {
        log::info!(
            "Starting session (seed {}, {}x{})",
            self.state.seed,
            self.state.surface.width,
            self.state.surface.height
        );
        self.spawn_wave();
        self.wave_timer.start(now_ms);
    }

    /// Handle a key press by its DOM name. Returns whether the key is bound.
    pub fn key_down(&mut self, name: &str) -> bool {
        let Some(key) = Key::from_name(name) else {
            return false;
        };
        if !self.keys.set(key, true) {
            match key {
                Key::Fire => self.state.fire(),
                Key::Debug => {
                    self.settings.toggle_debug();
                }
                Key::Autopilot => self.toggle_autopilot(),
                _ => {}
            }
        }
        true
    }

    pub fn key_up(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.keys.set(key, false);
                true
            }
            None => false,
        }
    }

    pub fn toggle_autopilot(&mut self) {
        self.autopilot = match self.autopilot {
            Some(_) => None,
            None => Some(Autopilot::default()),
        };
        log::info!("Autopilot: {}", self.autopilot.is_some());
    }

    pub fn autopilot_enabled(&self) -> bool {
        self.autopilot.is_some()
    }

    /// One host frame: measure delta, step the world, draw it
    pub fn frame<C: Canvas + ?Sized>(&mut self, now_ms: f64, canvas: &mut C) {
        let dt = self.clock.tick(now_ms);

        let keys = match self.autopilot.as_mut() {
            Some(pilot) => {
                let input = pilot.steer(&self.state);
                if input.fire {
                    self.state.fire();
                }
                input.keys
            }
            None => self.keys,
        };
        tick(&mut self.state, &keys, dt);

        draw_frame(canvas, &self.state, &self.settings, &self.clock.stats());
    }

    /// Spawn every wave whose interval has elapsed by `now_ms`. The native
    /// runner polls this on its synthetic clock; the browser build spawns
    /// from a DOM interval and never calls it.
    pub fn poll_waves(&mut self, now_ms: f64) -> u32 {
        let due = self.wave_timer.poll(now_ms);
        for _ in 0..due {
            self.spawn_wave();
        }
        due
    }

    pub fn spawn_wave(&mut self) -> Option<WaveReport> {
        spawn_wave(&mut self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.state.seed,
            phase: self.state.phase(),
            kills: self.state.kills,
            waves: self.state.waves,
            ticks: self.state.time_ticks,
            entities: self.state.entities().count(),
            stats: self.clock.stats(),
        }
    }
}
