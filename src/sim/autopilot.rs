//! Idle/demo mode: a simple policy that plays the game
//!
//! The autopilot reads the world and produces the same inputs a player
//! would: held direction keys plus a fire request.

use glam::Vec2;

use super::geometry::Bounded;
use super::input::KeyState;
use super::state::GameState;
use crate::sim::entities::Player;

/// Horizontal distance below which the ship counts as lined up
const DEADBAND: f32 = 4.0;
/// Anything closer than this to the ship is dodged before aiming
const DANGER_RADIUS: f32 = 110.0;
/// Default fire cadence in ticks
const FIRE_EVERY: u64 = 12;

/// Inputs for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutopilotInput {
    pub keys: KeyState,
    pub fire: bool,
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    fire_every: u64,
    ticks: u64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(FIRE_EVERY)
    }
}

impl Autopilot {
    pub fn new(fire_every: u64) -> Self {
        Self {
            fire_every: fire_every.max(1),
            ticks: 0,
        }
    }

    /// Decide this tick's inputs
    pub fn steer(&mut self, state: &GameState) -> AutopilotInput {
        self.ticks += 1;
        let player = &state.player;
        if !player.is_alive() {
            return AutopilotInput::default();
        }
        let pos = player.body.pos;
        let mut keys = KeyState::default();

        // Hold the home row
        let home = Player::spawn_point(&state.surface).y;
        if pos.y < home - DEADBAND {
            keys.down = true;
        } else if pos.y > home + DEADBAND {
            keys.up = true;
        }

        let aim = if let Some(threat) = nearest_threat(state, pos) {
            // Sidestep away from it, toward the roomier side at the walls
            let away = if threat.x < pos.x { 1.0 } else { -1.0 };
            let room = if away > 0.0 {
                state.surface.width - pos.x
            } else {
                pos.x
            };
            let dir = if room < state.tuning.player_size {
                -away
            } else {
                away
            };
            Some(pos.x + dir * DANGER_RADIUS)
        } else {
            lowest_enemy(state).map(|e| e.x)
        };

        if let Some(x) = aim {
            if x < pos.x - DEADBAND {
                keys.left = true;
            } else if x > pos.x + DEADBAND {
                keys.right = true;
            }
        }

        let fire = self.ticks % self.fire_every == 0 && lowest_enemy(state).is_some();
        AutopilotInput { keys, fire }
    }
}

/// Closest live enemy or meteorite within the danger radius
fn nearest_threat(state: &GameState, pos: Vec2) -> Option<Vec2> {
    let enemies = state.enemies.iter().filter(|e| e.is_alive()).map(|e| e.pos());
    let meteorites = state
        .meteorites
        .iter()
        .filter(|m| m.is_alive())
        .map(|m| m.pos());
    enemies
        .chain(meteorites)
        .filter(|p| p.distance(pos) < DANGER_RADIUS)
        .min_by(|a, b| {
            a.distance(pos)
                .partial_cmp(&b.distance(pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// The on-screen enemy closest to the bottom
fn lowest_enemy(state: &GameState) -> Option<Vec2> {
    state
        .enemies
        .iter()
        .filter(|e| e.is_alive() && e.pos().y >= 0.0)
        .map(|e| e.pos())
        .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Surface;
    use crate::consts::FRAMERATE;
    use crate::sim::entities::{Enemy, Meteorite};
    use crate::sim::spawn::spawn_wave;
    use crate::sim::tick::tick;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(Surface::default(), Tuning::default(), 11)
    }

    #[test]
    fn test_idle_without_targets() {
        let state = state();
        let mut pilot = Autopilot::default();
        for _ in 0..FIRE_EVERY * 2 {
            let input = pilot.steer(&state);
            assert_eq!(input.keys, KeyState::default());
            assert!(!input.fire);
        }
    }

    #[test]
    fn test_lines_up_under_lowest_enemy() {
        let mut state = state();
        let surface = state.surface;
        let tuning = state.tuning.clone();
        state
            .enemies
            .push(Enemy::new(Vec2::new(100.0, 50.0), &surface, &tuning));
        state
            .enemies
            .push(Enemy::new(Vec2::new(650.0, 200.0), &surface, &tuning));

        let input = Autopilot::default().steer(&state);
        assert!(input.keys.right);
        assert!(!input.keys.left);
    }

    #[test]
    fn test_sidesteps_meteorite() {
        let mut state = state();
        let pos = state.player.body.pos;
        let tuning = state.tuning.clone();
        state.meteorites.push(Meteorite::new(
            pos + Vec2::new(-30.0, -60.0),
            Vec2::new(50.0, 80.0),
            &tuning,
        ));

        let input = Autopilot::default().steer(&state);
        assert!(input.keys.right);
    }

    #[test]
    fn test_returns_to_home_row() {
        let mut state = state();
        state.player.body.pos.y = 300.0;
        let input = Autopilot::default().steer(&state);
        assert!(input.keys.down);
    }

    #[test]
    fn test_fires_on_cadence() {
        let mut state = state();
        let surface = state.surface;
        let tuning = state.tuning.clone();
        state
            .enemies
            .push(Enemy::new(Vec2::new(400.0, 100.0), &surface, &tuning));

        let mut pilot = Autopilot::new(3);
        let fired: Vec<bool> = (0..6).map(|_| pilot.steer(&state).fire).collect();
        assert_eq!(fired, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_shoots_down_enemy_above() {
        let mut state = state();
        let tuning = state.tuning.clone();
        let above = state.player.body.pos - Vec2::new(0.0, 250.0);
        state
            .enemies
            .push(Enemy::with_velocity(above, Vec2::new(1.0, 0.0), &tuning));

        let mut pilot = Autopilot::default();
        let dt = 1.0 / FRAMERATE;
        for _ in 0..120 {
            let input = pilot.steer(&state);
            if input.fire {
                state.fire();
            }
            tick(&mut state, &input.keys, dt);
        }
        assert_eq!(state.kills, 1);
        assert!(state.enemies.is_empty());
        assert!(state.player.is_alive());
    }

    #[test]
    fn test_waves_play_out_the_same() {
        let run = || {
            let mut state = state();
            let mut pilot = Autopilot::default();
            let dt = 1.0 / FRAMERATE;
            for i in 0..1200 {
                if i % 300 == 0 {
                    spawn_wave(&mut state);
                }
                let input = pilot.steer(&state);
                if input.fire {
                    state.fire();
                }
                tick(&mut state, &input.keys, dt);
            }
            (state.kills, state.time_ticks, state.player.body.pos)
        };
        let first = run();
        assert_eq!(first, run());
        assert!(first.1 > 0);
    }
}
