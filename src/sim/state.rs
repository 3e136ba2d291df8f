//! Game state and core simulation types
//!
//! [`GameState`] is the whole world: the player, every entity collection,
//! the counters, and the single random source.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::{Enemy, EntityRef, Meteorite, Player, PowerUp, Projectile};
use crate::Surface;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player destroyed; simulation frozen
    GameOver,
    /// Kill objective reached; simulation frozen
    Victory,
}

impl GamePhase {
    /// Whether the simulation advances in this phase
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Meteorite jitter and power-up placement
    pub rng: Pcg32,
    pub surface: Surface,
    pub tuning: Tuning,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub meteorites: Vec<Meteorite>,
    pub power_ups: Vec<PowerUp>,
    /// Enemies destroyed so far
    pub kills: u32,
    /// Waves spawned so far
    pub waves: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create an empty world with the player at its spawn point
    pub fn new(surface: Surface, tuning: Tuning, seed: u64) -> Self {
        let player = Player::new(Player::spawn_point(&surface), &tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            surface,
            tuning,
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            meteorites: Vec::new(),
            power_ups: Vec::new(),
            kills: 0,
            waves: 0,
            time_ticks: 0,
        }
    }

    /// Game over takes precedence over victory
    pub fn phase(&self) -> GamePhase {
        if !self.player.body.alive {
            GamePhase::GameOver
        } else if self.kills >= self.tuning.kill_objective {
            GamePhase::Victory
        } else {
            GamePhase::Playing
        }
    }

    /// Fire the player's weapon. Ignored once the game is frozen.
    pub fn fire(&mut self) {
        if !self.phase().is_running() {
            return;
        }
        self.player.fire(&self.tuning, &mut self.projectiles);
    }

    /// Player plus every collection entry, live or awaiting purge
    pub fn entity_count(&self) -> usize {
        1 + self.enemies.len() + self.projectiles.len() + self.meteorites.len() + self.power_ups.len()
    }

    /// Every live entity, in draw order
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        let player = self
            .player
            .body
            .alive
            .then_some(EntityRef::Player(&self.player));
        self.power_ups
            .iter()
            .map(EntityRef::PowerUp)
            .chain(self.meteorites.iter().map(EntityRef::Meteorite))
            .chain(self.enemies.iter().map(EntityRef::Enemy))
            .chain(self.projectiles.iter().map(EntityRef::Projectile))
            .chain(player)
            .filter(|e| e.body().alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_world() {
        let state = GameState::new(Surface::default(), Tuning::default(), 7);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.entity_count(), 1);
        assert_eq!(state.player.body.pos, Vec2::new(400.0, 500.0));
    }

    #[test]
    fn test_phase_precedence() {
        let mut state = GameState::new(Surface::default(), Tuning::default(), 7);
        state.kills = state.tuning.kill_objective;
        assert_eq!(state.phase(), GamePhase::Victory);

        state.player.body.kill();
        assert_eq!(state.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_fire_only_while_playing() {
        let mut state = GameState::new(Surface::default(), Tuning::default(), 7);
        state.fire();
        assert_eq!(state.projectiles.len(), 1);

        state.player.body.kill();
        state.fire();
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_entities_skip_dead() {
        let mut state = GameState::new(Surface::default(), Tuning::default(), 7);
        state.fire();
        state.fire();
        state.projectiles[0].body.kill();
        let kinds: Vec<_> = state.entities().collect();
        assert_eq!(kinds.len(), 2);
        assert!(matches!(kinds.last(), Some(EntityRef::Player(_))));
    }
}
