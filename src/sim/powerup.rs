//! Power-up effects carried by the player
//!
//! Each effect is a countdown. Collecting an effect again while it is active
//! extends the countdown instead of restarting it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entities::Projectile;

/// The two collectible effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    SpeedUp,
    MultiShoot,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 2] = [PowerUpKind::SpeedUp, PowerUpKind::MultiShoot];

    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::SpeedUp => "Speed",
            PowerUpKind::MultiShoot => "Multi-shot",
        }
    }
}

/// Doubles movement and projectile speed while active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedPowerUp {
    multiplier: f32,
    timeout: f32,
    boost: f32,
}

impl SpeedPowerUp {
    pub fn new(boost: f32) -> Self {
        Self {
            multiplier: 1.0,
            timeout: 0.0,
            boost,
        }
    }

    pub fn activate(&mut self, duration: f32) {
        self.multiplier = self.boost;
        self.timeout += duration;
    }

    /// Scale a base speed by the current multiplier
    #[inline]
    pub fn apply(&self, base_speed: f32) -> f32 {
        base_speed * self.multiplier
    }

    pub fn update(&mut self, dt: f32) {
        if self.timeout <= 0.0 {
            return;
        }
        self.timeout -= dt;
        if self.timeout <= 0.0 {
            self.multiplier = 1.0;
            self.timeout = 0.0;
        }
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn timeout(&self) -> f32 {
        self.timeout
    }

    pub fn is_active(&self) -> bool {
        self.timeout > 0.0
    }
}

/// Fires a pair of projectiles instead of one while active
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiShootPowerUp {
    timeout: f32,
}

impl MultiShootPowerUp {
    pub fn activate(&mut self, duration: f32) {
        self.timeout += duration;
    }

    pub fn update(&mut self, dt: f32) {
        if self.timeout <= 0.0 {
            return;
        }
        self.timeout -= dt;
        if self.timeout <= 0.0 {
            self.timeout = 0.0;
        }
    }

    pub fn timeout(&self) -> f32 {
        self.timeout
    }

    pub fn is_active(&self) -> bool {
        self.timeout > 0.0
    }

    /// Spawn projectiles from `origin`. While active, two shots flank the
    /// origin at `spread` on each side; otherwise one goes straight up.
    pub fn shoot(&self, origin: Vec2, spread: f32, speed: f32, out: &mut Vec<Projectile>) {
        if self.is_active() {
            out.push(Projectile::new(origin - Vec2::new(spread, 0.0), speed));
            out.push(Projectile::new(origin + Vec2::new(spread, 0.0), speed));
        } else {
            out.push(Projectile::new(origin, speed));
        }
    }
}

/// All effects attached to the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUpComponent {
    pub speed: SpeedPowerUp,
    pub multi_shoot: MultiShootPowerUp,
}

impl PowerUpComponent {
    pub fn new(speed_boost: f32) -> Self {
        Self {
            speed: SpeedPowerUp::new(speed_boost),
            multi_shoot: MultiShootPowerUp::default(),
        }
    }

    pub fn activate(&mut self, kind: PowerUpKind, duration: f32) {
        match kind {
            PowerUpKind::SpeedUp => self.speed.activate(duration),
            PowerUpKind::MultiShoot => self.multi_shoot.activate(duration),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.speed.update(dt);
        self.multi_shoot.update(dt);
    }

    /// Fire at `base_speed`, composed through the speed effect
    pub fn fire(&self, origin: Vec2, spread: f32, base_speed: f32, out: &mut Vec<Projectile>) {
        let speed = self.speed.apply(base_speed);
        self.multi_shoot.shoot(origin, spread, speed, out);
    }

    /// Remaining time of every active effect, for the HUD
    pub fn active(&self) -> impl Iterator<Item = (PowerUpKind, f32)> + '_ {
        [
            (PowerUpKind::SpeedUp, self.speed.timeout()),
            (PowerUpKind::MultiShoot, self.multi_shoot.timeout()),
        ]
        .into_iter()
        .filter(|(_, t)| *t > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SPEED_MULTIPLIER;

    #[test]
    fn test_speed_stacks_duration() {
        let mut speed = SpeedPowerUp::new(SPEED_MULTIPLIER);
        assert_eq!(speed.multiplier(), 1.0);
        assert_eq!(speed.apply(300.0), 300.0);

        speed.activate(10.0);
        speed.activate(5.0);
        assert!((speed.timeout() - 15.0).abs() < 1e-5);
        assert_eq!(speed.multiplier(), 2.0);
        assert_eq!(speed.apply(300.0), 600.0);

        speed.update(14.9);
        assert_eq!(speed.multiplier(), 2.0);
        speed.update(0.2);
        assert_eq!(speed.multiplier(), 1.0);
        assert_eq!(speed.timeout(), 0.0);
    }

    #[test]
    fn test_speed_extends_while_active() {
        let mut speed = SpeedPowerUp::new(SPEED_MULTIPLIER);
        speed.activate(10.0);
        speed.update(4.0);
        speed.activate(15.0);
        assert!((speed.timeout() - 21.0).abs() < 1e-4);
    }

    #[test]
    fn test_multi_shoot_fires_pair() {
        let mut component = PowerUpComponent::new(SPEED_MULTIPLIER);
        let origin = Vec2::new(100.0, 400.0);
        let mut shots = Vec::new();

        component.fire(origin, 25.0, 300.0, &mut shots);
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].body.pos, origin);

        component.activate(PowerUpKind::MultiShoot, 15.0);
        shots.clear();
        component.fire(origin, 25.0, 300.0, &mut shots);
        assert_eq!(shots.len(), 2);
        assert_eq!(shots[0].body.pos.x, 75.0);
        assert_eq!(shots[1].body.pos.x, 125.0);
    }

    #[test]
    fn test_projectile_speed_composes_with_speed_up() {
        let mut component = PowerUpComponent::new(SPEED_MULTIPLIER);
        component.activate(PowerUpKind::SpeedUp, 15.0);
        component.activate(PowerUpKind::MultiShoot, 15.0);

        let mut shots = Vec::new();
        component.fire(Vec2::ZERO, 25.0, 300.0, &mut shots);
        assert!(shots.iter().all(|p| p.velocity == 600.0));
    }

    #[test]
    fn test_effects_expire_independently() {
        let mut component = PowerUpComponent::new(SPEED_MULTIPLIER);
        component.activate(PowerUpKind::SpeedUp, 5.0);
        component.activate(PowerUpKind::MultiShoot, 10.0);
        component.update(6.0);

        let active: Vec<_> = component.active().map(|(kind, _)| kind).collect();
        assert_eq!(active, vec![PowerUpKind::MultiShoot]);
        assert!(!component.speed.is_active());
    }
}
