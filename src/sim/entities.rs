//! Entity kinds and their per-tick update rules

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::collides;
use super::geometry::{Body, Bounded, Offsets};
use super::input::KeyState;
use super::powerup::{PowerUpComponent, PowerUpKind};
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{Surface, heading};

/// Velocity component after hitting a wall: amplified while below the cap,
/// plain reflection once at or above it.
#[inline]
pub fn bounce_velocity(v: f32, cap: f32, gain: f32) -> f32 {
    if v.abs() < cap { v * -gain } else { -v }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub sides: u32,
    pub radius: f32,
    pub rotation: f32,
    pub power_ups: PowerUpComponent,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        let radius = tuning.player_radius();
        Self {
            body: Body::new(pos, Offsets::polygon(PLAYER_SIDES, radius, 0.0)),
            sides: PLAYER_SIDES,
            radius,
            rotation: 0.0,
            power_ups: PowerUpComponent::new(tuning.speed_multiplier),
        }
    }

    /// Spawn point: horizontally centered, five sixths down
    pub fn spawn_point(surface: &Surface) -> Vec2 {
        Vec2::new(surface.width / 2.0, surface.height * 5.0 / 6.0)
    }

    /// Movement speed through the speed effect
    pub fn speed(&self, tuning: &Tuning) -> f32 {
        self.power_ups.speed.apply(tuning.player_velocity)
    }

    /// Fire from the ship's nose
    pub fn fire(&self, tuning: &Tuning, out: &mut Vec<Projectile>) {
        // Just above the ship's box. A ship climbing faster than its decaying
        // shot still catches it, and the player check kills both.
        let nose = Vec2::new(
            self.body.pos.x,
            self.body.pos.y - self.body.offsets.top - PROJECTILE_HEIGHT / 2.0 - 1.0,
        );
        self.power_ups
            .fire(nose, tuning.player_size / 2.0, tuning.projectile_velocity, out);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        dt: f32,
        keys: &KeyState,
        surface: &Surface,
        tuning: &Tuning,
        projectiles: &mut [Projectile],
        enemies: &[Enemy],
        meteorites: &[Meteorite],
        power_ups: &mut [PowerUp],
    ) {
        for projectile in projectiles.iter_mut().filter(|p| p.is_alive()) {
            if collides(&*self, &*projectile) {
                projectile.body.kill();
                self.body.kill();
            }
        }
        if enemies.iter().any(|e| e.is_alive() && collides(&*self, e)) {
            self.body.kill();
        }
        if meteorites.iter().any(|m| m.is_alive() && collides(&*self, m)) {
            self.body.kill();
        }
        for power_up in power_ups.iter_mut().filter(|p| p.is_alive()) {
            if collides(&*self, &*power_up) {
                log::debug!("Collected {:?} for {}s", power_up.kind, power_up.duration);
                self.power_ups.activate(power_up.kind, power_up.duration);
                power_up.body.kill();
            }
        }
        if !self.body.alive {
            return;
        }

        self.power_ups.update(dt);
        self.body.offsets = Offsets::polygon(self.sides, self.radius, self.rotation);

        let step = self.speed(tuning) * dt;
        let offsets = self.body.offsets;
        let pos = &mut self.body.pos;

        match keys.vertical() {
            -1 if pos.y - step - offsets.top >= 0.0 => pos.y -= step,
            1 if pos.y + step + offsets.bottom <= surface.height => pos.y += step,
            _ => {}
        }
        match keys.horizontal() {
            -1 if pos.x - step - offsets.left >= 0.0 => pos.x -= step,
            1 if pos.x + step + offsets.right <= surface.width => pos.x += step,
            _ => {}
        }
    }
}

impl Bounded for Player {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// A bouncing polygon that points where it travels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    pub vel: Vec2,
    pub sides: u32,
    pub radius: f32,
    pub rotation: f32,
}

impl Enemy {
    /// Enemies on the left half start moving left, the rest right; all
    /// start moving down.
    pub fn new(pos: Vec2, surface: &Surface, tuning: &Tuning) -> Self {
        let vx = if pos.x < surface.width / 2.0 {
            -tuning.enemy_velocity_x
        } else {
            tuning.enemy_velocity_x
        };
        Self::with_velocity(pos, Vec2::new(vx, tuning.enemy_velocity_y), tuning)
    }

    pub fn with_velocity(pos: Vec2, vel: Vec2, tuning: &Tuning) -> Self {
        let radius = tuning.enemy_radius();
        let rotation = heading(vel.x, vel.y);
        Self {
            body: Body::new(pos, Offsets::polygon(tuning.enemy_sides, radius, rotation)),
            vel,
            sides: tuning.enemy_sides,
            radius,
            rotation,
        }
    }

    pub fn update(
        &mut self,
        dt: f32,
        surface: &Surface,
        tuning: &Tuning,
        projectiles: &mut [Projectile],
        meteorites: &[Meteorite],
    ) {
        if let Some(projectile) = projectiles
            .iter_mut()
            .find(|p| p.is_alive() && collides(&*self, &**p))
        {
            projectile.body.kill();
            self.body.kill();
        }
        if meteorites.iter().any(|m| m.is_alive() && collides(&*self, m)) {
            self.body.kill();
        }
        if !self.body.alive {
            return;
        }

        let (cap, gain) = (tuning.max_velocity, tuning.enemy_bounce_gain);
        let body = &mut self.body;
        let hit_x = if self.vel.x < 0.0 {
            body.pos.x - body.offsets.left < 0.0
        } else {
            body.pos.x + body.offsets.right > surface.width
        };
        if hit_x {
            self.vel.x = bounce_velocity(self.vel.x, cap, gain);
        }
        let hit_y = if self.vel.y < 0.0 {
            body.pos.y - body.offsets.top < 0.0
        } else {
            body.pos.y + body.offsets.bottom > surface.height
        };
        if hit_y {
            self.vel.y = bounce_velocity(self.vel.y, cap, gain);
        }

        body.pos += self.vel * dt;

        // Offsets only change when the heading does
        let rotation = heading(self.vel.x, self.vel.y);
        if rotation != self.rotation {
            self.rotation = rotation;
            body.offsets = Offsets::polygon(self.sides, self.radius, rotation);
        }
    }
}

impl Bounded for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// An indestructible spinning rock crossing the screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meteorite {
    pub body: Body,
    pub vel: Vec2,
    pub sides: u32,
    pub radius: f32,
    pub rotation: f32,
    pub spin: f32,
}

impl Meteorite {
    pub fn new(pos: Vec2, vel: Vec2, tuning: &Tuning) -> Self {
        let radius = tuning.meteorite_radius();
        Self {
            body: Body::new(pos, Offsets::polygon(tuning.meteorite_sides, radius, 0.0)),
            vel,
            sides: tuning.meteorite_sides,
            radius,
            rotation: 0.0,
            spin: tuning.meteorite_spin,
        }
    }

    pub fn update(&mut self, dt: f32, surface: &Surface, projectiles: &mut [Projectile]) {
        self.rotation += self.spin;
        self.body.offsets = Offsets::polygon(self.sides, self.radius, self.rotation);

        for projectile in projectiles.iter_mut().filter(|p| p.is_alive()) {
            if collides(&*self, &*projectile) {
                projectile.body.kill();
            }
        }

        self.body.pos += self.vel * dt;
        if self.has_left(surface) {
            self.body.kill();
        }
    }

    /// Fully outside the surface on the side it is heading toward
    pub fn has_left(&self, surface: &Surface) -> bool {
        let Body { pos, offsets, .. } = &self.body;
        (self.vel.x < 0.0 && pos.x + offsets.right < 0.0)
            || (self.vel.x > 0.0 && pos.x - offsets.left > surface.width)
            || (self.vel.y < 0.0 && pos.y + offsets.bottom < 0.0)
            || (self.vel.y > 0.0 && pos.y - offsets.top > surface.height)
    }
}

impl Bounded for Meteorite {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// A shot travelling up the screen and slowing down
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    /// Upward speed, pixels/s
    pub velocity: f32,
    /// Total distance covered so far
    pub traveled: f32,
}

impl Projectile {
    pub fn new(pos: Vec2, velocity: f32) -> Self {
        Self {
            body: Body::new(pos, Offsets::rect(PROJECTILE_WIDTH, PROJECTILE_HEIGHT)),
            velocity,
            traveled: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32, surface: &Surface, decay: f32) {
        self.velocity *= decay;
        let step = self.velocity * dt;
        self.body.pos.y -= step;
        self.traveled += step;

        if self.traveled >= surface.height / 2.0 || self.body.pos.y + self.body.offsets.bottom < 0.0
        {
            self.body.kill();
        }
    }
}

impl Bounded for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// A collectible effect lying on the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub body: Body,
    pub kind: PowerUpKind,
    /// Seconds granted on pickup
    pub duration: f32,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind, duration: f32) -> Self {
        Self {
            body: Body::new(
                pos,
                Offsets::uniform(POWER_UP_RADIUS + POWER_UP_HITBOX_MARGIN),
            ),
            kind,
            duration,
        }
    }
}

impl Bounded for PowerUp {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// Borrowed view over any entity, for code that treats all kinds alike
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Enemy(&'a Enemy),
    Meteorite(&'a Meteorite),
    Projectile(&'a Projectile),
    PowerUp(&'a PowerUp),
}

impl EntityRef<'_> {
    pub fn body(&self) -> &Body {
        match self {
            EntityRef::Player(p) => &p.body,
            EntityRef::Enemy(e) => &e.body,
            EntityRef::Meteorite(m) => &m.body,
            EntityRef::Projectile(p) => &p.body,
            EntityRef::PowerUp(p) => &p.body,
        }
    }
}
