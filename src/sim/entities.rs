//! Playfield entities: player, bullets, pickups, particles
//!
//! Plain data with per-tick kinematics. Drawing lives in `renderer`.

use glam::Vec2;
use rand::Rng;

use super::effects::PowerUpKind;
use super::rect::{Bounded, Rect};
use crate::consts::*;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const RED: Color = Color(0xff0000);
    pub const GREEN: Color = Color(0x00ff00);
    pub const CYAN: Color = Color(0x00ffff);

    /// CSS hex string, e.g. `#ff8800`
    pub fn css(&self) -> String {
        format!("#{:06x}", self.0 & 0xff_ffff)
    }

    /// CSS `rgba()` string with the given alpha
    pub fn rgba(&self, alpha: f32) -> String {
        let r = (self.0 >> 16) & 0xff;
        let g = (self.0 >> 8) & 0xff;
        let b = self.0 & 0xff;
        format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
    }
}

/// Who fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

/// A laser bolt
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    /// Per-axis velocity multipliers (scaled by the owner's speed)
    pub vel: Vec2,
    pub owner: BulletOwner,
}

impl Bullet {
    /// Player bolt travelling up, drifting sideways by `vx`
    pub fn player(x: f32, y: f32, vx: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, 1.0),
            owner: BulletOwner::Player,
        }
    }

    /// Enemy bolt travelling down, drifting sideways by `vx`
    pub fn enemy(x: f32, y: f32, vx: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, 1.0),
            owner: BulletOwner::Enemy,
        }
    }

    pub fn speed(&self) -> f32 {
        match self.owner {
            BulletOwner::Player => PLAYER_BULLET_SPEED,
            BulletOwner::Enemy => ENEMY_BULLET_SPEED,
        }
    }

    /// Advance one tick. Only enemy fire is affected by time-slow.
    pub fn update(&mut self, slow: f32) {
        let speed = self.speed();
        match self.owner {
            BulletOwner::Player => {
                self.pos.y -= speed * self.vel.y;
                self.pos.x += speed * self.vel.x;
            }
            BulletOwner::Enemy => {
                self.pos.y += speed * self.vel.y * slow;
                self.pos.x += speed * self.vel.x * slow;
            }
        }
    }

    /// Off the top (player) or bottom (enemy) of the canvas
    pub fn is_expired(&self) -> bool {
        match self.owner {
            BulletOwner::Player => self.pos.y <= 0.0,
            BulletOwner::Enemy => self.pos.y >= CANVAS_HEIGHT,
        }
    }
}

impl Bounded for Bullet {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BULLET_WIDTH, BULLET_HEIGHT)
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub health: u32,
    pub max_health: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Self::spawn_point(),
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
        }
    }
}

impl Player {
    /// Bottom-center of the canvas
    pub fn spawn_point() -> Vec2 {
        Vec2::new(
            CANVAS_WIDTH / 2.0 - PLAYER_SIZE / 2.0,
            CANVAS_HEIGHT - PLAYER_SIZE - PLAYER_BOTTOM_MARGIN,
        )
    }

    /// Health as a fraction of max
    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    /// Lose one point of health, never going below zero
    pub fn damage(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    /// Restore health up to the maximum; returns whether anything was healed
    pub fn heal(&mut self, amount: u32) -> bool {
        if self.health >= self.max_health {
            return false;
        }
        self.health = (self.health + amount).min(self.max_health);
        true
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Move according to held directions, staying inside the lower half
    pub fn steer(&mut self, left: bool, right: bool, up: bool, down: bool) {
        if left && self.pos.x > 0.0 {
            self.pos.x = (self.pos.x - PLAYER_SPEED).max(0.0);
        }
        if right && self.pos.x < CANVAS_WIDTH - PLAYER_SIZE {
            self.pos.x = (self.pos.x + PLAYER_SPEED).min(CANVAS_WIDTH - PLAYER_SIZE);
        }
        if up && self.pos.y > MIDLINE_Y {
            self.pos.y -= PLAYER_SPEED;
        }
        if down && self.pos.y < CANVAS_HEIGHT - PLAYER_SIZE - PLAYER_BOTTOM_MARGIN {
            self.pos.y += PLAYER_SPEED;
        }
    }

    /// X coordinate a centered bolt leaves from
    pub fn muzzle_x(&self) -> f32 {
        self.pos.x + PLAYER_SIZE / 2.0 - BULLET_WIDTH / 2.0
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_SIZE, PLAYER_SIZE)
    }
}

/// A falling health cross
#[derive(Debug, Clone)]
pub struct HealthPickup {
    pub pos: Vec2,
    pub rotation: f32,
    pub pulse: f32,
}

impl HealthPickup {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            rotation: 0.0,
            pulse: 0.0,
        }
    }

    pub fn update(&mut self, slow: f32) {
        self.pos.y += PICKUP_FALL_SPEED * slow;
        self.rotation += 0.05;
        self.pulse += 0.1;
    }

    pub fn is_expired(&self) -> bool {
        self.pos.y >= CANVAS_HEIGHT
    }
}

impl Bounded for HealthPickup {
    fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x,
            self.pos.y,
            HEALTH_PICKUP_SIZE,
            HEALTH_PICKUP_SIZE,
        )
    }
}

/// A falling power-up capsule
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub rotation: f32,
    pub pulse: f32,
}

impl PowerUp {
    pub fn new(x: f32, y: f32, kind: PowerUpKind) -> Self {
        Self {
            pos: Vec2::new(x, y),
            kind,
            rotation: 0.0,
            pulse: 0.0,
        }
    }

    /// Power-ups ignore time-slow
    pub fn update(&mut self) {
        self.pos.y += PICKUP_FALL_SPEED;
        self.rotation += 0.08;
        self.pulse += 0.12;
    }

    pub fn is_expired(&self) -> bool {
        self.pos.y >= CANVAS_HEIGHT
    }
}

impl Bounded for PowerUp {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, POWER_UP_SIZE, POWER_UP_SIZE)
    }
}

/// A cosmetic explosion spark
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// 1.0 at birth, removed at or below zero
    pub life: f32,
    pub decay: f32,
    pub color: Color,
}

impl Particle {
    pub fn new<R: Rng>(rng: &mut R, pos: Vec2, color: Color) -> Self {
        Self {
            pos,
            vel: Vec2::new(
                (rng.random::<f32>() - 0.5) * 6.0,
                (rng.random::<f32>() - 0.5) * 6.0,
            ),
            size: rng.random::<f32>() * 3.0 + 1.0,
            life: 1.0,
            decay: rng.random::<f32>() * 0.02 + 0.01,
            color,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= self.decay;
        self.vel *= 0.98;
    }

    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }
}
