//! Enemy variants and their movement/firing behaviour
//!
//! Each variant carries fixed constants (size, health, score, colors, speeds,
//! shot pattern). Purple enemies are bosses: they descend to the midline and
//! then patrol the top half of the screen.

use glam::Vec2;
use rand::Rng;

use super::entities::{Bullet, Color};
use super::rect::{Bounded, Rect};
use crate::consts::*;

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Basic drone: one straight shot
    Red,
    /// Mini-boss: bounces sideways, 3-way spread
    Orange,
    /// Boss: patrols the top half, 5-way spread
    Purple,
}

/// Horizontal drift of each bullet in a volley
const SINGLE_SHOT: &[f32] = &[0.0];
const SPREAD_3: &[f32] = &[-0.5, 0.0, 0.5];
const SPREAD_5: &[f32] = &[-1.0, -0.5, 0.0, 0.5, 1.0];

impl EnemyKind {
    /// Square side length
    pub fn size(&self) -> f32 {
        match self {
            EnemyKind::Red => 30.0,
            EnemyKind::Orange => 60.0,
            EnemyKind::Purple => 90.0,
        }
    }

    pub fn max_health(&self) -> u32 {
        match self {
            EnemyKind::Red => 1,
            EnemyKind::Orange => 25,
            EnemyKind::Purple => 50,
        }
    }

    /// Base points per kill (before the combo multiplier)
    pub fn score_value(&self) -> u32 {
        match self {
            EnemyKind::Red => 1,
            EnemyKind::Orange => 10,
            EnemyKind::Purple => 20,
        }
    }

    /// Primary (glow/core) color
    pub fn color(&self) -> Color {
        match self {
            EnemyKind::Red => Color(0xff0000),
            EnemyKind::Orange => Color(0xff8800),
            EnemyKind::Purple => Color(0xaa00ff),
        }
    }

    /// Secondary (gradient) color
    pub fn color2(&self) -> Color {
        match self {
            EnemyKind::Red => Color(0xcc0000),
            EnemyKind::Orange => Color(0xff6600),
            EnemyKind::Purple => Color(0x8800cc),
        }
    }

    /// Downward speed
    pub fn speed(&self) -> f32 {
        match self {
            EnemyKind::Red => 1.5,
            EnemyKind::Orange => 1.0,
            EnemyKind::Purple => 0.9,
        }
    }

    /// Sideways speed (zero for straight divers)
    pub fn horizontal_speed(&self) -> f32 {
        match self {
            EnemyKind::Red => 0.0,
            EnemyKind::Orange => 1.3,
            EnemyKind::Purple => 1.6,
        }
    }

    /// Ticks between volleys
    pub fn shoot_interval(&self) -> f32 {
        match self {
            EnemyKind::Red | EnemyKind::Orange => 120.0,
            EnemyKind::Purple => 90.0,
        }
    }

    /// Horizontal multipliers of one volley
    pub fn shot_pattern(&self) -> &'static [f32] {
        match self {
            EnemyKind::Red => SINGLE_SHOT,
            EnemyKind::Orange => SPREAD_3,
            EnemyKind::Purple => SPREAD_5,
        }
    }

    /// Contact with the player ends the run outright
    pub fn is_lethal_on_contact(&self) -> bool {
        matches!(self, EnemyKind::Orange | EnemyKind::Purple)
    }

    /// Gets a health bar and the heavy hit sound
    pub fn is_boss_class(&self) -> bool {
        matches!(self, EnemyKind::Orange | EnemyKind::Purple)
    }
}

/// Movement state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyMotion {
    /// Falling toward the bottom (bosses stop at the midline)
    Descending,
    /// Boss roaming the top half
    Patrolling {
        /// Vertical direction (+1 down, -1 up)
        vertical_dir: f32,
        /// Ticks since the last random re-roll
        move_timer: u32,
    },
}

/// An enemy ship
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub health: u32,
    /// Horizontal direction (+1 right, -1 left)
    pub direction: f32,
    pub motion: EnemyMotion,
    /// Accumulates the slow factor each tick; fires at the interval
    pub shoot_timer: f32,
    /// Cosmetic glow phase
    pub pulse: f32,
}

impl Enemy {
    /// Spawn just above the top edge at a random column
    pub fn spawn<R: Rng>(kind: EnemyKind, rng: &mut R) -> Self {
        let size = kind.size();
        let x = rng.random::<f32>() * (CANVAS_WIDTH - size);
        let direction = if rng.random::<f32>() > 0.5 { 1.0 } else { -1.0 };
        Self::new(kind, Vec2::new(x, -size), direction)
    }

    pub fn new(kind: EnemyKind, pos: Vec2, direction: f32) -> Self {
        Self {
            kind,
            pos,
            health: kind.max_health(),
            direction,
            motion: EnemyMotion::Descending,
            shoot_timer: 0.0,
            pulse: 0.0,
        }
    }

    /// Lowest y a boss may occupy (its bottom edge on the midline)
    fn patrol_floor(&self) -> f32 {
        MIDLINE_Y - self.kind.size()
    }

    fn patrol_right(&self) -> f32 {
        CANVAS_WIDTH - self.kind.size()
    }

    /// Bounce off the side walls
    fn bounce_horizontal(&mut self) {
        let max_x = self.patrol_right();
        if self.pos.x <= 0.0 || self.pos.x >= max_x {
            self.direction = -self.direction;
            self.pos.x = self.pos.x.clamp(0.0, max_x);
        }
    }

    /// Advance movement and the fire timer by one tick.
    ///
    /// Bullets fired this tick are appended to `shots`.
    pub fn update<R: Rng>(&mut self, slow: f32, rng: &mut R, shots: &mut Vec<Bullet>) {
        self.pulse += 0.05;

        match self.motion {
            EnemyMotion::Descending => {
                self.pos.y += self.kind.speed() * slow;

                if self.kind == EnemyKind::Purple {
                    let floor = self.patrol_floor();
                    if self.pos.y >= floor {
                        self.pos.y = floor;
                        self.motion = EnemyMotion::Patrolling {
                            vertical_dir: 1.0,
                            move_timer: 0,
                        };
                    }
                } else if self.kind.horizontal_speed() > 0.0 {
                    self.pos.x += self.kind.horizontal_speed() * self.direction * slow;
                    self.bounce_horizontal();
                }
            }
            EnemyMotion::Patrolling {
                mut vertical_dir,
                mut move_timer,
            } => {
                self.pos.x += self.kind.horizontal_speed() * self.direction * slow;
                self.pos.y += self.kind.speed() * 0.5 * vertical_dir * slow;
                self.bounce_horizontal();

                let floor = self.patrol_floor();
                if self.pos.y <= 0.0 || self.pos.y >= floor {
                    vertical_dir = -vertical_dir;
                    self.pos.y = self.pos.y.clamp(0.0, floor);
                }

                move_timer += 1;
                if move_timer > BOSS_MOVE_PERIOD {
                    if rng.random::<f32>() < BOSS_FLIP_CHANCE {
                        self.direction = -self.direction;
                    }
                    if rng.random::<f32>() < BOSS_FLIP_CHANCE {
                        vertical_dir = -vertical_dir;
                    }
                    move_timer = 0;
                }

                self.motion = EnemyMotion::Patrolling {
                    vertical_dir,
                    move_timer,
                };
            }
        }

        self.shoot_timer += slow;
        if self.shoot_timer >= self.kind.shoot_interval() {
            self.fire(shots);
            self.shoot_timer = 0.0;
        }
    }

    /// Emit one volley from the bottom-center
    pub fn fire(&self, shots: &mut Vec<Bullet>) {
        let x = self.pos.x + self.kind.size() / 2.0 - BULLET_WIDTH / 2.0;
        let y = self.pos.y + self.kind.size();
        shots.extend(
            self.kind
                .shot_pattern()
                .iter()
                .map(|&vx| Bullet::enemy(x, y, vx)),
        );
    }

    /// Apply one point of damage. Returns true when destroyed.
    pub fn take_damage(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }

    /// Fell off the bottom of the canvas
    pub fn is_expired(&self) -> bool {
        self.pos.y >= CANVAS_HEIGHT
    }

    pub fn is_patrolling(&self) -> bool {
        matches!(self.motion, EnemyMotion::Patrolling { .. })
    }
}

impl Bounded for Enemy {
    fn bounds(&self) -> Rect {
        let size = self.kind.size();
        Rect::new(self.pos.x, self.pos.y, size, size)
    }
}
