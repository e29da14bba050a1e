//! Nebula Strike - A single-screen arcade shoot-'em-up
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `renderer`: Canvas 2D drawing behind a `Painter` capability
//! - `audio`: Procedural Web Audio sound effects
//! - `platform`: Browser/native platform abstraction (input, errors)
//! - `persistence`: Key-value storage (LocalStorage on web)

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Logical canvas size
    pub const CANVAS_WIDTH: f32 = 1200.0;
    pub const CANVAS_HEIGHT: f32 = 800.0;
    /// Boss zone boundary (purple enemies patrol above this line)
    pub const MIDLINE_Y: f32 = CANVAS_HEIGHT / 2.0;

    /// Nominal tick rate; the driver runs on a repeating timer, not frame deltas
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Interval handed to `setInterval` (1000 / 60, truncated as browsers do)
    pub const TICK_INTERVAL_MS: i32 = 16;

    /// Player ship
    pub const PLAYER_SIZE: f32 = 35.0;
    pub const PLAYER_SPEED: f32 = 6.0;
    pub const PLAYER_MAX_HEALTH: u32 = 10;
    /// Gap between the ship and the bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;

    /// Bullets
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 12.0;
    pub const PLAYER_BULLET_SPEED: f32 = 8.0;
    pub const ENEMY_BULLET_SPEED: f32 = 3.0;
    /// Ticks between player volleys (halved by double fire rate)
    pub const AUTO_FIRE_INTERVAL: u32 = 30;

    /// Combo resets after this many ticks without a kill
    pub const COMBO_TIMEOUT_TICKS: u32 = 180;
    /// Kills per multiplier step, and the multiplier cap
    pub const COMBO_STEP: u32 = 10;
    pub const MAX_MULTIPLIER: u32 = 5;

    /// Power-ups last 10 seconds
    pub const POWER_UP_DURATION_TICKS: u32 = 600;

    /// Spawner cadence
    pub const ENEMY_SPAWN_INTERVAL: u32 = 120;
    pub const HEALTH_PICKUP_WINDOW: u32 = 60;
    pub const HEALTH_PICKUP_CHANCE: f32 = 0.04;
    pub const POWER_UP_SPAWN_INTERVAL: u32 = 900;
    /// Red spawns per orange, orange spawns per purple
    pub const REDS_PER_ORANGE: u32 = 15;
    pub const ORANGES_PER_PURPLE: u32 = 5;

    /// Pickups
    pub const HEALTH_PICKUP_SIZE: f32 = 25.0;
    pub const HEALTH_PICKUP_HEAL: u32 = 2;
    pub const POWER_UP_SIZE: f32 = 28.0;
    pub const PICKUP_FALL_SPEED: f32 = 2.0;

    /// Global slow factor while time-slow is active
    pub const TIME_SLOW_FACTOR: f32 = 0.5;

    /// Boss patrol re-roll period and flip chance
    pub const BOSS_MOVE_PERIOD: u32 = 120;
    pub const BOSS_FLIP_CHANCE: f32 = 0.3;
}

/// Multiplier applied to kill scores for a given combo count
#[inline]
pub fn combo_multiplier(combo: u32) -> u32 {
    (combo / consts::COMBO_STEP + 1).min(consts::MAX_MULTIPLIER)
}
