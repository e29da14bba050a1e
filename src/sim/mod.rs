//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (entity lists are plain `Vec`s)
//! - No rendering or platform dependencies

pub mod collision;
pub mod effects;
pub mod enemy;
pub mod entities;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::resolve_collisions;
pub use effects::{ActiveEffects, PowerUpKind, UtilityKind, WeaponKind};
pub use enemy::{Enemy, EnemyKind, EnemyMotion};
pub use entities::{Bullet, BulletOwner, Color, HealthPickup, Particle, Player, PowerUp};
pub use rect::{Bounded, Rect};
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, GameState, MAX_PARTICLES};
pub use tick::{TickInput, player_volley, tick};
