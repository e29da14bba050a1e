//! Frame-counted spawning of enemies, health pickups and power-ups
//!
//! Every `ENEMY_SPAWN_INTERVAL` ticks one enemy appears. Orange mini-bosses
//! are gated on the red spawn count and purple bosses on the orange count:
//! each positive multiple triggers at most once.

use rand::Rng;

use super::effects::PowerUpKind;
use super::enemy::{Enemy, EnemyKind};
use super::entities::{HealthPickup, PowerUp};
use crate::consts::*;

/// Spawn timers and escalation counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spawner {
    /// Ticks since the last enemy spawn
    pub spawn_timer: u32,
    /// Ticks since the last power-up spawn
    pub power_up_timer: u32,
    /// Red enemies spawned this run
    pub red_count: u32,
    /// Orange enemies spawned this run
    pub orange_count: u32,
    /// Red count that last produced an orange
    last_orange_at: u32,
    /// Orange count that last produced a purple
    last_purple_at: u32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the next enemy variant and update the escalation counters
    pub fn next_enemy_kind(&mut self) -> EnemyKind {
        if self.orange_count > 0
            && self.orange_count.is_multiple_of(ORANGES_PER_PURPLE)
            && self.orange_count != self.last_purple_at
        {
            self.last_purple_at = self.orange_count;
            EnemyKind::Purple
        } else if self.red_count > 0
            && self.red_count.is_multiple_of(REDS_PER_ORANGE)
            && self.red_count != self.last_orange_at
        {
            self.orange_count += 1;
            self.last_orange_at = self.red_count;
            EnemyKind::Orange
        } else {
            self.red_count += 1;
            EnemyKind::Red
        }
    }

    /// Advance both timers by one tick and append anything that spawns
    pub fn step<R: Rng>(
        &mut self,
        rng: &mut R,
        enemies: &mut Vec<Enemy>,
        health_pickups: &mut Vec<HealthPickup>,
        power_ups: &mut Vec<PowerUp>,
    ) {
        self.spawn_timer += 1;
        self.power_up_timer += 1;

        if self.spawn_timer >= ENEMY_SPAWN_INTERVAL {
            self.spawn_timer = 0;
            let kind = self.next_enemy_kind();
            if kind == EnemyKind::Purple {
                log::debug!("Boss spawned (orange count {})", self.orange_count);
            }
            enemies.push(Enemy::spawn(kind, rng));
        }

        // At most one roll per 60-tick window
        if self.spawn_timer.is_multiple_of(HEALTH_PICKUP_WINDOW)
            && rng.random::<f32>() < HEALTH_PICKUP_CHANCE
        {
            let x = rng.random::<f32>() * (CANVAS_WIDTH - HEALTH_PICKUP_SIZE);
            health_pickups.push(HealthPickup::new(x, -HEALTH_PICKUP_SIZE));
        }

        if self.power_up_timer >= POWER_UP_SPAWN_INTERVAL {
            self.power_up_timer = 0;
            let kind = PowerUpKind::from_roll(rng.random::<f32>());
            let x = rng.random::<f32>() * (CANVAS_WIDTH - POWER_UP_SIZE);
            power_ups.push(PowerUp::new(x, -POWER_UP_SIZE, kind));
        }
    }
}
