//! Game state and core simulation types
//!
//! Everything a run needs lives in one `GameState` owned by the loop driver.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::effects::{ActiveEffects, PowerUpKind};
use super::enemy::{Enemy, EnemyKind};
use super::entities::{Bullet, Color, HealthPickup, Particle, Player, PowerUp};
use super::spawner::Spawner;
use crate::combo_multiplier;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended
    GameOver,
}

/// Things that happened during a tick, for audio, persistence and the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player volley fired
    Shot,
    /// Enemy took a hit but survived
    EnemyHit(EnemyKind),
    /// Enemy destroyed, awarding `points`
    EnemyDestroyed { kind: EnemyKind, points: u64 },
    /// Player lost health
    PlayerDamaged,
    /// Health pickup restored health
    Healed,
    /// Power-up collected
    PowerUpCollected(PowerUpKind),
    /// Shared power-up countdown ran out
    PowerUpsExpired,
    /// Score changed to the given value
    ScoreChanged(u64),
    /// Run finished; emitted exactly once per run
    GameOver { score: u64, new_high_score: bool },
    /// Run beat the stored high score; persist the new value
    HighScoreBeaten(u64),
    /// Pause toggled (true = now paused)
    PauseToggled(bool),
    /// Fresh run started
    Restarted,
}

/// Default particle cap when no settings are applied
pub const MAX_PARTICLES: usize = 2000;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay RNG (seeded)
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter (playing ticks only)
    pub time_ticks: u64,
    /// Score
    pub score: u64,
    /// Best score across runs (loaded from storage by the driver)
    pub high_score: u64,
    /// Whether this run set a new high score (valid once game over)
    pub new_high_score: bool,
    /// Consecutive kills
    pub combo: u32,
    /// Ticks since the last kill
    pub combo_timer: u32,
    /// Player ship
    pub player: Player,
    /// Active power-up effects
    pub effects: ActiveEffects,
    /// Ticks since the last volley
    pub auto_fire_timer: u32,
    /// Spawn timers and counters
    pub spawner: Spawner,
    /// Player bullets
    pub bullets: Vec<Bullet>,
    /// Enemy bullets
    pub enemy_bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub health_pickups: Vec<HealthPickup>,
    pub power_ups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Oldest particles are dropped beyond this
    pub max_particles: usize,
    /// Events produced since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and stored high score
    pub fn new(seed: u64, high_score: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            time_ticks: 0,
            score: 0,
            high_score,
            new_high_score: false,
            combo: 0,
            combo_timer: 0,
            player: Player::default(),
            effects: ActiveEffects::default(),
            auto_fire_timer: 0,
            spawner: Spawner::new(),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: Vec::new(),
            health_pickups: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            max_particles: MAX_PARTICLES,
            events: Vec::new(),
        }
    }

    /// Reset every run scalar and clear all entities.
    ///
    /// The high score, RNG stream and particle cap carry over.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.score = 0;
        self.new_high_score = false;
        self.combo = 0;
        self.combo_timer = 0;
        self.player = Player::default();
        self.effects = ActiveEffects::default();
        self.auto_fire_timer = 0;
        self.spawner = Spawner::new();
        self.bullets.clear();
        self.enemy_bullets.clear();
        self.enemies.clear();
        self.health_pickups.clear();
        self.power_ups.clear();
        self.particles.clear();
        self.emit(GameEvent::Restarted);
        self.emit(GameEvent::ScoreChanged(0));
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain pending events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at pending events without draining
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Spawn a burst of particles around `center`
    pub fn explode(&mut self, center: Vec2, color: Color, count: usize) {
        if self.max_particles == 0 {
            return;
        }
        // Make room up front, oldest first. A burst larger than the cap keeps
        // only its newest particles but still draws every one from the RNG.
        let overflow = (self.particles.len() + count).saturating_sub(self.max_particles);
        let dropped_old = overflow.min(self.particles.len());
        self.particles.drain(..dropped_old);
        let skipped_new = overflow - dropped_old;

        for i in 0..count {
            let particle = Particle::new(&mut self.rng, center, color);
            if i >= skipped_new {
                self.particles.push(particle);
            }
        }
    }

    /// Change the particle cap, trimming the oldest particles if needed
    pub fn set_particle_cap(&mut self, cap: usize) {
        self.max_particles = cap;
        let excess = self.particles.len().saturating_sub(cap);
        self.particles.drain(..excess);
    }

    /// Credit a kill: bump the combo, then score with the new multiplier
    pub fn register_kill(&mut self, kind: EnemyKind) -> u64 {
        self.combo += 1;
        self.combo_timer = 0;
        let points = (kind.score_value() * combo_multiplier(self.combo)) as u64;
        self.score += points;
        self.emit(GameEvent::ScoreChanged(self.score));
        points
    }

    pub fn reset_combo(&mut self) {
        self.combo = 0;
    }

    /// Current score multiplier
    pub fn multiplier(&self) -> u32 {
        combo_multiplier(self.combo)
    }

    /// Advance the combo decay timer
    pub fn update_combo(&mut self) {
        if self.combo > 0 {
            self.combo_timer += 1;
            if self.combo_timer >= COMBO_TIMEOUT_TICKS {
                self.reset_combo();
            }
        }
    }

    /// Finish the run. Only the first call has any effect.
    pub fn end_run(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.player.health = 0;
        self.new_high_score = self.score > self.high_score;
        if self.new_high_score {
            self.high_score = self.score;
            self.emit(GameEvent::HighScoreBeaten(self.score));
        }
        log::info!(
            "Game over: score {} (best {}){}",
            self.score,
            self.high_score,
            if self.new_high_score { " - new high score!" } else { "" }
        );
        self.emit(GameEvent::GameOver {
            score: self.score,
            new_high_score: self.new_high_score,
        });
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(1, 42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.health, 10);
        assert_eq!(state.effects.fire_mode, 1);
        assert_eq!(state.high_score, 42);
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_register_kill_uses_incremented_combo() {
        let mut state = GameState::new(1, 0);
        state.combo = 9;
        // Tenth kill lands in the x2 band
        assert_eq!(state.register_kill(EnemyKind::Orange), 20);
        assert_eq!(state.combo, 10);
        assert_eq!(state.score, 20);

        state.combo = 100;
        assert_eq!(state.register_kill(EnemyKind::Purple), 100);
    }

    #[test]
    fn test_combo_decays_after_timeout() {
        let mut state = GameState::new(1, 0);
        state.register_kill(EnemyKind::Red);
        for _ in 0..COMBO_TIMEOUT_TICKS - 1 {
            state.update_combo();
        }
        assert_eq!(state.combo, 1);
        state.update_combo();
        assert_eq!(state.combo, 0);
    }

    #[test]
    fn test_end_run_once() {
        let mut state = GameState::new(1, 5);
        state.score = 12;
        state.end_run();
        state.end_run();
        let events = state.take_events();
        let overs = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        let saves = events
            .iter()
            .filter(|e| matches!(e, GameEvent::HighScoreBeaten(_)))
            .count();
        assert_eq!(overs, 1);
        assert_eq!(saves, 1);
        assert_eq!(state.high_score, 12);
        assert!(state.new_high_score);
    }

    #[test]
    fn test_end_run_without_record() {
        let mut state = GameState::new(1, 50);
        state.score = 50;
        state.end_run();
        assert!(!state.new_high_score);
        assert_eq!(state.high_score, 50);
        assert!(!state
            .take_events()
            .iter()
            .any(|e| matches!(e, GameEvent::HighScoreBeaten(_))));
    }

    #[test]
    fn test_restart_keeps_high_score() {
        let mut state = GameState::new(3, 0);
        state.score = 99;
        state.combo = 7;
        state.effects.fire_mode = 5;
        state.combo_timer = 40;
        state.auto_fire_timer = 12;
        state.time_ticks = 5000;
        state.enemies.push(Enemy::spawn(EnemyKind::Red, &mut state.rng.clone()));
        state.bullets.push(Bullet::player(100.0, 500.0, 0.0));
        state.enemy_bullets.push(Bullet::enemy(100.0, 100.0, 0.5));
        state.health_pickups.push(HealthPickup::new(50.0, 50.0));
        state
            .power_ups
            .push(PowerUp::new(80.0, 80.0, PowerUpKind::ALL[0]));
        state.explode(Vec2::ZERO, Color::WHITE, 10);
        state.end_run();
        state.restart();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.combo, 0);
        assert_eq!(state.high_score, 99);
        assert_eq!(state.player.health, PLAYER_MAX_HEALTH);
        assert_eq!(state.effects, ActiveEffects::default());
        assert_eq!(state.spawner, Spawner::new());
        assert_eq!(state.combo_timer, 0);
        assert_eq!(state.auto_fire_timer, 0);
        assert_eq!(state.time_ticks, 0);
        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
        assert!(state.enemy_bullets.is_empty());
        assert!(state.health_pickups.is_empty());
        assert!(state.power_ups.is_empty());
        assert!(state.particles.is_empty());
        assert!(!state.new_high_score);
    }

    #[test]
    fn test_particle_cap_drops_oldest() {
        let mut state = GameState::new(1, 0);
        state.max_particles = 10;
        state.explode(Vec2::ZERO, Color::RED, 8);
        state.explode(Vec2::ONE, Color::GREEN, 8);
        assert_eq!(state.particles.len(), 10);
        assert_eq!(state.particles[9].color, Color::GREEN);
        assert_eq!(state.particles[0].color, Color::RED);

        state.max_particles = 0;
        state.particles.clear();
        state.explode(Vec2::ZERO, Color::RED, 8);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_burst_larger_than_cap_keeps_newest() {
        use rand::Rng;

        let mut capped = GameState::new(9, 0);
        capped.max_particles = 5;
        capped.explode(Vec2::ZERO, Color::RED, 3);
        capped.explode(Vec2::ONE, Color::CYAN, 12);

        let mut uncapped = GameState::new(9, 0);
        uncapped.explode(Vec2::ZERO, Color::RED, 3);
        uncapped.explode(Vec2::ONE, Color::CYAN, 12);

        assert_eq!(capped.particles.len(), 5);
        assert!(capped.particles.iter().all(|p| p.color == Color::CYAN));
        let newest: Vec<Vec2> = uncapped.particles[10..].iter().map(|p| p.vel).collect();
        let kept: Vec<Vec2> = capped.particles.iter().map(|p| p.vel).collect();
        assert_eq!(kept, newest);

        // The cap never changes how much randomness a burst consumes
        assert_eq!(capped.rng.random::<u32>(), uncapped.rng.random::<u32>());
    }

    #[test]
    fn test_lowering_particle_cap_trims_oldest() {
        let mut state = GameState::new(2, 0);
        state.explode(Vec2::ZERO, Color::RED, 6);
        state.explode(Vec2::ONE, Color::GREEN, 4);
        state.set_particle_cap(4);
        assert_eq!(state.max_particles, 4);
        assert_eq!(state.particles.len(), 4);
        assert!(state.particles.iter().all(|p| p.color == Color::GREEN));

        state.set_particle_cap(100);
        assert_eq!(state.particles.len(), 4);
    }
}
