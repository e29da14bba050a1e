//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. The caller
//! supplies held keys and one-shot commands; everything else comes from the
//! seeded RNG inside `GameState`.

use super::collision::resolve_collisions;
use super::entities::{Bullet, Color, Player};
use super::rect::{Bounded, Rect};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Pause toggle (ignored once the run is over)
    pub pause: bool,
    /// Start a new run (only honoured at game over)
    pub restart: bool,
    /// Demo mode - a simple AI steers the ship
    pub autopilot: bool,
}

/// Horizontal drift of each bullet in spread volleys
const DIAGONAL_SPREAD: [f32; 3] = [-0.5, 0.0, 0.5];
const WIDE_SPREAD: [f32; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart && state.phase == GamePhase::GameOver {
        log::info!("Restarting run");
        state.restart();
    }

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.emit(GameEvent::PauseToggled(true));
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                state.emit(GameEvent::PauseToggled(false));
            }
            GamePhase::GameOver => {}
        }
    }

    // Overlays are drawn by the renderer; the world stays frozen
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    state.update_combo();
    if state.effects.advance() {
        let center = state.player.center();
        state.explode(center, Color::WHITE, 15);
        state.emit(GameEvent::PowerUpsExpired);
    }

    let (left, right, up, down) = if input.autopilot {
        autopilot(state)
    } else {
        (input.left, input.right, input.up, input.down)
    };
    state.player.steer(left, right, up, down);
    auto_fire(state);

    for particle in &mut state.particles {
        particle.update();
    }
    state.particles.retain(|p| !p.is_expired());

    state.spawner.step(
        &mut state.rng,
        &mut state.enemies,
        &mut state.health_pickups,
        &mut state.power_ups,
    );

    let slow = state.effects.slow_factor();

    for bullet in &mut state.bullets {
        bullet.update(slow);
    }
    state.bullets.retain(|b| !b.is_expired());

    for bullet in &mut state.enemy_bullets {
        bullet.update(slow);
    }
    state.enemy_bullets.retain(|b| !b.is_expired());

    for enemy in &mut state.enemies {
        enemy.update(slow, &mut state.rng, &mut state.enemy_bullets);
    }
    state.enemies.retain(|e| !e.is_expired());

    for pickup in &mut state.health_pickups {
        pickup.update(slow);
    }
    state.health_pickups.retain(|p| !p.is_expired());

    for power_up in &mut state.power_ups {
        power_up.update();
    }
    state.power_ups.retain(|p| !p.is_expired());

    resolve_collisions(state);
}

/// Fire a volley whenever the auto-fire timer reaches its interval
fn auto_fire(state: &mut GameState) {
    let interval = if state.effects.double_fire_rate() {
        AUTO_FIRE_INTERVAL / 2
    } else {
        AUTO_FIRE_INTERVAL
    };

    state.auto_fire_timer += 1;
    if state.auto_fire_timer >= interval {
        state.auto_fire_timer = 0;
        let volley = player_volley(&state.player, state.effects.fire_mode);
        state.bullets.extend(volley);
        state.emit(GameEvent::Shot);
    }
}

/// Bullets produced by one volley in the given fire mode
pub fn player_volley(player: &Player, fire_mode: u8) -> Vec<Bullet> {
    let x = player.pos.x;
    let y = player.pos.y;
    let center = player.muzzle_x();

    match fire_mode {
        2 => vec![
            Bullet::player(x + 8.0, y, 0.0),
            Bullet::player(x + PLAYER_SIZE - 12.0, y, 0.0),
        ],
        3 => vec![
            Bullet::player(x + 5.0, y, 0.0),
            Bullet::player(center, y, 0.0),
            Bullet::player(x + PLAYER_SIZE - 9.0, y, 0.0),
        ],
        4 => DIAGONAL_SPREAD
            .iter()
            .map(|&vx| Bullet::player(center, y, vx))
            .collect(),
        5 => WIDE_SPREAD
            .iter()
            .map(|&vx| Bullet::player(center, y, vx))
            .collect(),
        _ => vec![Bullet::player(center, y, 0.0)],
    }
}

/// Demo AI: dodge anything falling into the ship's lane, otherwise chase
/// pickups in the lower half, otherwise line up under the lowest enemy.
///
/// Returns held (left, right, up, down).
fn autopilot(state: &GameState) -> (bool, bool, bool, bool) {
    let me = state.player.bounds();
    let center = me.center();

    let lane = Rect::new(me.left() - 20.0, me.top() - 160.0, me.size.x + 40.0, 160.0 + me.size.y);
    let threat = state
        .enemy_bullets
        .iter()
        .map(|b| b.bounds())
        .chain(state.enemies.iter().map(|e| e.bounds()))
        .filter(|r| r.overlaps(&lane))
        .max_by(|a, b| a.bottom().total_cmp(&b.bottom()));

    if let Some(threat) = threat {
        // Step away from the threat unless a wall is in the way
        let mut go_left = threat.center().x >= center.x;
        if go_left && me.left() <= PLAYER_SPEED {
            go_left = false;
        } else if !go_left && me.right() >= CANVAS_WIDTH - PLAYER_SPEED {
            go_left = true;
        }
        return (go_left, !go_left, false, true);
    }

    let target = state
        .power_ups
        .iter()
        .map(|p| p.center())
        .chain(state.health_pickups.iter().map(|p| p.center()))
        .find(|c| c.y > MIDLINE_Y)
        .or_else(|| {
            state
                .enemies
                .iter()
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|e| e.center())
        });

    match target {
        Some(t) => (t.x < center.x - 4.0, t.x > center.x + 4.0, false, false),
        None => (false, false, false, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::effects::{PowerUpKind, UtilityKind, WeaponKind};
    use crate::sim::enemy::{Enemy, EnemyKind};
    use glam::Vec2;

    fn count_events(state: &mut GameState, pred: impl Fn(&GameEvent) -> bool) -> usize {
        state.take_events().iter().filter(|e| pred(e)).count()
    }

    #[test]
    fn test_first_volley_after_interval() {
        let mut state = GameState::new(12345, 0);
        let input = TickInput::default();
        for _ in 0..AUTO_FIRE_INTERVAL - 1 {
            tick(&mut state, &input);
        }
        assert!(state.bullets.is_empty());
        tick(&mut state, &input);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(count_events(&mut state, |e| *e == GameEvent::Shot), 1);
    }

    #[test]
    fn test_double_fire_rate() {
        let mut state = GameState::new(12345, 0);
        state
            .effects
            .activate(PowerUpKind::Utility(UtilityKind::DoubleSpeed));
        let input = TickInput::default();
        for _ in 0..AUTO_FIRE_INTERVAL {
            tick(&mut state, &input);
        }
        assert_eq!(count_events(&mut state, |e| *e == GameEvent::Shot), 2);
    }

    #[test]
    fn test_wide_spread_volley() {
        let player = Player::default();
        let volley = player_volley(&player, 5);
        assert_eq!(volley.len(), 5);
        let drifts: Vec<f32> = volley.iter().map(|b| b.vel.x).collect();
        assert_eq!(drifts, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        for b in &volley {
            assert_eq!(b.pos.x, player.pos.x + PLAYER_SIZE / 2.0 - 2.0);
            assert_eq!(b.pos.y, player.pos.y);
        }
    }

    #[test]
    fn test_volley_offsets() {
        let mut player = Player::default();
        player.pos = Vec2::new(100.0, 600.0);

        let xs = |mode| -> Vec<f32> {
            player_volley(&player, mode).iter().map(|b| b.pos.x).collect()
        };
        assert_eq!(xs(1), vec![115.5]);
        assert_eq!(xs(2), vec![108.0, 123.0]);
        assert_eq!(xs(3), vec![105.0, 115.5, 126.0]);
        assert_eq!(player_volley(&player, 4).len(), 3);
    }

    #[test]
    fn test_tick_pause() {
        let mut state = GameState::new(12345, 0);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);

        // Frozen while paused
        let frozen_ticks = state.time_ticks;
        for _ in 0..200 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.time_ticks, frozen_ticks);
        assert!(state.enemies.is_empty());

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Playing);
        let events = state.take_events();
        assert!(events.contains(&GameEvent::PauseToggled(true)));
        assert!(events.contains(&GameEvent::PauseToggled(false)));
    }

    #[test]
    fn test_pause_and_restart_gated_by_phase() {
        let mut state = GameState::new(7, 0);
        // Restart does nothing mid-run
        state.score = 40;
        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert_eq!(state.score, 40);

        // Pause does nothing at game over
        state.end_run();
        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 40);
    }

    #[test]
    fn test_power_ups_expire_with_burst() {
        let mut state = GameState::new(5, 0);
        state
            .effects
            .activate(PowerUpKind::Weapon(WeaponKind::TripleShot));
        state.effects.timer = POWER_UP_DURATION_TICKS - 1;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.effects.fire_mode, 1);
        assert!(state.events().contains(&GameEvent::PowerUpsExpired));
        assert_eq!(
            state
                .particles
                .iter()
                .filter(|p| p.color == Color::WHITE)
                .count(),
            15
        );
    }

    #[test]
    fn test_time_slow_halves_enemy_speed() {
        let mut state = GameState::new(5, 0);
        state
            .effects
            .activate(PowerUpKind::Utility(UtilityKind::TimeSlow));
        state
            .enemies
            .push(Enemy::new(EnemyKind::Red, Vec2::new(10.0, 0.0), 1.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.enemies[0].pos.y, 0.75);
    }

    #[test]
    fn test_game_over_exactly_once() {
        let mut state = GameState::new(1, 0);
        state.score = 10;
        let p = state.player.pos;
        state.player.health = 1;
        state
            .enemies
            .push(Enemy::new(EnemyKind::Red, p - Vec2::new(0.0, 1.0), 1.0));
        let mut overs = 0;
        for _ in 0..300 {
            tick(&mut state, &TickInput::default());
            overs += count_events(&mut state, |e| matches!(e, GameEvent::GameOver { .. }));
        }
        assert_eq!(overs, 1);
        assert_eq!(state.player.health, 0);
        assert!(state.new_high_score);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999, 0);
        let mut state2 = GameState::new(99999, 0);

        let inputs = [
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput {
                up: true,
                right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..3000 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.player.health, state2.player.health);
    }

    #[test]
    fn test_autopilot_scores() {
        let mut state = GameState::new(2024, 0);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..60 * 60 {
            tick(&mut state, &input);
            if state.is_game_over() {
                break;
            }
        }
        assert!(state.score > 0);
    }
}
