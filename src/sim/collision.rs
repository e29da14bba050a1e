//! Collision detection and response
//!
//! One ordered pass per tick. Every test is a strict AABB overlap, and every
//! list is walked back to front so removals never skip an entry.
//!
//! Order:
//! 1. player bullets vs enemies
//! 2. enemy bullets vs player
//! 3. enemy bodies vs player
//! 4. player vs health pickups
//! 5. player vs power-ups

use super::entities::Color;
use super::rect::Bounded;
use super::state::{GameEvent, GameState};
use crate::consts::HEALTH_PICKUP_HEAL;

/// Run the full collision pass.
///
/// Stops early once the run ends so nothing else is credited on the
/// losing tick.
pub fn resolve_collisions(state: &mut GameState) {
    player_bullets_vs_enemies(state);
    enemy_bullets_vs_player(state);
    if state.is_game_over() {
        return;
    }
    enemies_vs_player(state);
    if state.is_game_over() {
        return;
    }
    collect_health_pickups(state);
    collect_power_ups(state);
}

/// Each bullet hits at most one enemy and is consumed
fn player_bullets_vs_enemies(state: &mut GameState) {
    for i in (0..state.bullets.len()).rev() {
        let bullet = &state.bullets[i];
        let Some(j) = state.enemies.iter().rposition(|e| e.overlaps(bullet)) else {
            continue;
        };
        state.bullets.remove(i);

        let kind = state.enemies[j].kind;
        let center = state.enemies[j].center();
        state.explode(center, kind.color(), 5);

        if state.enemies[j].take_damage() {
            state.enemies.remove(j);
            let points = state.register_kill(kind);
            state.explode(center, kind.color(), 30);
            state.emit(GameEvent::EnemyDestroyed { kind, points });
        } else {
            state.emit(GameEvent::EnemyHit(kind));
        }
    }
}

fn enemy_bullets_vs_player(state: &mut GameState) {
    for i in (0..state.enemy_bullets.len()).rev() {
        if !state.enemy_bullets[i].overlaps(&state.player) {
            continue;
        }
        state.enemy_bullets.remove(i);

        let center = state.player.center();
        if state.effects.immune() {
            state.explode(center, Color::CYAN, 8);
        } else {
            state.explode(center, Color::RED, 10);
            hurt_player(state);
            if state.is_game_over() {
                return;
            }
        }
    }
}

/// The enemy is always destroyed by the impact; it awards no points
fn enemies_vs_player(state: &mut GameState) {
    for i in (0..state.enemies.len()).rev() {
        if !state.enemies[i].overlaps(&state.player) {
            continue;
        }
        let enemy = state.enemies.remove(i);
        let enemy_center = enemy.center();
        let player_center = state.player.center();

        if state.effects.immune() {
            state.explode(enemy_center, Color::CYAN, 20);
        } else if enemy.kind.is_lethal_on_contact() {
            state.explode(enemy_center, enemy.kind.color(), 50);
            state.explode(player_center, Color::GREEN, 40);
            state.player.health = 0;
            state.end_run();
        } else {
            state.explode(enemy_center, enemy.kind.color(), 25);
            state.explode(player_center, Color::GREEN, 15);
            hurt_player(state);
        }

        if state.is_game_over() {
            return;
        }
    }
}

/// Pickups are consumed even at full health
fn collect_health_pickups(state: &mut GameState) {
    for i in (0..state.health_pickups.len()).rev() {
        if !state.health_pickups[i].overlaps(&state.player) {
            continue;
        }
        let pickup = state.health_pickups.remove(i);
        if state.player.heal(HEALTH_PICKUP_HEAL) {
            state.explode(pickup.center(), Color::GREEN, 15);
            state.emit(GameEvent::Healed);
        }
    }
}

fn collect_power_ups(state: &mut GameState) {
    for i in (0..state.power_ups.len()).rev() {
        if !state.power_ups[i].overlaps(&state.player) {
            continue;
        }
        let power_up = state.power_ups.remove(i);
        state.effects.activate(power_up.kind);
        state.explode(power_up.center(), power_up.kind.color(), 20);
        log::debug!("Power-up collected: {:?}", power_up.kind);
        state.emit(GameEvent::PowerUpCollected(power_up.kind));
    }
}

/// One point of damage: combo lost, run ends at zero health
fn hurt_player(state: &mut GameState) {
    state.player.damage();
    state.reset_combo();
    state.emit(GameEvent::PlayerDamaged);
    if state.player.is_dead() {
        state.end_run();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::effects::{PowerUpKind, UtilityKind, WeaponKind};
    use crate::sim::enemy::{Enemy, EnemyKind};
    use crate::sim::entities::{Bullet, HealthPickup, PowerUp};
    use crate::sim::state::GamePhase;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(9, 0)
    }

    /// Enemy sitting right on top of the player
    fn enemy_on_player(state: &GameState, kind: EnemyKind) -> Enemy {
        Enemy::new(kind, state.player.pos - Vec2::splat(5.0), 1.0)
    }

    fn count(events: &[GameEvent], pred: impl Fn(&GameEvent) -> bool) -> usize {
        events.iter().filter(|e| pred(e)).count()
    }

    #[test]
    fn test_bullet_hits_only_one_enemy() {
        let mut s = state();
        s.enemies.push(Enemy::new(EnemyKind::Orange, Vec2::new(100.0, 100.0), 1.0));
        s.enemies.push(Enemy::new(EnemyKind::Orange, Vec2::new(100.0, 100.0), 1.0));
        s.bullets.push(Bullet::player(120.0, 120.0, 0.0));

        resolve_collisions(&mut s);

        assert!(s.bullets.is_empty());
        let total: u32 = s.enemies.iter().map(|e| e.health).sum();
        assert_eq!(total, 49);
        assert_eq!(s.take_events(), vec![GameEvent::EnemyHit(EnemyKind::Orange)]);
        assert_eq!(s.particles.len(), 5);
    }

    #[test]
    fn test_kill_scores_with_incremented_combo() {
        let mut s = state();
        s.combo = 9;
        s.enemies.push(Enemy::new(EnemyKind::Red, Vec2::new(100.0, 100.0), 1.0));
        s.bullets.push(Bullet::player(110.0, 110.0, 0.0));

        resolve_collisions(&mut s);

        assert!(s.enemies.is_empty());
        assert_eq!(s.combo, 10);
        assert_eq!(s.score, 2);
        assert!(s.take_events().contains(&GameEvent::EnemyDestroyed {
            kind: EnemyKind::Red,
            points: 2,
        }));
        assert_eq!(s.particles.len(), 35);
    }

    #[test]
    fn test_enemy_bullet_damages_player() {
        let mut s = state();
        s.combo = 4;
        let p = s.player.pos;
        s.enemy_bullets.push(Bullet::enemy(p.x + 10.0, p.y + 10.0, 0.0));

        resolve_collisions(&mut s);

        assert!(s.enemy_bullets.is_empty());
        assert_eq!(s.player.health, 9);
        assert_eq!(s.combo, 0);
        assert_eq!(s.take_events(), vec![GameEvent::PlayerDamaged]);
    }

    #[test]
    fn test_immunity_absorbs_bullets_and_bodies() {
        let mut s = state();
        s.effects.activate(PowerUpKind::Utility(UtilityKind::Immunity));
        let p = s.player.pos;
        s.enemy_bullets.push(Bullet::enemy(p.x + 10.0, p.y + 10.0, 0.0));
        let boss = enemy_on_player(&s, EnemyKind::Purple);
        s.enemies.push(boss);

        resolve_collisions(&mut s);

        assert_eq!(s.player.health, PLAYER_MAX_HEALTH);
        assert!(s.enemies.is_empty());
        assert!(s.enemy_bullets.is_empty());
        assert_eq!(s.phase, GamePhase::Playing);
        assert_eq!(s.particles.len(), 28);
    }

    #[test]
    fn test_three_red_collisions_then_a_fourth() {
        let mut s = state();
        for expected in [9, 8, 7] {
            s.combo = 3;
            let red = enemy_on_player(&s, EnemyKind::Red);
            s.enemies.push(red);
            resolve_collisions(&mut s);
            assert_eq!(s.player.health, expected);
            assert_eq!(s.combo, 0);
            assert!(s.enemies.is_empty());
        }
        assert_eq!(s.player.health, 7);

        let red = enemy_on_player(&s, EnemyKind::Red);
        s.enemies.push(red);
        resolve_collisions(&mut s);
        assert_eq!(s.player.health, 6);
        assert_eq!(s.phase, GamePhase::Playing);
    }

    #[test]
    fn test_boss_contact_is_instant_death() {
        for kind in [EnemyKind::Orange, EnemyKind::Purple] {
            let mut s = state();
            s.score = 30;
            let boss = enemy_on_player(&s, kind);
            s.enemies.push(boss);

            resolve_collisions(&mut s);

            assert_eq!(s.player.health, 0);
            assert_eq!(s.phase, GamePhase::GameOver);
            let events = s.take_events();
            assert_eq!(
                count(&events, |e| matches!(e, GameEvent::GameOver { .. })),
                1
            );
            assert!(!events.contains(&GameEvent::PlayerDamaged));
            assert_eq!(s.high_score, 30);
        }
    }

    #[test]
    fn test_last_health_point_ends_run_once() {
        let mut s = state();
        s.player.health = 1;
        let p = s.player.pos;
        for _ in 0..3 {
            s.enemy_bullets.push(Bullet::enemy(p.x + 10.0, p.y + 10.0, 0.0));
        }
        s.enemies.push(Enemy::new(EnemyKind::Red, p, 1.0));

        resolve_collisions(&mut s);

        assert_eq!(s.player.health, 0);
        assert!(s.is_game_over());
        let events = s.take_events();
        assert_eq!(
            count(&events, |e| matches!(e, GameEvent::GameOver { .. })),
            1
        );
    }

    #[test]
    fn test_health_pickup_consumed_at_full_health() {
        let mut s = state();
        let p = s.player.pos;
        s.health_pickups.push(HealthPickup::new(p.x, p.y));
        resolve_collisions(&mut s);
        assert!(s.health_pickups.is_empty());
        assert_eq!(s.player.health, PLAYER_MAX_HEALTH);
        assert!(s.particles.is_empty());

        s.player.health = 9;
        s.health_pickups.push(HealthPickup::new(p.x, p.y));
        resolve_collisions(&mut s);
        assert_eq!(s.player.health, PLAYER_MAX_HEALTH);
        assert_eq!(s.particles.len(), 15);
        assert!(s.take_events().contains(&GameEvent::Healed));
    }

    #[test]
    fn test_power_up_pickup_applies_effect() {
        let mut s = state();
        s.effects.timer = 400;
        s.effects.weapon = Some(WeaponKind::TripleShot);
        s.effects.fire_mode = 3;
        let p = s.player.pos;
        let kind = PowerUpKind::Weapon(WeaponKind::WideSpread);
        s.power_ups.push(PowerUp::new(p.x, p.y, kind));

        resolve_collisions(&mut s);

        assert!(s.power_ups.is_empty());
        assert_eq!(s.effects.fire_mode, 5);
        assert_eq!(s.effects.timer, 0);
        assert_eq!(s.particles.len(), 20);
        assert_eq!(s.particles[0].color, kind.color());
        assert_eq!(s.take_events(), vec![GameEvent::PowerUpCollected(kind)]);
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let mut s = state();
        let p = s.player.pos;
        // Bullet directly above the player, bottom edge touching its top edge
        s.enemy_bullets.push(Bullet::enemy(p.x, p.y - BULLET_HEIGHT, 0.0));
        resolve_collisions(&mut s);
        assert_eq!(s.enemy_bullets.len(), 1);
        assert_eq!(s.player.health, PLAYER_MAX_HEALTH);
    }
}
