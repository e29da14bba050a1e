//! Canvas 2D rendering
//!
//! Everything is drawn through the `Painter` trait so frames can be
//! produced without a browser. The wasm build implements it for
//! `CanvasRenderingContext2d`; tests use a recorder.
//!
//! Frame order: background, particles, player, HUD, bullets, enemies,
//! pickups, then the pause or game-over overlay.

pub mod background;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod hud;
pub mod sprites;

#[cfg(test)]
pub(crate) mod recording;

pub use background::Background;

use crate::settings::QualityPreset;
use crate::sim::{GamePhase, GameState};

/// A color stop: offset in [0, 1] and a CSS color
pub type ColorStop<'a> = (f64, &'a str);

/// The drawing capability the renderer needs
///
/// Mirrors the subset of the Canvas 2D API the game uses. Fallible canvas
/// calls are fire-and-forget.
pub trait Painter {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);

    fn set_fill_color(&mut self, css: &str);
    fn set_fill_linear_gradient(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, stops: &[ColorStop]);
    fn set_fill_radial_gradient(
        &mut self,
        center: (f64, f64),
        r0: f64,
        r1: f64,
        stops: &[ColorStop],
    );
    fn set_stroke_color(&mut self, css: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_line_dash(&mut self, segments: &[f64]);
    fn set_global_alpha(&mut self, alpha: f64);
    /// Glow around subsequent shapes; blur 0 disables it
    fn set_shadow(&mut self, blur: f64, css: &str);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Closed polygon path through `points`
    fn polygon(&mut self, points: &[(f64, f64)]) {
        self.begin_path();
        for (i, &(x, y)) in points.iter().enumerate() {
            if i == 0 {
                self.move_to(x, y);
            } else {
                self.line_to(x, y);
            }
        }
        self.close_path();
    }

    /// Full circle path
    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        self.begin_path();
        self.arc(x, y, radius, 0.0, std::f64::consts::TAU);
    }
}

/// Draws complete frames
pub struct Renderer {
    pub background: Background,
}

impl Renderer {
    pub fn new(seed: u64, quality: QualityPreset) -> Self {
        Self {
            background: Background::new(seed, quality),
        }
    }

    /// Advance cosmetic animation (runs even while paused)
    pub fn advance(&mut self) {
        self.background.advance();
    }

    /// Draw one frame of `state`
    pub fn render(&self, p: &mut impl Painter, state: &GameState) {
        self.background.draw(p);

        for particle in &state.particles {
            sprites::draw_particle(p, particle);
        }
        sprites::draw_player(p, &state.player);
        hud::draw_health_bar(p, &state.player);
        hud::draw_score_panel(p, state);

        for bullet in state.bullets.iter().chain(&state.enemy_bullets) {
            sprites::draw_bullet(p, bullet);
        }
        for enemy in &state.enemies {
            sprites::draw_enemy(p, enemy);
        }
        for pickup in &state.health_pickups {
            sprites::draw_health_pickup(p, pickup);
        }
        for power_up in &state.power_ups {
            sprites::draw_power_up(p, power_up);
        }

        // Paused and finished runs still show the frozen world under the overlay
        match state.phase {
            GamePhase::Playing => {}
            GamePhase::Paused => hud::draw_pause_overlay(p),
            GamePhase::GameOver => hud::draw_game_over_overlay(p, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::{Op, RecordingPainter};
    use super::*;
    use crate::sim::{Enemy, EnemyKind, TickInput, tick};
    use glam::Vec2;

    #[test]
    fn test_playing_frame_has_no_overlay() {
        let renderer = Renderer::new(1, QualityPreset::High);
        let state = GameState::new(1, 0);
        let mut p = RecordingPainter::default();
        renderer.render(&mut p, &state);

        assert!(p.has_text("HP: 10/10"));
        assert!(p.has_text("Score: 0"));
        assert!(!p.has_text("PAUSED"));
        assert!(!p.has_text("GAME OVER"));
        // Dashed boss-zone line
        assert!(p.ops.contains(&Op::LineDash(vec![10.0, 5.0])));
    }

    #[test]
    fn test_paused_frame() {
        let renderer = Renderer::new(1, QualityPreset::Low);
        let mut state = GameState::new(1, 0);
        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..Default::default()
            },
        );
        let mut p = RecordingPainter::default();
        renderer.render(&mut p, &state);
        assert!(p.has_text("PAUSED"));
        assert!(p.has_text("Press ESC or P to Resume"));
        // The world is drawn beneath the overlay
        let hp = p.texts().iter().position(|t| *t == "HP: 10/10");
        let paused = p.texts().iter().position(|t| *t == "PAUSED");
        assert!(hp.is_some() && hp < paused);
    }

    #[test]
    fn test_boss_shows_hit_points() {
        let renderer = Renderer::new(1, QualityPreset::Low);
        let mut state = GameState::new(1, 0);
        let mut boss = Enemy::new(EnemyKind::Purple, Vec2::new(100.0, 100.0), 1.0);
        boss.health = 37;
        state.enemies.push(boss);
        state
            .enemies
            .push(Enemy::new(EnemyKind::Red, Vec2::new(400.0, 100.0), 1.0));

        let mut p = RecordingPainter::default();
        renderer.render(&mut p, &state);
        assert!(p.has_text("37/50"));
        assert!(!p.has_text("1/1"));
    }
}
