//! Health bar, score panel and full-screen overlays

use super::Painter;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::{GameState, Player};

const WIDTH: f64 = CANVAS_WIDTH as f64;
const HEIGHT: f64 = CANVAS_HEIGHT as f64;

const PANEL_X: f64 = WIDTH - 250.0;
const SCORE_Y: f64 = 15.0;
const HIGH_SCORE_Y: f64 = 55.0;
const COMBO_Y: f64 = 95.0;
const LINE_SPACING: f64 = 35.0;

/// Gradient stops for the player's health bar at a given fill fraction
fn health_colors(fraction: f64) -> (&'static str, &'static str) {
    if fraction > 0.5 {
        ("#00ff00", "#00cc00")
    } else if fraction > 0.25 {
        ("#ffaa00", "#ff8800")
    } else {
        ("#ff0000", "#cc0000")
    }
}

pub fn combo_text(state: &GameState) -> Option<String> {
    (state.combo > 0).then(|| format!("{}x COMBO ({}x)", state.combo, state.multiplier()))
}

/// One line per active power-up slot, with its color
pub fn power_up_lines(state: &GameState) -> Vec<(String, String)> {
    let secs = state.effects.seconds_left();
    let weapon = state
        .effects
        .weapon
        .map(|w| (format!("{} ({secs}s)", w.label()), w.color().css()));
    let utility = state
        .effects
        .utility
        .map(|u| (format!("{} ({secs}s)", u.label()), u.color().css()));
    weapon.into_iter().chain(utility).collect()
}

pub fn draw_health_bar(p: &mut impl Painter, player: &Player) {
    let (x, y, w, h) = (12.0, 12.0, 200.0, 25.0);
    let fraction = player.health_fraction() as f64;

    p.set_fill_color("rgba(0, 0, 0, 0.5)");
    p.fill_rect(x - 2.0, y - 2.0, w + 4.0, h + 4.0);
    p.set_fill_color("#333");
    p.fill_rect(x, y, w, h);

    let (from, to) = health_colors(fraction);
    p.set_fill_linear_gradient(x, y, x + w * fraction, y, &[(0.0, from), (1.0, to)]);
    p.fill_rect(x, y, w * fraction, h);

    p.set_stroke_color("#ffffff");
    p.set_line_width(2.0);
    p.stroke_rect(x, y, w, h);

    p.set_fill_color("#ffffff");
    p.set_font("bold 16px Arial");
    p.fill_text(
        &format!("HP: {}/{}", player.health, player.max_health),
        x + 8.0,
        y + 18.0,
    );
}

pub fn draw_score_panel(p: &mut impl Painter, state: &GameState) {
    p.set_fill_color("rgba(0, 0, 0, 0.5)");
    p.fill_rect(PANEL_X - 10.0, SCORE_Y - 5.0, 240.0, 35.0);
    p.set_fill_color("#ffff00");
    p.set_font("bold 24px Arial");
    p.fill_text(&format!("Score: {}", state.score), PANEL_X, SCORE_Y + 20.0);

    p.set_fill_color("rgba(0, 0, 0, 0.5)");
    p.fill_rect(PANEL_X - 10.0, HIGH_SCORE_Y - 5.0, 240.0, 30.0);
    p.set_fill_color("#00ffff");
    p.set_font("bold 18px Arial");
    p.fill_text(
        &format!("High: {}", state.high_score),
        PANEL_X,
        HIGH_SCORE_Y + 15.0,
    );

    let mut y = COMBO_Y;
    if let Some(text) = combo_text(state) {
        p.set_fill_color("rgba(0, 0, 0, 0.5)");
        p.fill_rect(PANEL_X - 10.0, y - 5.0, 240.0, 30.0);
        p.set_fill_color("#ffff00");
        p.set_font("bold 20px Arial");
        p.fill_text(&text, PANEL_X, y + 17.0);
        y += LINE_SPACING;
    }

    p.set_font("bold 16px Arial");
    for (text, color) in power_up_lines(state) {
        p.set_fill_color("rgba(0, 0, 0, 0.5)");
        p.fill_rect(PANEL_X - 10.0, y - 5.0, 240.0, 30.0);
        p.set_fill_color(&color);
        p.fill_text(&text, PANEL_X, y + 15.0);
        y += LINE_SPACING;
    }
}

pub fn draw_pause_overlay(p: &mut impl Painter) {
    p.set_fill_color("rgba(0, 0, 0, 0.7)");
    p.fill_rect(0.0, 0.0, WIDTH, HEIGHT);

    p.set_text_align("center");
    p.set_shadow(20.0, "#00ffff");
    p.set_fill_color("#00ffff");
    p.set_font("bold 64px Arial");
    p.fill_text("PAUSED", WIDTH / 2.0, HEIGHT / 2.0);

    p.set_shadow(0.0, "transparent");
    p.set_fill_color("#ffffff");
    p.set_font("bold 24px Arial");
    p.fill_text("Press ESC or P to Resume", WIDTH / 2.0, HEIGHT / 2.0 + 50.0);
    p.set_text_align("left");
}

pub fn draw_game_over_overlay(p: &mut impl Painter, state: &GameState) {
    let cx = WIDTH / 2.0;
    let cy = HEIGHT / 2.0;

    p.set_fill_color("rgba(0, 0, 0, 0.8)");
    p.fill_rect(0.0, 0.0, WIDTH, HEIGHT);
    p.set_text_align("center");

    p.set_shadow(30.0, "#ff0000");
    p.set_fill_color("#ff0000");
    p.set_font("bold 72px Arial");
    p.fill_text("GAME OVER", cx, cy - 120.0);

    p.set_shadow(20.0, "#00ff00");
    p.set_fill_color("#00ff00");
    p.set_font("bold 48px Arial");
    p.fill_text(&format!("Final Score: {}", state.score), cx, cy - 30.0);

    if state.new_high_score {
        p.set_shadow(25.0, "#ffff00");
        p.set_fill_color("#ffff00");
        p.set_font("bold 42px Arial");
        p.fill_text("🏆 NEW HIGH SCORE! 🏆", cx, cy + 30.0);
    } else {
        p.set_shadow(15.0, "#00ffff");
        p.set_fill_color("#00ffff");
        p.set_font("bold 36px Arial");
        p.fill_text(&format!("High Score: {}", state.high_score), cx, cy + 30.0);
    }

    p.set_shadow(10.0, "#ffffff");
    p.set_fill_color("#ffffff");
    p.set_font("bold 32px Arial");
    p.fill_text("Press R to Restart", cx, cy + 100.0);

    p.set_shadow(0.0, "transparent");
    p.set_text_align("left");
}
