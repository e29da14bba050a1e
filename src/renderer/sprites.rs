//! Entity drawing: ship, enemies, bolts, pickups, particles

use std::f64::consts::{PI, TAU};

use super::Painter;
use crate::consts::*;
use crate::sim::{
    Bullet, BulletOwner, Enemy, HealthPickup, Particle, Player, PowerUp, PowerUpKind,
    UtilityKind, WeaponKind,
};

const PLAYER_W: f64 = PLAYER_SIZE as f64;

/// Green ship with twin engine glows, swept wings and a cockpit
pub fn draw_player(p: &mut impl Painter, player: &Player) {
    let x = player.pos.x as f64;
    let y = player.pos.y as f64;
    let w = PLAYER_W;
    let h = PLAYER_W;

    p.save();

    // Engine glow
    p.set_shadow(20.0, "#00ffff");
    p.set_fill_color("#00ffff");
    p.set_global_alpha(0.6);
    p.fill_rect(x + 5.0, y + h - 5.0, 8.0, 8.0);
    p.fill_rect(x + w - 13.0, y + h - 5.0, 8.0, 8.0);
    p.set_global_alpha(1.0);

    // Wings
    p.set_shadow(15.0, "#00ff00");
    p.set_fill_linear_gradient(x, y, x, y + h, &[(0.0, "#00ff00"), (1.0, "#008800")]);
    p.polygon(&[(x, y + 10.0), (x - 8.0, y + 20.0), (x, y + 25.0)]);
    p.fill();
    p.polygon(&[(x + w, y + 10.0), (x + w + 8.0, y + 20.0), (x + w, y + 25.0)]);
    p.fill();

    // Pentagon hull
    let hull = [
        (x + w / 2.0, y),
        (x + w, y + 10.0),
        (x + w, y + h),
        (x, y + h),
        (x, y + 10.0),
    ];
    p.set_fill_linear_gradient(
        x,
        y,
        x,
        y + h,
        &[(0.0, "#00ff00"), (0.5, "#00dd00"), (1.0, "#00aa00")],
    );
    p.polygon(&hull);
    p.fill();

    // Cockpit
    p.set_shadow(10.0, "#00ffff");
    p.set_fill_color("#00ffff");
    p.circle(x + w / 2.0, y + 12.0, 5.0);
    p.fill();

    p.set_stroke_color("#00ff88");
    p.set_line_width(2.0);
    p.polygon(&hull);
    p.stroke();

    p.set_shadow(0.0, "transparent");
    p.restore();
}

/// Glowing laser bolt: white-to-cyan for the player, yellow-to-orange for enemies
pub fn draw_bullet(p: &mut impl Painter, bullet: &Bullet) {
    let x = bullet.pos.x as f64;
    let y = bullet.pos.y as f64;
    let h = BULLET_HEIGHT as f64;
    let (glow, stops) = match bullet.owner {
        BulletOwner::Player => ("#00ffff", [(0.0, "#ffffff"), (1.0, "#00ffff")]),
        BulletOwner::Enemy => ("#ffff00", [(0.0, "#ffff00"), (1.0, "#ff8800")]),
    };
    p.set_shadow(10.0, glow);
    p.set_fill_linear_gradient(x, y, x, y + h, &stops);
    p.fill_rect(x, y, BULLET_WIDTH as f64, h);
    p.set_shadow(0.0, "transparent");
}

/// Hexagon vertices around a center
fn hexagon(cx: f64, cy: f64, radius: f64) -> [(f64, f64); 6] {
    std::array::from_fn(|i| {
        let angle = PI / 3.0 * i as f64;
        (cx + radius * angle.cos(), cy + radius * angle.sin())
    })
}

/// Pulsing hexagon with a bright core; bosses get a health bar and HP text
pub fn draw_enemy(p: &mut impl Painter, enemy: &Enemy) {
    let kind = enemy.kind;
    let size = kind.size() as f64;
    let x = enemy.pos.x as f64;
    let y = enemy.pos.y as f64;
    let cx = x + size / 2.0;
    let cy = y + size / 2.0;
    let radius = size / 2.0;
    let color = kind.color().css();
    let color2 = kind.color2().css();
    let shape = hexagon(cx, cy, radius);

    p.save();
    p.set_shadow(15.0 + (enemy.pulse as f64).sin() * 2.0, &color);

    p.set_fill_radial_gradient(
        (cx, cy),
        0.0,
        radius,
        &[(0.0, color.as_str()), (0.7, color2.as_str()), (1.0, "#000000")],
    );
    p.polygon(&shape);
    p.fill();

    // Inner core
    p.set_fill_color(&color);
    p.set_global_alpha(0.6);
    p.circle(cx, cy, radius * 0.4);
    p.fill();
    p.set_global_alpha(1.0);

    p.set_stroke_color(&color);
    p.set_line_width(3.0);
    p.polygon(&shape);
    p.stroke();

    p.set_shadow(0.0, "transparent");
    p.restore();

    if !kind.is_boss_class() {
        return;
    }

    let fraction = enemy.health as f64 / kind.max_health() as f64;
    let bar_y = y - 12.0;
    let bar_h = 6.0;

    p.set_fill_color("rgba(0, 0, 0, 0.7)");
    p.fill_rect(x - 2.0, bar_y - 2.0, size + 4.0, bar_h + 4.0);
    p.set_fill_color("#333");
    p.fill_rect(x, bar_y, size, bar_h);
    p.set_fill_linear_gradient(
        x,
        bar_y,
        x + size * fraction,
        bar_y,
        &[(0.0, "#00ff00"), (1.0, "#00aa00")],
    );
    p.fill_rect(x, bar_y, size * fraction, bar_h);

    p.set_fill_color("#ffffff");
    p.set_font(&format!("bold {}px Arial", (size / 6.0).floor()));
    p.set_text_align("center");
    p.fill_text(
        &format!("{}/{}", enemy.health, kind.max_health()),
        cx,
        cy + 5.0,
    );
    p.set_text_align("left");
}

/// Rotating green cross
pub fn draw_health_pickup(p: &mut impl Painter, pickup: &HealthPickup) {
    let half = HEALTH_PICKUP_SIZE as f64 / 2.0;

    p.save();
    p.translate(pickup.pos.x as f64 + half, pickup.pos.y as f64 + half);
    p.rotate(pickup.rotation as f64);
    p.set_shadow(20.0 + (pickup.pulse as f64).sin() * 3.0, "#00ff00");

    p.set_fill_color("#00ff00");
    p.fill_rect(-5.0, -12.0, 10.0, 24.0);
    p.fill_rect(-12.0, -5.0, 24.0, 10.0);

    p.set_stroke_color("#ffffff");
    p.set_line_width(2.0);
    p.stroke_rect(-5.0, -12.0, 10.0, 24.0);
    p.stroke_rect(-12.0, -5.0, 24.0, 10.0);

    p.set_shadow(0.0, "transparent");
    p.restore();
}

/// Rotating capsule with an icon for its kind inside a white ring
pub fn draw_power_up(p: &mut impl Painter, power_up: &PowerUp) {
    let half = POWER_UP_SIZE as f64 / 2.0;
    let color = power_up.kind.color().css();

    p.save();
    p.translate(power_up.pos.x as f64 + half, power_up.pos.y as f64 + half);
    p.rotate(power_up.rotation as f64);
    p.set_shadow(25.0 + (power_up.pulse as f64).sin() * 4.0, &color);
    p.set_fill_color(&color);
    p.set_stroke_color(&color);

    match power_up.kind {
        PowerUpKind::Weapon(WeaponKind::DoubleShot) => {
            for dx in [-10.0, -2.0] {
                p.polygon(&[(dx, 8.0), (dx, -8.0), (dx + 6.0, -2.0), (dx + 6.0, 2.0)]);
                p.fill();
            }
        }
        PowerUpKind::Weapon(WeaponKind::TripleShot) => {
            for dx in [-12.0, -4.0, 4.0] {
                p.polygon(&[(dx, 8.0), (dx, -8.0), (dx + 4.0, -4.0), (dx + 4.0, 4.0)]);
                p.fill();
            }
        }
        PowerUpKind::Weapon(WeaponKind::DiagonalSpread) => {
            p.polygon(&[(-10.0, 6.0), (-10.0, -6.0), (-6.0, -2.0)]);
            p.fill();
            p.polygon(&[(0.0, 8.0), (0.0, -8.0), (4.0, -4.0)]);
            p.fill();
            p.polygon(&[(10.0, 6.0), (10.0, -6.0), (6.0, -2.0)]);
            p.fill();
        }
        PowerUpKind::Weapon(WeaponKind::WideSpread) => {
            for i in 0..5 {
                let dx = -8.0 + i as f64 * 4.0;
                p.polygon(&[(dx, 6.0), (dx, -6.0), (dx + 2.0, -3.0)]);
                p.fill();
            }
        }
        PowerUpKind::Utility(UtilityKind::DoubleSpeed) => {
            // Lightning bolt
            p.polygon(&[
                (-4.0, -10.0),
                (2.0, -2.0),
                (-2.0, -2.0),
                (4.0, 10.0),
                (-2.0, 2.0),
                (2.0, 2.0),
            ]);
            p.fill();
        }
        PowerUpKind::Utility(UtilityKind::Immunity) => {
            // Shield
            p.polygon(&[
                (0.0, -10.0),
                (8.0, -6.0),
                (8.0, 4.0),
                (0.0, 10.0),
                (-8.0, 4.0),
                (-8.0, -6.0),
            ]);
            p.fill();
            p.set_stroke_color("#ffffff");
            p.set_line_width(2.0);
            p.stroke();
        }
        PowerUpKind::Utility(UtilityKind::TimeSlow) => {
            // Clock face and hands
            p.set_line_width(2.0);
            p.circle(0.0, 0.0, 10.0);
            p.stroke();
            p.begin_path();
            p.move_to(0.0, 0.0);
            p.line_to(0.0, -6.0);
            p.move_to(0.0, 0.0);
            p.line_to(4.0, 0.0);
            p.stroke();
        }
    }

    if power_up.kind != PowerUpKind::Utility(UtilityKind::Immunity) {
        p.set_stroke_color("#ffffff");
        p.set_line_width(2.0);
        p.circle(0.0, 0.0, 14.0);
        p.stroke();
    }

    p.set_shadow(0.0, "transparent");
    p.restore();
}

/// Fading glowing dot
pub fn draw_particle(p: &mut impl Painter, particle: &Particle) {
    let color = particle.color.css();
    p.set_global_alpha(particle.life.max(0.0) as f64);
    p.set_shadow(10.0, &color);
    p.set_fill_color(&color);
    p.begin_path();
    p.arc(
        particle.pos.x as f64,
        particle.pos.y as f64,
        particle.size as f64,
        0.0,
        TAU,
    );
    p.fill();
    p.set_shadow(0.0, "transparent");
    p.set_global_alpha(1.0);
}
