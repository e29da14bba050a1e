//! Scrolling starfield and nebula backdrop
//!
//! Purely cosmetic. It has its own RNG so twinkling never perturbs the
//! gameplay stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::Painter;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, MIDLINE_Y};
use crate::settings::QualityPreset;

const WIDTH: f64 = CANVAS_WIDTH as f64;
const HEIGHT: f64 = CANVAS_HEIGHT as f64;

const PLANET_COLORS: [&str; 3] = ["#1a0a3a", "#2a1a4a", "#0a1a3a"];

#[derive(Debug, Clone)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub brightness: f64,
}

/// A large, faint, slowly drifting glow
#[derive(Debug, Clone)]
pub struct Planet {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: &'static str,
    pub speed: f64,
}

pub struct Background {
    rng: Pcg32,
    pub stars: Vec<Star>,
    pub planets: Vec<Planet>,
    nebula: bool,
}

impl Background {
    pub fn new(seed: u64, quality: QualityPreset) -> Self {
        let mut background = Self {
            // Decorrelate from the gameplay stream seeded with the same value
            rng: Pcg32::seed_from_u64(seed ^ 0x5eed_5ca1_ab1e),
            stars: Vec::new(),
            planets: Vec::new(),
            nebula: quality.nebula_enabled(),
        };
        background.populate(quality);
        background
    }

    /// Regenerate for a new quality preset
    pub fn set_quality(&mut self, quality: QualityPreset) {
        self.nebula = quality.nebula_enabled();
        self.populate(quality);
    }

    fn populate(&mut self, quality: QualityPreset) {
        let rng = &mut self.rng;
        self.stars = (0..quality.star_count())
            .map(|_| Star {
                x: rng.random::<f64>() * WIDTH,
                y: rng.random::<f64>() * HEIGHT,
                size: rng.random::<f64>() * 2.5,
                speed: rng.random::<f64>() * 0.8 + 0.2,
                brightness: rng.random::<f64>(),
            })
            .collect();
        self.planets = PLANET_COLORS
            .iter()
            .map(|&color| Planet {
                x: rng.random::<f64>() * WIDTH,
                y: rng.random::<f64>() * HEIGHT * 0.5,
                size: rng.random::<f64>() * 80.0 + 40.0,
                color,
                speed: rng.random::<f64>() * 0.1 + 0.05,
            })
            .collect();
    }

    /// Scroll and twinkle by one tick
    pub fn advance(&mut self) {
        if self.nebula {
            for planet in &mut self.planets {
                planet.y += planet.speed;
                if planet.y > HEIGHT + planet.size {
                    planet.y = -planet.size;
                    planet.x = self.rng.random::<f64>() * WIDTH;
                }
            }
        }

        for star in &mut self.stars {
            star.brightness += (self.rng.random::<f64>() - 0.5) * 0.1;
            star.brightness = star.brightness.clamp(0.3, 1.0);
            star.y += star.speed;
            if star.y > HEIGHT {
                star.y = 0.0;
                star.x = self.rng.random::<f64>() * WIDTH;
            }
        }
    }

    pub fn draw(&self, p: &mut impl Painter) {
        if self.nebula {
            // Deep space radial gradient
            p.set_fill_radial_gradient(
                (WIDTH / 2.0, HEIGHT / 2.0),
                0.0,
                WIDTH,
                &[(0.0, "#0a0a2a"), (0.5, "#050515"), (1.0, "#000000")],
            );
            p.fill_rect(0.0, 0.0, WIDTH, HEIGHT);

            p.set_global_alpha(0.3);
            for planet in &self.planets {
                p.set_fill_radial_gradient(
                    (planet.x, planet.y),
                    0.0,
                    planet.size,
                    &[(0.0, planet.color), (1.0, "transparent")],
                );
                p.circle(planet.x, planet.y, planet.size);
                p.fill();
            }
            p.set_global_alpha(1.0);
        } else {
            p.set_fill_color("#000000");
            p.fill_rect(0.0, 0.0, WIDTH, HEIGHT);
        }

        p.set_fill_color("#ffffff");
        for star in &self.stars {
            p.set_global_alpha(star.brightness);
            p.set_shadow(star.size * 2.0, "#ffffff");
            p.circle(star.x, star.y, star.size);
            p.fill();
        }
        p.set_global_alpha(1.0);
        p.set_shadow(0.0, "transparent");

        // Boss zone boundary
        p.set_stroke_color("rgba(170, 0, 255, 0.3)");
        p.set_line_width(2.0);
        p.set_line_dash(&[10.0, 5.0]);
        p.begin_path();
        p.move_to(0.0, MIDLINE_Y as f64);
        p.line_to(WIDTH, MIDLINE_Y as f64);
        p.stroke();
        p.set_line_dash(&[]);
    }
}
