//! Axis-aligned rectangle geometry
//!
//! Every entity on the playfield is a box anchored at its top-left corner:
//! - `pos`: top-left corner in canvas units (y grows downward)
//! - `size`: width and height

use glam::Vec2;

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test: boxes that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Anything with a collision box
pub trait Bounded {
    fn bounds(&self) -> Rect;

    fn overlaps<T: Bounded + ?Sized>(&self, other: &T) -> bool {
        self.bounds().overlaps(&other.bounds())
    }

    fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

impl Bounded for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}
