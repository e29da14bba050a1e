//! A `Painter` that records calls instead of drawing

use super::{ColorStop, Painter};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    FillRect { x: f64, y: f64, w: f64, h: f64, fill: String },
    StrokeRect { x: f64, y: f64, w: f64, h: f64 },
    Text { text: String, x: f64, y: f64, fill: String },
    Arc { x: f64, y: f64, radius: f64 },
    Fill,
    Stroke,
    LineDash(Vec<f64>),
    Alpha(f64),
    Shadow(f64),
}

#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub ops: Vec<Op>,
    fill: String,
    depth: i32,
}

impl RecordingPainter {
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| *t == needle)
    }

    /// Fill color in effect for the first text matching `needle`
    pub fn text_fill(&self, needle: &str) -> Option<&str> {
        self.ops.iter().find_map(|op| match op {
            Op::Text { text, fill, .. } if text == needle => Some(fill.as_str()),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    /// save/restore calls are balanced
    pub fn is_balanced(&self) -> bool {
        self.depth == 0
    }
}

impl Painter for RecordingPainter {
    fn save(&mut self) {
        self.depth += 1;
    }

    fn restore(&mut self) {
        self.depth -= 1;
    }

    fn translate(&mut self, _x: f64, _y: f64) {}

    fn rotate(&mut self, _angle: f64) {}

    fn set_fill_color(&mut self, css: &str) {
        self.fill = css.to_string();
    }

    fn set_fill_linear_gradient(&mut self, _: f64, _: f64, _: f64, _: f64, stops: &[ColorStop]) {
        self.fill = format!("linear:{}", stops.first().map(|s| s.1).unwrap_or(""));
    }

    fn set_fill_radial_gradient(&mut self, _: (f64, f64), _: f64, _: f64, stops: &[ColorStop]) {
        self.fill = format!("radial:{}", stops.first().map(|s| s.1).unwrap_or(""));
    }

    fn set_stroke_color(&mut self, _css: &str) {}

    fn set_line_width(&mut self, _width: f64) {}

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.ops.push(Op::LineDash(segments.to_vec()));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(Op::Alpha(alpha));
    }

    fn set_shadow(&mut self, blur: f64, _css: &str) {
        self.ops.push(Op::Shadow(blur));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::FillRect {
            x,
            y,
            w,
            h,
            fill: self.fill.clone(),
        });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::StrokeRect { x, y, w, h });
    }

    fn begin_path(&mut self) {}

    fn move_to(&mut self, _x: f64, _y: f64) {}

    fn line_to(&mut self, _x: f64, _y: f64) {}

    fn close_path(&mut self) {}

    fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64) {
        self.ops.push(Op::Arc { x, y, radius });
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }

    fn set_font(&mut self, _font: &str) {}

    fn set_text_align(&mut self, _align: &str) {}

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(Op::Text {
            text: text.to_string(),
            x,
            y,
            fill: self.fill.clone(),
        });
    }
}
