//! `Painter` for the browser's Canvas 2D context
//!
//! Calls go through `Ctx::method(self, ..)` so they reach the inherent
//! web-sys methods rather than the trait methods of the same name.

use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d as Ctx};

use super::{ColorStop, Painter};

fn add_stops(gradient: &CanvasGradient, stops: &[ColorStop]) {
    for &(offset, color) in stops {
        gradient.add_color_stop(offset as f32, color).ok();
    }
}

impl Painter for Ctx {
    fn save(&mut self) {
        Ctx::save(self);
    }

    fn restore(&mut self) {
        Ctx::restore(self);
    }

    fn translate(&mut self, x: f64, y: f64) {
        Ctx::translate(self, x, y).ok();
    }

    fn rotate(&mut self, angle: f64) {
        Ctx::rotate(self, angle).ok();
    }

    fn set_fill_color(&mut self, css: &str) {
        self.set_fill_style_str(css);
    }

    fn set_fill_linear_gradient(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, stops: &[ColorStop]) {
        let gradient = self.create_linear_gradient(x0, y0, x1, y1);
        add_stops(&gradient, stops);
        self.set_fill_style_canvas_gradient(&gradient);
    }

    fn set_fill_radial_gradient(
        &mut self,
        center: (f64, f64),
        r0: f64,
        r1: f64,
        stops: &[ColorStop],
    ) {
        let (cx, cy) = center;
        if let Ok(gradient) = self.create_radial_gradient(cx, cy, r0, cx, cy, r1) {
            add_stops(&gradient, stops);
            self.set_fill_style_canvas_gradient(&gradient);
        }
    }

    fn set_stroke_color(&mut self, css: &str) {
        self.set_stroke_style_str(css);
    }

    fn set_line_width(&mut self, width: f64) {
        Ctx::set_line_width(self, width);
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        let array = js_sys::Array::new();
        for &s in segments {
            array.push(&JsValue::from_f64(s));
        }
        Ctx::set_line_dash(self, &array).ok();
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        Ctx::set_global_alpha(self, alpha.clamp(0.0, 1.0));
    }

    fn set_shadow(&mut self, blur: f64, css: &str) {
        self.set_shadow_blur(blur);
        self.set_shadow_color(css);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        Ctx::fill_rect(self, x, y, w, h);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        Ctx::stroke_rect(self, x, y, w, h);
    }

    fn begin_path(&mut self) {
        Ctx::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        Ctx::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        Ctx::line_to(self, x, y);
    }

    fn close_path(&mut self) {
        Ctx::close_path(self);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        Ctx::arc(self, x, y, radius.max(0.0), start, end).ok();
    }

    fn fill(&mut self) {
        Ctx::fill(self);
    }

    fn stroke(&mut self) {
        Ctx::stroke(self);
    }

    fn set_font(&mut self, font: &str) {
        Ctx::set_font(self, font);
    }

    fn set_text_align(&mut self, align: &str) {
        Ctx::set_text_align(self, align);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        Ctx::fill_text(self, text, x, y).ok();
    }
}
