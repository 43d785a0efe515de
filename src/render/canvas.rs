//! Canvas2D-backed drawing surface (WASM only)

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::Surface;

fn css_color([r, g, b]: [u8; 3]) -> String {
    format!("rgb({r},{g},{b})")
}

/// Wraps a 2D canvas context as a `Surface`
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl Canvas2d {
    pub fn new(ctx: CanvasRenderingContext2d, width: f32, height: f32) -> Self {
        Self { ctx, width, height }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

impl Surface for Canvas2d {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [u8; 3]) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: [u8; 3]) {
        self.ctx.begin_path();
        if self
            .ctx
            .ellipse(cx as f64, cy as f64, rx as f64, ry as f64, 0.0, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill();
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size_px: f32, color: [u8; 3]) {
        self.ctx.set_font(&format!("{size_px}px Arial"));
        self.ctx.set_fill_style_str(&css_color(color));
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
