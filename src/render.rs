use glam::DVec2;
use std::f64::consts::TAU;
use valor_core::{Painter, Rgba};
use web_sys as web;

/// `Painter` over a 2D canvas context. Drawing calls that can fail are
/// ignored; a failed primitive just leaves that frame without it.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Painter for CanvasPainter {
    fn fill_surface(&mut self, size: DVec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(0.0, 0.0, size.x, size.y);
    }

    fn dot(&mut self, center: DVec2, radius: f64, color: Rgba, glow_blur: f64) {
        let css = color.css();
        self.ctx.set_shadow_blur(glow_blur);
        self.ctx.set_shadow_color(&css);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.set_fill_style_str(&css);
        self.ctx.fill();
        self.ctx.set_shadow_blur(0.0);
    }

    fn line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba, glow_blur: Option<f64>) {
        let css = color.css();
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&css);
        self.ctx.set_line_width(width);
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();

        if let Some(blur) = glow_blur {
            self.ctx.set_shadow_blur(blur);
            self.ctx.set_shadow_color(&css);
            self.ctx.stroke();
            self.ctx.set_shadow_blur(0.0);
        }
    }
}
