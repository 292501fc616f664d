//! Canvas 2D implementation of the core `Surface` trait.

use glam::Vec2;
use heartbeam::theme::Color;
use heartbeam::Surface;
use web_sys::CanvasRenderingContext2d;

/// Immediate-mode surface over a `CanvasRenderingContext2d`.
/// Glow is the context's shadow blur in the fill color, matching the
/// reference rendering.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Track the canvas backing size; must follow every canvas resize.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_global_alpha(1.0);
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32, blur: f32) {
        let css = color.to_css();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(&css);
        self.ctx.set_shadow_blur(blur as f64);
        self.ctx.set_shadow_color(&css);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn radial_wash(&mut self, center: Vec2, radius: f32, color: Color) {
        let grad = match self.ctx.create_radial_gradient(
            center.x as f64,
            center.y as f64,
            0.0,
            center.x as f64,
            center.y as f64,
            radius as f64,
        ) {
            Ok(g) => g,
            // Degenerate geometry; the wash is cosmetic, skip it.
            Err(_) => return,
        };
        let _ = grad.add_color_stop(0.0, &color.to_css());
        let _ = grad.add_color_stop(1.0, "transparent");
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }
}
