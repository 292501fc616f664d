//! Recording surface for tests: captures draw calls instead of rasterizing.

use glam::Vec2;

use super::surface::Surface;
use crate::theme::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        alpha: f32,
        blur: f32,
    },
    Wash {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
    }

    pub fn washes(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Wash { .. }))
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32, blur: f32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
            alpha,
            blur,
        });
    }

    fn radial_wash(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ops.push(DrawOp::Wash {
            center,
            radius,
            color,
        });
    }
}
