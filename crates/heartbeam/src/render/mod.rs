//! Render pass: walks the field and emits draw calls onto a `Surface`.
//!
//! Draw order matters: stars first, then the background glow wash, then the
//! particles, so the heart always reads on top of the ambient layer.

#[cfg(test)]
pub(crate) mod recording;
mod surface;

pub use surface::Surface;

use crate::core::stage::Stage;
use crate::field::ParticleField;
use crate::theme::{Color, Theme, ThemePaint};

/// Opacity of the background glow wash, independent of the theme's own
/// glow alpha.
const WASH_ALPHA: f32 = 0.08;
/// Wash used by the rainbow theme, which has no single glow hue.
const RAINBOW_WASH: Color = Color::rgba(255, 100, 200, 0.08);
/// Rainbow particle saturation / lightness.
const RAINBOW_SAT: f32 = 0.85;
const RAINBOW_LIGHT: f32 = 0.75;
/// Upper-lobe cutoff: vertical offset from center, normalized by the lobe
/// extent (scale · 13), below which the secondary color applies.
const LOBE_THRESHOLD: f32 = -0.2;
const LOBE_EXTENT: f32 = 13.0;
/// Per-particle glow radius, widened while pulsing.
const GLOW_BLUR: f32 = 3.0;
const PULSE_GLOW_BLUR: f32 = 8.0;

const STAR_COLOR: Color = Color::rgb(255, 255, 255);

/// Draw one frame of the field. Call after `ParticleField::advance`; reads
/// the field immutably so it can never race the integrator.
///
/// `hue_phase` is the rainbow rotation in degrees (clock elapsed · hue rate).
pub fn render_field(
    surface: &mut dyn Surface,
    field: &ParticleField,
    theme: &Theme,
    stage: Stage,
    hue_phase: f32,
) {
    surface.clear();
    if field.is_empty() {
        return;
    }

    for s in field.stars() {
        surface.fill_circle(s.pos, s.size, STAR_COLOR, s.opacity, 0.0);
    }

    let center = glam::Vec2::new(field.width() * 0.5, field.height() * 0.5);

    if stage != Stage::Scattered {
        let wash = match theme.paint {
            ThemePaint::Rainbow => RAINBOW_WASH,
            ThemePaint::Solid { .. } => theme.glow.with_alpha(WASH_ALPHA),
        };
        surface.radial_wash(center, field.width() * 0.6, wash);
    }

    let count = field.particles().len();
    let blur = if stage == Stage::Pulse {
        PULSE_GLOW_BLUR
    } else {
        GLOW_BLUR
    };

    for (i, p) in field.particles().iter().enumerate() {
        let color = match theme.paint {
            ThemePaint::Rainbow => {
                let hue = (i as f32 / count as f32) * 360.0 + hue_phase;
                Color::from_hsl(hue, RAINBOW_SAT, RAINBOW_LIGHT)
            }
            ThemePaint::Solid {
                primary,
                secondary: Some(secondary),
            } => {
                let y_bias = (p.pos.y - center.y) / (field.scale() * LOBE_EXTENT);
                if y_bias < LOBE_THRESHOLD {
                    secondary
                } else {
                    primary
                }
            }
            ThemePaint::Solid {
                primary,
                secondary: None,
            } => primary,
        };
        surface.fill_circle(p.pos, p.size, color, p.alpha, blur);
    }
}
