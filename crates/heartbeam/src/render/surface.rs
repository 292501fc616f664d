//! Drawing-surface contract for the particle field.
//!
//! The field needs very little from its host: clearing, glowing filled
//! discs, and one radial gradient wash. The web crate implements this over
//! `CanvasRenderingContext2d`; tests implement it with a recorder.

use glam::Vec2;

use crate::theme::Color;

/// A 2D immediate-mode drawing surface.
pub trait Surface {
    /// Clear the whole surface to transparent.
    fn clear(&mut self);

    /// Draw a filled disc.
    ///
    /// `alpha` is the global fill opacity (separate from `color.a`);
    /// `blur` > 0 adds a glow of that radius in the fill color.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32, blur: f32);

    /// Paint a radial gradient wash centered at `center`: `color` at the
    /// center fading to transparent at `radius`, covering the full surface.
    fn radial_wash(&mut self, center: Vec2, radius: f32, color: Color);
}
