//! Overlay style model.
//!
//! The overlay (greeting text plus the heart-clipped photo) is DOM, not
//! canvas. This module computes everything the DOM layer needs as plain
//! data, a pure function of (stage, theme) with no host types, so the
//! style rules stay testable on native targets.

use crate::core::stage::Stage;
use crate::theme::{Color, Theme, ThemePaint, RAINBOW_ROSE};

pub const HEADING: &str = "Happy Birthday";
pub const SUBLINE: &str = "My Love";
/// Fixed logical path of the photo asset; the browser's default
/// broken-image rendering is the fallback if it is absent.
pub const PHOTO_PATH: &str = "/photo.jpeg";

const WHITE: Color = Color::rgb(255, 255, 255);
const RAINBOW_TEXT_GLOW: Color = Color::rgba(255, 255, 255, 0.7);
const RAINBOW_PHOTO_GLOW: Color = Color::rgba(255, 50, 100, 0.4);

/// Resolved visual state of the overlay for one (stage, theme) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Whether the text block and photo are shown (every stage but
    /// Scattered). Hidden content fades and translates up.
    pub visible: bool,
    /// Heading color.
    pub text_color: Color,
    /// Text glow color behind the heading.
    pub text_glow: Color,
    /// Blurred halo behind the heart photo, and the page background glow.
    pub halo: Color,
    /// Drop-shadow glow around the clipped photo.
    pub photo_glow: Color,
    /// Border gradient start (the light end).
    pub border_from: Color,
    /// Border gradient midpoint.
    pub border_mid: Color,
}

impl OverlayStyle {
    pub fn compute(stage: Stage, theme: &Theme) -> Self {
        let (text_color, text_glow, photo_glow) = match theme.paint {
            ThemePaint::Rainbow => (WHITE, RAINBOW_TEXT_GLOW, RAINBOW_PHOTO_GLOW),
            ThemePaint::Solid { secondary, .. } => (
                secondary.unwrap_or(WHITE),
                theme.glow,
                theme.glow,
            ),
        };
        Self {
            visible: stage.shows_overlay(),
            text_color,
            text_glow,
            halo: theme.halo_color(),
            photo_glow,
            border_from: theme.secondary().unwrap_or(WHITE),
            border_mid: theme.halo_color(),
        }
    }

    /// CSS for the heart border overlay: light edge into the primary color,
    /// trailing off to transparent.
    pub fn border_gradient_css(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 50%, transparent 100%)",
            self.border_from.to_css(),
            self.border_mid.to_css()
        )
    }

    /// CSS for the page background glow behind the whole card.
    pub fn page_glow_css(&self) -> String {
        format!(
            "radial-gradient(circle at 50% 40%, {} 0%, transparent 80%)",
            self.halo.to_css()
        )
    }
}
