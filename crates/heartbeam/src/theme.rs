//! Color themes for the card.
//!
//! A theme paints the particle field, the background glow, and the overlay.
//! The registry is a fixed ordered list; order defines switcher button order.

/// RGBA color. Channels are bytes, alpha is normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Color from hue (degrees, any range), saturation and lightness in [0, 1].
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = h.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        Self {
            r: ((r1 + m) * 255.0).round() as u8,
            g: ((g1 + m) * 255.0).round() as u8,
            b: ((b1 + m) * 255.0).round() as u8,
            a: 1.0,
        }
    }

    /// CSS `rgba(...)` string for canvas fills and DOM styles.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// How a theme paints particles.
/// `Rainbow` cycles hue per particle index; `Solid` uses a primary color with
/// an optional lighter secondary for the heart's upper lobes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemePaint {
    Solid {
        primary: Color,
        secondary: Option<Color>,
    },
    Rainbow,
}

/// A named color theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Display label; unique within the registry.
    pub name: &'static str,
    pub paint: ThemePaint,
    /// Translucent color for glow and blur effects.
    pub glow: Color,
}

impl Theme {
    /// Primary color for surfaces that need one concrete color
    /// (background halo, swatch fallback). Rainbow resolves to its rose accent.
    pub fn halo_color(&self) -> Color {
        match self.paint {
            ThemePaint::Solid { primary, .. } => primary,
            ThemePaint::Rainbow => RAINBOW_ROSE,
        }
    }

    pub fn secondary(&self) -> Option<Color> {
        match self.paint {
            ThemePaint::Solid { secondary, .. } => secondary,
            ThemePaint::Rainbow => None,
        }
    }
}

/// Accent used wherever the rainbow theme needs a single concrete color.
pub const RAINBOW_ROSE: Color = Color::rgb(255, 51, 102);

/// Registry entry the card activates at startup (Emerald).
pub const DEFAULT_THEME_INDEX: usize = 2;

/// The fixed theme registry, in switcher order.
pub const THEMES: [Theme; 7] = [
    Theme {
        name: "Gold",
        paint: ThemePaint::Solid {
            primary: Color::rgb(251, 191, 36),
            secondary: Some(Color::rgb(254, 243, 199)),
        },
        glow: Color::rgba(251, 191, 36, 0.5),
    },
    Theme {
        name: "Ruby",
        paint: ThemePaint::Solid {
            primary: Color::rgb(239, 68, 68),
            secondary: Some(Color::rgb(254, 202, 202)),
        },
        glow: Color::rgba(239, 68, 68, 0.5),
    },
    Theme {
        name: "Emerald",
        paint: ThemePaint::Solid {
            primary: Color::rgb(16, 185, 129),
            secondary: Some(Color::rgb(167, 243, 208)),
        },
        glow: Color::rgba(16, 185, 129, 0.5),
    },
    Theme {
        name: "Sapphire",
        paint: ThemePaint::Solid {
            primary: Color::rgb(59, 130, 246),
            secondary: Some(Color::rgb(191, 219, 254)),
        },
        glow: Color::rgba(59, 130, 246, 0.5),
    },
    Theme {
        name: "Amethyst",
        paint: ThemePaint::Solid {
            primary: Color::rgb(168, 85, 247),
            secondary: Some(Color::rgb(233, 213, 255)),
        },
        glow: Color::rgba(168, 85, 247, 0.5),
    },
    Theme {
        name: "Dreamy",
        paint: ThemePaint::Solid {
            primary: Color::rgb(236, 72, 153),
            secondary: Some(Color::rgb(221, 214, 254)),
        },
        glow: Color::rgba(236, 72, 153, 0.5),
    },
    Theme {
        name: "Rainbow",
        paint: ThemePaint::Rainbow,
        glow: Color::rgba(255, 255, 255, 0.5),
    },
];
