pub mod card;
pub mod config;
pub mod core;
pub mod curve;
pub mod field;
pub mod input;
pub mod overlay;
pub mod render;
pub mod theme;

// Re-export key types at crate root for convenience
pub use card::GreetingCard;
pub use config::CardConfig;
pub use crate::core::stage::{RevealTimer, Stage};
pub use crate::core::time::FrameClock;
pub use curve::{heart_point, sample_param};
pub use field::{Particle, ParticleField, Star};
pub use input::{CardInput, InputQueue};
pub use overlay::{OverlayStyle, HEADING, PHOTO_PATH, SUBLINE};
pub use render::{render_field, Surface};
pub use theme::{Color, Theme, ThemePaint, DEFAULT_THEME_INDEX, THEMES};
