use serde::{Deserialize, Serialize};

/// Tuning block for the card, loadable from JSON at startup.
/// The spring constants are tuned for a ~1 second settle at 60 fps and
/// should not be changed without redesigning the motion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Number of particles forming the heart.
    pub particle_count: usize,
    /// Number of ambient background stars.
    pub star_count: usize,
    /// Spring constant pulling a particle toward its target.
    pub spring_force: f32,
    /// Per-step velocity damping factor.
    pub damping: f32,
    /// Seconds before the card auto-transitions Forming → Stable.
    pub reveal_delay: f32,
    /// Curve-to-pixel scale is min(width, height) / scale_divisor.
    pub scale_divisor: f32,
    /// Scattered-stage orbit radius as a fraction of each viewport dimension.
    pub scatter_radius: f32,
    /// Pulse oscillation rate in radians per phase unit.
    pub pulse_rate: f32,
    /// Pulse amplitude as a fraction of heart scale.
    pub pulse_depth: f32,
    /// Phase units advanced per real second (drives swirl and pulse).
    pub time_rate: f32,
    /// Rainbow hue rotation in degrees per real second.
    pub hue_rate: f32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            particle_count: 2200,
            star_count: 80,
            spring_force: 0.08,
            damping: 0.82,
            reveal_delay: 2.0,
            scale_divisor: 45.0,
            scatter_radius: 0.45,
            pulse_rate: 2.5,
            pulse_depth: 0.06,
            time_rate: 1.8,
            hue_rate: 40.0,
        }
    }
}

impl CardConfig {
    /// Parse a config from a JSON string. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
