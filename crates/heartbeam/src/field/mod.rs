//! The particle field: the heart-forming particles plus the ambient stars.
//!
//! This module owns the two arenas and the per-frame integration. Rendering
//! is a separate pass (`crate::render`) that reads the field immutably, so
//! within one frame `advance` always completes before any drawing.

mod particle;
mod rng;
mod star;

pub use particle::Particle;
pub use rng::Rng;
pub use star::Star;

use glam::Vec2;

use crate::config::CardConfig;
use crate::core::stage::Stage;
use crate::curve::{heart_point, sample_param};

/// Container for the particle and star arenas.
///
/// Particle index i is bound to curve parameter (i/N)·2π for the lifetime of
/// an allocation; a resize throws the arenas away and rebuilds them, never
/// patches them in place.
pub struct ParticleField {
    particles: Vec<Particle>,
    stars: Vec<Star>,
    rng: Rng,
    config: CardConfig,
    width: f32,
    height: f32,
    /// Curve-units → pixels. min(width, height) / scale_divisor.
    scale: f32,
}

impl ParticleField {
    pub fn new(config: CardConfig, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            stars: Vec::new(),
            rng: Rng::new(seed),
            config,
            width: 0.0,
            height: 0.0,
            scale: 0.0,
        }
    }

    /// (Re)allocate both arenas for a viewport. Discards all prior state.
    /// A degenerate viewport leaves the field empty; `advance` and the render
    /// pass then no-op instead of producing NaN geometry.
    pub fn init(&mut self, width: f32, height: f32) {
        self.particles.clear();
        self.stars.clear();
        self.width = width;
        self.height = height;

        if width <= 0.0 || height <= 0.0 {
            self.scale = 0.0;
            return;
        }
        self.scale = width.min(height) / self.config.scale_divisor;

        let center = Vec2::new(width * 0.5, height * 0.5);
        let count = self.config.particle_count;
        self.particles.reserve_exact(count);
        for i in 0..count {
            let target = center + heart_point(sample_param(i, count)) * self.scale;
            let pos = Vec2::new(
                self.rng.range(0.0, width),
                self.rng.range(0.0, height),
            );
            let size = self.rng.range(0.4, 2.2);
            let alpha = self.rng.range(0.3, 1.0);
            self.particles.push(Particle::new(pos, target, size, alpha));
        }

        self.stars.reserve_exact(self.config.star_count);
        for _ in 0..self.config.star_count {
            let pos = Vec2::new(
                self.rng.range(0.0, width),
                self.rng.range(0.0, height),
            );
            // Slow omnidirectional drift with a slight upward bias.
            let vel = Vec2::new(
                self.rng.range(-0.025, 0.025),
                self.rng.range(-0.025, 0.025) - 0.03,
            );
            let size = self.rng.range(0.5, 2.0);
            let opacity = self.rng.range(0.0, 0.3);
            self.stars.push(Star::new(pos, vel, size, opacity));
        }
    }

    /// Advance one frame: recompute every particle's target for the stage,
    /// apply the damped spring step, drift the stars.
    ///
    /// `phase` is the oscillator phase from the frame clock; it drives the
    /// scattered swirl and the pulse breathing.
    pub fn advance(&mut self, stage: Stage, phase: f32) {
        if self.particles.is_empty() {
            return;
        }

        let count = self.particles.len();
        let center = Vec2::new(self.width * 0.5, self.height * 0.5);
        let swirl = Vec2::new(
            self.width * self.config.scatter_radius,
            self.height * self.config.scatter_radius,
        );
        let pulse = if stage.pulses() {
            1.0 + (phase * self.config.pulse_rate).sin() * self.config.pulse_depth
        } else {
            1.0
        };

        for (i, p) in self.particles.iter_mut().enumerate() {
            let angle = sample_param(i, count);
            p.target = if stage == Stage::Scattered {
                Vec2::new(
                    center.x + (angle + phase).cos() * swirl.x,
                    center.y + (angle * 1.2 + phase).sin() * swirl.y,
                )
            } else {
                center + heart_point(angle) * self.scale * pulse
            };
            p.spring_step(self.config.spring_force, self.config.damping);
        }

        for s in &mut self.stars {
            s.drift(self.width, self.height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(w: f32, h: f32) -> ParticleField {
        let mut f = ParticleField::new(CardConfig::default(), 42);
        f.init(w, h);
        f
    }

    #[test]
    fn init_fills_both_arenas() {
        let f = field(450.0, 450.0);
        assert_eq!(f.particles().len(), 2200);
        assert_eq!(f.stars().len(), 80);
        assert_eq!(f.scale(), 10.0);
    }

    #[test]
    fn particles_start_inside_viewport() {
        let f = field(450.0, 450.0);
        for p in f.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x < 450.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 450.0);
            assert!(p.size >= 0.4 && p.size < 2.2);
            assert!(p.alpha >= 0.3 && p.alpha < 1.0);
        }
    }

    #[test]
    fn star_opacity_stays_ambient() {
        let f = field(450.0, 450.0);
        for s in f.stars() {
            assert!(s.opacity >= 0.0 && s.opacity < 0.3);
        }
    }

    #[test]
    fn targets_are_index_stable_across_frames() {
        let mut f = field(450.0, 450.0);
        f.advance(Stage::Stable, 0.0);
        let first: Vec<Vec2> = f.particles().iter().map(|p| p.target).collect();
        for _ in 0..10 {
            f.advance(Stage::Stable, 0.0);
        }
        for (p, t) in f.particles().iter().zip(&first) {
            assert_eq!(p.target, *t);
        }
    }

    #[test]
    fn stable_and_forming_share_rest_targets() {
        let mut a = field(450.0, 450.0);
        let mut b = field(450.0, 450.0);
        a.advance(Stage::Stable, 3.7);
        b.advance(Stage::Forming, 9.1);
        // Phase only matters for scattered swirl and pulse breathing.
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.target, pb.target);
        }
    }

    #[test]
    fn pulse_stage_breathes_targets() {
        let mut rest = field(450.0, 450.0);
        let mut pulsed = field(450.0, 450.0);
        rest.advance(Stage::Stable, 0.0);
        // sin(phase·2.5) = 1 at phase = π/5·... pick phase so the sine is ~1.
        let phase = std::f32::consts::FRAC_PI_2 / 2.5;
        pulsed.advance(Stage::Pulse, phase);
        let r = rest.particles()[0].target;
        let p = pulsed.particles()[0].target;
        let center = Vec2::new(225.0, 225.0);
        let grown = (p - center).length() / (r - center).length();
        assert!((grown - 1.06).abs() < 1e-3, "pulse factor was {}", grown);
    }

    #[test]
    fn scattered_targets_orbit_the_center() {
        let mut f = field(400.0, 300.0);
        f.advance(Stage::Scattered, 1.0);
        for p in f.particles() {
            let dx = (p.target.x - 200.0).abs();
            let dy = (p.target.y - 150.0).abs();
            assert!(dx <= 400.0 * 0.45 + 1e-3);
            assert!(dy <= 300.0 * 0.45 + 1e-3);
        }
    }

    #[test]
    fn zero_size_viewport_is_a_noop() {
        let mut f = field(0.0, 0.0);
        assert!(f.is_empty());
        f.advance(Stage::Stable, 0.0); // must not panic
        assert!(f.is_empty());
    }

    #[test]
    fn resize_rebuilds_wholesale() {
        let mut f = field(450.0, 450.0);
        f.advance(Stage::Stable, 0.0);
        f.init(900.0, 900.0);
        assert_eq!(f.particles().len(), 2200);
        assert_eq!(f.scale(), 20.0);
        for p in f.particles() {
            assert_eq!(p.vel, Vec2::ZERO);
        }
    }

    #[test]
    fn particle_zero_settles_onto_heart() {
        // 450×450 viewport gives scale 10; after 180 frames at 60 fps the
        // first particle sits within 2 px of its curve point.
        let mut f = field(450.0, 450.0);
        for _ in 0..180 {
            f.advance(Stage::Forming, 0.0);
        }
        let p = &f.particles()[0];
        let expected = Vec2::new(225.0, 225.0) + heart_point(0.0) * 10.0;
        assert!(
            p.pos.distance(expected) < 2.0,
            "particle 0 is {} px from its target",
            p.pos.distance(expected)
        );
    }
}
