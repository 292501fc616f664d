//! One point mass of the heart silhouette.

use glam::Vec2;

/// A particle easing toward its per-frame target.
/// Lives in a contiguous arena; the owning index binds it to one fixed
/// heart-curve parameter until the field is reinitialized.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub target: Vec2,
    pub vel: Vec2,
    /// Disc radius in pixels.
    pub size: f32,
    /// Fill opacity in [0, 1].
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, target: Vec2, size: f32, alpha: f32) -> Self {
        Self {
            pos,
            target,
            vel: Vec2::ZERO,
            size,
            alpha,
        }
    }

    /// Damped spring step toward `self.target`.
    ///
    /// vel += (target − pos)·force; vel *= damping; pos += vel.
    /// With force 0.08 and damping 0.82 the particle settles in about one
    /// second of 60 fps frames without overshooting visibly.
    pub fn spring_step(&mut self, force: f32, damping: f32) {
        self.vel += (self.target - self.pos) * force;
        self.vel *= damping;
        self.pos += self.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORCE: f32 = 0.08;
    const DAMPING: f32 = 0.82;

    #[test]
    fn converges_to_fixed_target() {
        let mut p = Particle::new(Vec2::new(0.0, 0.0), Vec2::new(300.0, 200.0), 1.0, 1.0);
        for _ in 0..180 {
            p.spring_step(FORCE, DAMPING);
        }
        let dist = p.pos.distance(p.target);
        assert!(dist < 0.5, "did not settle, still {} px away", dist);
    }

    #[test]
    fn never_diverges_under_long_iteration() {
        let mut p = Particle::new(Vec2::new(-5000.0, 4000.0), Vec2::new(10.0, 10.0), 1.0, 1.0);
        for _ in 0..10_000 {
            p.spring_step(FORCE, DAMPING);
            assert!(p.pos.is_finite(), "position went non-finite");
            assert!(p.vel.is_finite(), "velocity went non-finite");
        }
        assert!(p.pos.distance(p.target) < 1e-3);
    }

    #[test]
    fn envelope_decays_monotonically() {
        // The step is slightly underdamped, so raw distance oscillates as it
        // crosses the target; the oscillation envelope must still shrink
        // every window.
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 1.0, 1.0);
        let window = 30;
        let mut prev_peak = f32::MAX;
        for _ in 0..6 {
            let mut peak: f32 = 0.0;
            for _ in 0..window {
                p.spring_step(FORCE, DAMPING);
                peak = peak.max(p.pos.distance(p.target));
            }
            assert!(peak < prev_peak, "envelope grew: {} -> {}", prev_peak, peak);
            prev_peak = peak;
        }
        assert!(prev_peak < 1.0);
    }

    #[test]
    fn stationary_at_target_stays_put() {
        let mut p = Particle::new(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0), 1.0, 1.0);
        p.spring_step(FORCE, DAMPING);
        assert_eq!(p.pos, Vec2::new(50.0, 50.0));
    }
}
