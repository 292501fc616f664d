// curve.rs
//
// The parametric heart curve every particle target is sampled from.
// No dependencies on the field or themes, just math.

use glam::Vec2;
use std::f32::consts::TAU;

/// Point on the heart curve for parameter `t` in radians.
///
/// x = 16·sin³(t), y = −(13·cos(t) − 5·cos(2t) − 2·cos(3t) − cos(4t)).
/// Output is in curve units: x spans [-16, 16], y spans roughly [-17, 13],
/// with positive y pointing down so the lobes sit above the tip on screen.
#[inline]
pub fn heart_point(t: f32) -> Vec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos()
        - 5.0 * (2.0 * t).cos()
        - 2.0 * (3.0 * t).cos()
        - (4.0 * t).cos());
    Vec2::new(x, y)
}

/// Curve parameter owned by sample `index` out of `count`.
/// Uniform over [0, 2π); the index → parameter mapping is fixed for the
/// lifetime of a field allocation.
#[inline]
pub fn sample_param(index: usize, count: usize) -> f32 {
    (index as f32 / count as f32) * TAU
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_stays_within_sixteen() {
        for i in 0..4096 {
            let t = (i as f32 / 4096.0) * TAU;
            let p = heart_point(t);
            assert!(p.x >= -16.0 && p.x <= 16.0, "x out of range at t={}: {}", t, p.x);
        }
    }

    #[test]
    fn mirror_symmetry_about_vertical_axis() {
        for i in 1..2048 {
            let t = (i as f32 / 2048.0) * TAU;
            let p = heart_point(t);
            let q = heart_point(TAU - t);
            assert!((q.x + p.x).abs() < 1e-3, "x not mirrored at t={}", t);
            assert!((q.y - p.y).abs() < 1e-3, "y not equal at t={}", t);
        }
    }

    #[test]
    fn tip_points_down() {
        // t = π is the bottom tip of the heart; y is positive (screen-down).
        let tip = heart_point(std::f32::consts::PI);
        assert!(tip.x.abs() < 1e-3);
        assert!(tip.y > 10.0);
    }

    #[test]
    fn sample_params_are_uniform_and_stable() {
        let a = sample_param(0, 2200);
        let b = sample_param(1100, 2200);
        assert_eq!(a, 0.0);
        assert!((b - std::f32::consts::PI).abs() < 1e-4);
        // Same index, same parameter: no reshuffling between calls.
        assert_eq!(sample_param(7, 2200), sample_param(7, 2200));
    }
}
