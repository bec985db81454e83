use serde::Serialize;
use utoipa::ToSchema;

use super::penetration::PenetrationRatios;

/// Fernandez-Gausti squircular norm of two ratios in [0, 1].
///
/// Argument order follows the blending stages: range before miss distance,
/// then horizontal before vertical.
pub fn fg_norm(x: f64, y: f64) -> f64 {
    let x2 = x * x;
    (x2 + (1.0 - x2) * y * y).sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct BlendedPenetration {
    /// FG(RangePen, HMDPen)
    pub horizontal: f64,
    /// FG(horizontal, DHPen)
    pub combined: f64,
}

impl BlendedPenetration {
    pub fn from_ratios(ratios: &PenetrationRatios) -> Self {
        let horizontal = fg_norm(ratios.range_pen, ratios.hmd_pen);
        let combined = fg_norm(horizontal, ratios.dh_pen);
        Self {
            horizontal,
            combined,
        }
    }
}

/// Severity in [0, 100]; 100 is full penetration.
pub fn severity_from_ratios(ratios: &PenetrationRatios) -> f64 {
    let blended = BlendedPenetration::from_ratios(ratios);
    // Rounding can leave the norm an ulp above 1.
    (100.0 * (1.0 - blended.combined)).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ratios(range_pen: f64, hmd_pen: f64, dh_pen: f64) -> PenetrationRatios {
        PenetrationRatios {
            range_pen,
            hmd_pen,
            dh_pen,
        }
    }

    #[test]
    fn norm_reduces_to_single_argument_on_axes() {
        assert_eq!(fg_norm(0.0, 0.0), 0.0);
        assert_relative_eq!(fg_norm(0.3, 0.0), 0.3, max_relative = 1e-12);
        assert_relative_eq!(fg_norm(0.0, 0.7), 0.7, max_relative = 1e-12);
    }

    #[test]
    fn norm_saturates_when_either_argument_is_one() {
        assert_eq!(fg_norm(1.0, 0.2), 1.0);
        assert_relative_eq!(fg_norm(0.2, 1.0), 1.0, max_relative = 1e-12);
        assert_eq!(fg_norm(1.0, 1.0), 1.0);
    }

    #[test]
    fn norm_rounds_the_corner() {
        // Between Chebyshev (max) and Euclidean for interior points
        let v = fg_norm(0.6, 0.8);
        assert_relative_eq!(v, (0.36_f64 + 0.64 * 0.64).sqrt(), max_relative = 1e-12);
        assert!(v > 0.8);
        assert!(v < 1.0);
    }

    #[test]
    fn norm_stays_in_unit_interval() {
        for i in 0..=20 {
            for j in 0..=20 {
                let v = fg_norm(i as f64 / 20.0, j as f64 / 20.0);
                assert!((0.0..=1.0 + 1e-15).contains(&v), "fg({}, {}) = {}", i, j, v);
            }
        }
    }

    #[test]
    fn blending_applies_horizontal_stage_first() {
        let r = ratios(0.5, 0.5, 0.4);
        let blended = BlendedPenetration::from_ratios(&r);
        assert_relative_eq!(blended.horizontal, fg_norm(0.5, 0.5));
        assert_relative_eq!(blended.combined, fg_norm(blended.horizontal, 0.4));
    }

    #[test]
    fn severity_bounds() {
        assert_eq!(severity_from_ratios(&ratios(0.0, 0.0, 0.0)), 100.0);
        assert_eq!(severity_from_ratios(&ratios(1.0, 1.0, 1.0)), 0.0);
        assert_eq!(severity_from_ratios(&ratios(0.0, 0.0, 1.0)), 0.0);
    }

    #[test]
    fn severity_of_pure_range_penetration() {
        let s = severity_from_ratios(&ratios(0.25, 0.0, 0.0));
        assert_relative_eq!(s, 75.0, max_relative = 1e-12);
    }
}
