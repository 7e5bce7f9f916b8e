//! Scalar interpolation helpers used by the geometry and animation code.

/// Tolerance for approximate float comparison and degenerate-length guards.
pub const EPSILON: f64 = 1e-10;

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Hermite smoothstep between `edge0` and `edge1`, clamped to [0, 1].
#[inline]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if x <= edge0 {
        return 0.0;
    }
    if x >= edge1 {
        return 1.0;
    }
    let t = (x - edge0) / (edge1 - edge0);
    (t * t * (3.0 - 2.0 * t)).clamp(0.0, 1.0)
}

#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(-1.0, 1.0, 0.5), 0.0);
    }

    #[test]
    fn smoothstep_clamps_outside_edges() {
        assert_eq!(smoothstep(0.2, 0.8, 0.0), 0.0);
        assert_eq!(smoothstep(0.2, 0.8, 0.2), 0.0);
        assert_eq!(smoothstep(0.2, 0.8, 0.8), 1.0);
        assert_eq!(smoothstep(0.2, 0.8, 1.5), 1.0);
    }

    #[test]
    fn smoothstep_midpoint_and_monotonicity() {
        assert!(approx_eq(smoothstep(0.0, 1.0, 0.5), 0.5));
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = smoothstep(0.2, 0.8, i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn approx_eq_tolerance() {
        assert!(approx_eq(1.0, 1.0 + EPSILON * 0.5));
        assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
    }
}
