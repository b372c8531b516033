//! Timing curves for transitions.

/// A CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// `ease`, used for the page flip and the tilt snap-back.
pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

/// `ease-in-out`, used for the carousel slide strip.
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn curve(p1: f32, p2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    fn curve_derivative(p1: f32, p2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    }

    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    pub fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }

        // Newton first, bisection if the slope is too flat to trust.
        let mut s = t;
        for _ in 0..8 {
            let x = Self::curve(self.x1, self.x2, s) - t;
            if x.abs() < 1e-5 {
                return Self::curve(self.y1, self.y2, s);
            }
            let dx = Self::curve_derivative(self.x1, self.x2, s);
            if dx.abs() < 1e-6 {
                break;
            }
            s -= x / dx;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = t;
        for _ in 0..32 {
            let x = Self::curve(self.x1, self.x2, s);
            if (x - t).abs() < 1e-5 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        Self::curve(self.y1, self.y2, s)
    }
}

/// Linear progress of a transition that started at `started_at` and lasts
/// `duration` seconds, clamped to `[0, 1]`.
pub fn progress(started_at: f64, duration: f64, now: f64) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    ((now - started_at) / duration).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(EASE.sample(0.0), 0.0);
        assert_eq!(EASE.sample(1.0), 1.0);
        assert_eq!(EASE_IN_OUT.sample(-3.0), 0.0);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=20 {
            let v = EASE.sample(i as f32 / 20.0);
            assert!(v >= last, "ease went backwards at step {i}");
            last = v;
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_at_midpoint() {
        assert!((EASE_IN_OUT.sample(0.5) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn progress_clamps() {
        assert_eq!(progress(1.0, 2.0, 0.0), 0.0);
        assert_eq!(progress(1.0, 2.0, 2.0), 0.5);
        assert_eq!(progress(1.0, 2.0, 9.0), 1.0);
        assert_eq!(progress(1.0, 0.0, 1.0), 1.0);
    }
}
