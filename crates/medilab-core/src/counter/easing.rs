//! Pure easing functions for counter animations
//!
//! Maps input [0, 1] to output [0, 1] with various deceleration curves.

pub use crate::config::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::Cubic => ease_out_pow(t, 3),
            EasingType::Quartic => ease_out_quart(t),
            EasingType::Quintic => ease_out_pow(t, 5),
        }
    }
}

/// Quartic ease-out: f(t) = 1 - (1-t)⁴
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    ease_out_pow(t, 4)
}

#[inline]
fn ease_out_pow(t: f64, exponent: i32) -> f64 {
    1.0 - (1.0 - t).powi(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quartic,
        EasingType::Quintic,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?} at t=0", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=100 {
                let t = i as f64 / 100.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_quartic_midpoint() {
        // 1 - 0.5^4
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
        assert!((EasingType::Quartic.apply(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(EasingType::Quartic.apply(-0.5), 0.0);
        assert_eq!(EasingType::Quartic.apply(3.0), 1.0);
    }
}
