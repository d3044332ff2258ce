//! Easing functions

/// Easing function types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    /// Ease out past the target and settle back. The value is the
    /// overshoot strength; button flashes use 1.7.
    Overshoot(f32),
}

impl Default for Easing {
    fn default() -> Self {
        Self::Linear
    }
}

impl Easing {
    /// Apply easing function to progress value (0-1)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            Easing::Overshoot(overshoot) => {
                let s = 1.0 - t;
                1.0 - s * s * ((overshoot + 1.0) * s - overshoot)
            }
        }
    }

    /// Interpolate from `a` to `b` with this easing
    pub fn interpolate(&self, a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * self.apply(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::Overshoot(40.0)] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{:?}", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?}", easing);
        }
    }

    #[test]
    fn test_overshoot_exceeds_target() {
        let mid = Easing::Overshoot(40.0).interpolate(1.0, 2.0, 0.5);
        assert!(mid > 2.0);
    }

    #[test]
    fn test_clamps_progress() {
        assert_eq!(Easing::Linear.apply(3.0), 1.0);
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
    }
}
