//! Scalar animation for the thumb hover highlight.
//!
//! Sharp exponential easing; the highlight should read as instant feedback,
//! not a soft fade.

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Exponential ease-out (sharp snap to target).
    #[default]
    ExponentialOut,
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::ExponentialOut => {
                // Sharp snap: 1 - 2^(-10t)
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::Instant => 1.0,
        }
    }
}

/// A retargetable scalar animation.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Value at the start of the current transition.
    start: f32,
    /// Target value.
    target: f32,
    /// Progress through the current transition (0-1).
    t: f32,
    /// Easing curve.
    easing: Easing,
}

impl Animation {
    /// Duration of a full transition in seconds.
    const DURATION: f32 = 0.2;

    /// Creates a new animation resting at `initial`.
    #[must_use]
    pub fn new(initial: f32, easing: Easing) -> Self {
        Self {
            start: initial,
            target: initial,
            t: 1.0,
            easing,
        }
    }

    /// Retargets the animation, starting a new transition from the current
    /// value. Setting the current target again is a no-op.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > f32::EPSILON {
            self.start = self.value();
            self.target = target;
            self.t = 0.0;
        }
    }

    /// Advances the animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.t = (self.t + dt / Self::DURATION).min(1.0);
    }

    /// Returns the current animated value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.start + (self.target - self.start) * self.easing.apply(self.t)
    }

    /// Returns true once the transition has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.t >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_out_is_sharp() {
        let easing = Easing::ExponentialOut;

        // At t=0.3 (30% through), exponential should be >80% done
        let value = easing.apply(0.3);
        assert!(value > 0.8, "Exponential out should snap quickly: {value}");
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut anim = Animation::new(0.0, Easing::ExponentialOut);
        anim.set_target(100.0);

        // Run for full duration
        for _ in 0..20 {
            anim.update(0.016); // ~60fps
        }

        assert!((anim.value() - 100.0).abs() < 0.01);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut anim = Animation::new(0.0, Easing::Linear);
        anim.set_target(10.0);
        anim.update(0.1); // halfway

        anim.set_target(0.0);
        assert!((anim.value() - 5.0).abs() < 0.01);
    }
}
