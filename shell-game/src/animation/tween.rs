use std::time::Duration;

/// The screen axis a tween writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal, grows to the right
    X,
    /// Vertical, grows downward
    Y,
}

/// A timed linear interpolation from a start value to an end value.
///
/// The tween holds no clock of its own: the owner advances it with
/// [`Tween::tick`], passing however much time elapsed since the last call.
/// The sampled fraction is clamped at 1.0, and once complete the tween
/// reports *exactly* its end value rather than the interpolated one, so a
/// finished movement never leaves a float-rounding residue behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    start: f32,
    end: f32,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    /// A tween from `start` to `end` over `duration`.
    ///
    /// A zero `duration` is complete immediately and samples at `end`.
    pub fn new(start: f32, end: f32, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance the tween by `dt` and return the sampled value
    pub fn tick(&mut self, dt: Duration) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// The value at the current elapsed fraction
    pub fn value(&self) -> f32 {
        if self.is_complete() {
            return self.end;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.start + (self.end - self.start) * t
    }

    /// Has the elapsed fraction reached 1.0?
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn samples_linearly() {
        let mut tween = Tween::new(100., 200., Duration::from_millis(350));
        assert_relative_eq!(tween.value(), 100.);
        assert!(!tween.is_complete());

        let halfway = tween.tick(Duration::from_millis(175));
        assert_relative_eq!(halfway, 150.);
        assert!(!tween.is_complete());
    }

    #[test]
    fn overshoot_clamps_to_exact_end() {
        let mut tween = Tween::new(450., 330., Duration::from_millis(350));
        let value = tween.tick(Duration::from_secs(10));
        assert_eq!(value, 330.);
        assert!(tween.is_complete());

        // Further ticks stay pinned at the end value.
        assert_eq!(tween.tick(Duration::from_millis(16)), 330.);
    }

    #[test]
    fn zero_duration_is_complete_immediately() {
        let tween = Tween::new(1., 2., Duration::ZERO);
        assert!(tween.is_complete());
        assert_eq!(tween.value(), 2.);
    }

    #[test]
    fn completes_on_exact_boundary() {
        let mut tween = Tween::new(0., 120., Duration::from_millis(350));
        for _ in 0..35 {
            tween.tick(Duration::from_millis(10));
        }
        assert!(tween.is_complete());
        assert_eq!(tween.value(), 120.);
    }
}
