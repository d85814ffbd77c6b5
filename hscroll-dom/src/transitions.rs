use std::time::Duration;

/// How a translate transition runs: its length and its curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Eased progress in `0.0..=1.0` after `elapsed`.
    /// A zero duration is complete immediately.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration {
            return 1.0;
        }
        let linear = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(linear)
    }
}

/// Timing curve of a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` (0.0 to 1.0) onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t.powi(2),
            Easing::EaseOut => 1.0 - (1.0 - t).powi(2),
            Easing::EaseInOut if t < 0.5 => 2.0 * t.powi(2),
            Easing::EaseInOut => 1.0 - (2.0 - 2.0 * t).powi(2) / 2.0,
        }
    }
}
