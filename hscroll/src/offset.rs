//! The offset engine: single source of truth for the strip position.

use std::time::{Duration, Instant};

/// Where a delta came from. Decides debouncing and animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Wheel,
    Drag,
    Control,
}

/// An accepted offset change, to be reflected by presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub offset: f32,
    pub animate: bool,
}

/// Clamped horizontal offset with wheel debouncing.
///
/// Invariant: `0 <= offset <= max_offset`. With `max_offset == 0` the
/// offset never changes.
#[derive(Debug, Clone)]
pub struct OffsetEngine {
    offset: f32,
    max_offset: f32,
    wheel_interval: Duration,
    last_wheel: Option<Instant>,
}

impl OffsetEngine {
    pub fn new(max_offset: f32, wheel_interval: Duration) -> Self {
        Self {
            offset: 0.0,
            max_offset: max_offset.max(0.0),
            wheel_interval,
            last_wheel: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    pub fn is_scrollable(&self) -> bool {
        self.max_offset > 0.0
    }

    pub fn at_start(&self) -> bool {
        self.offset == 0.0
    }

    pub fn at_end(&self) -> bool {
        self.offset == self.max_offset
    }

    /// Time of the last accepted wheel move.
    pub fn last_wheel(&self) -> Option<Instant> {
        self.last_wheel
    }

    /// Apply a signed pixel delta.
    ///
    /// Wheel deltas are dropped when they would not move the strip or when
    /// they arrive within the wheel interval of the last accepted wheel move.
    /// Drag and control deltas are always accepted, even when the clamped
    /// result equals the current offset. Wheel moves are always animated.
    pub fn apply(&mut self, delta: f32, source: Source, animate: bool, now: Instant) -> Option<Move> {
        if !self.is_scrollable() || !delta.is_finite() {
            return None;
        }

        let tentative = (self.offset + delta).clamp(0.0, self.max_offset);

        if source == Source::Wheel {
            let too_soon = self
                .last_wheel
                .is_some_and(|last| now.saturating_duration_since(last) < self.wheel_interval);
            if tentative == self.offset || too_soon {
                log::debug!(
                    "[offset] wheel dropped: pixels={delta} offset={} tentative={tentative} too_soon={too_soon}",
                    self.offset
                );
                return None;
            }
            self.last_wheel = Some(now);
        }

        self.offset = tentative;

        Some(Move {
            offset: tentative,
            animate: animate || source == Source::Wheel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_interval_is_measured_from_accepted_moves() {
        let t0 = Instant::now();
        let mut engine = OffsetEngine::new(1000.0, Duration::from_millis(20));

        assert!(engine.apply(10.0, Source::Wheel, false, t0).is_some());
        // Rejected at 15ms: does not push the window forward
        assert!(engine
            .apply(10.0, Source::Wheel, false, t0 + Duration::from_millis(15))
            .is_none());
        assert!(engine
            .apply(10.0, Source::Wheel, false, t0 + Duration::from_millis(21))
            .is_some());
        assert_eq!(engine.last_wheel(), Some(t0 + Duration::from_millis(21)));
    }

    #[test]
    fn test_non_finite_delta_is_ignored() {
        let mut engine = OffsetEngine::new(100.0, Duration::ZERO);
        assert!(engine.apply(f32::NAN, Source::Drag, false, Instant::now()).is_none());
        assert!(engine.apply(f32::INFINITY, Source::Control, true, Instant::now()).is_none());
        assert_eq!(engine.offset(), 0.0);
    }
}
