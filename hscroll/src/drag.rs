//! Pointer tracking for click-and-drag scrolling.

/// Pointer positions of an active primary-button drag.
///
/// Deltas are `previous - current`: moving the pointer left yields a
/// positive delta, which scrolls toward the end of the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub start_x: f32,
    pub previous_x: f32,
    pub current_x: f32,
}

impl DragState {
    pub fn start(x: f32) -> Self {
        Self {
            start_x: x,
            previous_x: x,
            current_x: x,
        }
    }

    /// Move the pointer to `x`, returning the delta since the last position.
    pub fn track(&mut self, x: f32) -> f32 {
        let delta = self.current_x - x;
        self.previous_x = self.current_x;
        self.current_x = x;
        delta
    }

    /// Delta still owed when the button is released at `x`.
    pub fn finish(self, x: f32) -> f32 {
        self.current_x - x
    }

    /// Total scroll delta implied by the drag so far.
    pub fn travelled(&self) -> f32 {
        self.start_x - self.current_x
    }
}
