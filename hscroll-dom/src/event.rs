/// Pixels of wheel delta reported for one terminal scroll step.
pub const LINE_DELTA: f32 = 3.0;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse wheel turned over `target`
    Wheel {
        target: Option<String>,
        x: f32,
        y: f32,
        delta_x: f32,
        delta_y: f32,
    },
    /// Mouse button pressed
    MouseDown {
        target: Option<String>,
        x: f32,
        y: f32,
        button: MouseButton,
    },
    /// Pointer moved, with or without a button held
    MouseMove { x: f32, y: f32 },
    /// Mouse button released
    MouseUp {
        target: Option<String>,
        x: f32,
        y: f32,
        button: MouseButton,
    },
    /// Press and release landed on the same element
    Click {
        target: Option<String>,
        x: f32,
        y: f32,
        button: MouseButton,
    },
    /// The host window or terminal lost focus
    Blur,
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// The button that starts drags and activates controls.
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed: default action prevented, propagation stopped.
    Consumed,
    /// Event started a drag; the handler now owns the pointer.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
