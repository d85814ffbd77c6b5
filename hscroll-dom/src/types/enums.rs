#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    Fixed(f32),
    #[default]
    Auto,
    Fill,
    /// Fraction (0.0 - 1.0) of the parent's inner size.
    Percent(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    /// Positioned by `left`/`top` relative to the parent box, outside the flow.
    Absolute,
}

/// Whether an element takes part in layout, hit testing and painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Visible,
    None,
}
