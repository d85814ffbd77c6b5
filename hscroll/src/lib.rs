//! Horizontally scrollable strip widget.
//!
//! [`HorizontalScroll`] is mounted over a container element of a
//! [`hscroll_dom::Document`]. It wraps the container's items in an outer
//! (clipping) and inner (translated) element and moves the inner strip in
//! response to wheel, drag and optional left/right control input, keeping a
//! single clamped offset as the source of truth.

pub mod clock;
pub mod config;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod offset;
pub mod style;
pub mod widget;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ControlsConfig, ScrollConfig};
pub use drag::DragState;
pub use error::{ScrollError, Side};
pub use geometry::Geometry;
pub use offset::{Move, OffsetEngine, Source};
pub use style::stylesheet;
pub use widget::{ControlIds, HorizontalScroll};
