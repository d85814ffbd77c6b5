//! Content span and scroll range of the strip.

use hscroll_dom::{Document, Rect};

use crate::error::ScrollError;

/// Measured once after mount; not recomputed on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Left edge of the first item to right edge of the last item.
    pub inner_width: f32,
    /// Width of the strip's own box, i.e. the visible window.
    pub visible_width: f32,
    /// `inner_width - visible_width`, floored at zero.
    pub max_offset: f32,
}

impl Geometry {
    /// Measure the laid-out strip `inner_id`.
    ///
    /// The span is taken from the first and last displayed items rather than
    /// the strip's box, which is only as wide as the window.
    pub fn measure(document: &Document, inner_id: &str) -> Result<Self, ScrollError> {
        let inner = document
            .element(inner_id)
            .ok_or_else(|| ScrollError::ElementNotFound(inner_id.to_string()))?;
        let bounds = document
            .rect(inner_id)
            .ok_or_else(|| ScrollError::NotLaidOut(inner_id.to_string()))?;

        let items = inner.child_elements();
        let first = items.iter().find_map(|item| document.rect(&item.id));
        let last = items.iter().rev().find_map(|item| document.rect(&item.id));

        match (first, last) {
            (Some(first), Some(last)) => Ok(Self::from_bounds(bounds, first, last)),
            _ => Err(ScrollError::EmptyContainer(inner_id.to_string())),
        }
    }

    pub fn from_bounds(inner: Rect, first: Rect, last: Rect) -> Self {
        let inner_width = last.right() - first.x;
        Self {
            inner_width,
            visible_width: inner.width,
            max_offset: (inner_width - inner.width).max(0.0),
        }
    }

    /// False when all content fits in the window.
    pub fn is_scrollable(&self) -> bool {
        self.max_offset > 0.0
    }
}
