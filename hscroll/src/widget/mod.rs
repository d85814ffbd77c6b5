//! The horizontal scroll widget.

mod events;
mod render;

use std::sync::Arc;

use hscroll_dom::{Document, Element, Size};

use crate::clock::{Clock, SystemClock};
use crate::config::ScrollConfig;
use crate::drag::DragState;
use crate::error::{ScrollError, Side};
use crate::geometry::Geometry;
use crate::offset::{OffsetEngine, Source};

/// Element ids of the two mounted controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlIds {
    pub left: String,
    pub right: String,
}

/// A horizontally scrollable strip mounted over a container element.
///
/// Mounting moves the container's items into an inner strip inside a
/// clipping outer wrapper, measures the strip once, and wires the optional
/// controls. From then on every position change goes through the offset
/// engine and is reflected on the document by [`HorizontalScroll::handle`]
/// or [`HorizontalScroll::scroll_by`].
///
/// # Example
///
/// ```ignore
/// let config = ScrollConfig::new()
///     .controls(ControlsConfig::new(Element::text("<"), Element::text(">")).pace(500.0));
/// let mut document = Document::new(page, viewport).with_stylesheet(stylesheet(&config));
/// let mut scroll = HorizontalScroll::mount(&mut document, "container", config)?;
///
/// for event in document.translate(&raw) {
///     scroll.handle(&mut document, &event);
/// }
/// ```
#[derive(Debug)]
pub struct HorizontalScroll {
    config: ScrollConfig,
    outer_id: String,
    inner_id: String,
    controls: Option<ControlIds>,
    geometry: Geometry,
    engine: OffsetEngine,
    /// Present only while the primary button is held after a press on the strip.
    drag: Option<DragState>,
    clock: Arc<dyn Clock>,
}

impl HorizontalScroll {
    /// Mount on `container_id` using the wall clock.
    pub fn mount(
        document: &mut Document,
        container_id: &str,
        config: ScrollConfig,
    ) -> Result<Self, ScrollError> {
        Self::mount_with_clock(document, container_id, config, Arc::new(SystemClock))
    }

    /// Mount on `container_id`, taking wheel timestamps from `clock`.
    pub fn mount_with_clock(
        document: &mut Document,
        container_id: &str,
        mut config: ScrollConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ScrollError> {
        let controls = if config.controls.enabled {
            let left = config
                .controls
                .left
                .take()
                .ok_or(ScrollError::MissingControl(Side::Left))?;
            let right = config
                .controls
                .right
                .take()
                .ok_or(ScrollError::MissingControl(Side::Right))?;
            Some((left, right))
        } else {
            config.controls.left = None;
            config.controls.right = None;
            None
        };

        let container = document
            .element(container_id)
            .ok_or_else(|| ScrollError::ElementNotFound(container_id.to_string()))?;
        if container.child_elements().is_empty() {
            return Err(ScrollError::EmptyContainer(container_id.to_string()));
        }

        let (outer_id, inner_id) = wrap_items(document, container_id, &config)?;
        let geometry = Geometry::measure(document, &inner_id)?;

        log::debug!(
            "[hscroll] mounted on {container_id}: inner_width={} visible={} max_offset={}",
            geometry.inner_width,
            geometry.visible_width,
            geometry.max_offset
        );

        let mut widget = Self {
            engine: OffsetEngine::new(geometry.max_offset, config.wheel_interval),
            config,
            outer_id,
            inner_id,
            controls: None,
            geometry,
            drag: None,
            clock,
        };

        if let Some((left, right)) = controls {
            widget.mount_controls(document, left, right);
        }

        Ok(widget)
    }

    /// Decorate the controls, set their initial visibility and place them
    /// around the strip: left first in the outer wrapper, right last.
    fn mount_controls(&mut self, document: &mut Document, left: Element, right: Element) {
        let config = &self.config;
        let left = left
            .class(config.control_class.as_str())
            .class(config.left_control_class.as_str());
        let right = right
            .class(config.control_class.as_str())
            .class(config.right_control_class.as_str());

        self.controls = Some(ControlIds {
            left: left.id.clone(),
            right: right.id.clone(),
        });

        document.update(&self.outer_id, |outer| {
            outer.prepend_child(left);
            outer.push_child(right);
        });

        self.update_controls(document);
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn offset(&self) -> f32 {
        self.engine.offset()
    }

    pub fn max_offset(&self) -> f32 {
        self.engine.max_offset()
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag(&self) -> Option<DragState> {
        self.drag
    }

    pub fn outer_id(&self) -> &str {
        &self.outer_id
    }

    pub fn inner_id(&self) -> &str {
        &self.inner_id
    }

    pub fn controls(&self) -> Option<&ControlIds> {
        self.controls.as_ref()
    }

    /// Scroll by `delta` pixels as a control click would: animated and
    /// never debounced. Returns whether the offset engine accepted it.
    pub fn scroll_by(&mut self, document: &mut Document, delta: f32) -> bool {
        self.apply(document, delta, Source::Control, true)
    }

    /// Feed a delta through the engine and reflect an accepted move.
    fn apply(&mut self, document: &mut Document, delta: f32, source: Source, animate: bool) -> bool {
        let now = self.clock.now();
        match self.engine.apply(delta, source, animate, now) {
            Some(mv) => {
                self.sync(document, mv);
                true
            }
            None => false,
        }
    }
}

/// Move every item of the container into a fresh inner strip wrapped in a
/// fresh outer element, and append the wrapper back into the container.
fn wrap_items(
    document: &mut Document,
    container_id: &str,
    config: &ScrollConfig,
) -> Result<(String, String), ScrollError> {
    let inner = Element::row()
        .class(config.inner_class.as_str())
        .width(Size::Fill);
    let outer = Element::col()
        .class(config.outer_class.as_str())
        .width(Size::Fill)
        .clip(true);
    let ids = (outer.id.clone(), inner.id.clone());

    document
        .update(container_id, move |container| {
            let items = container.take_children();
            container.push_child(outer.child(inner.children(items)));
        })
        .ok_or_else(|| ScrollError::ElementNotFound(container_id.to_string()))?;

    Ok(ids)
}
