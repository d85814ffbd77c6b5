//! Input adapters: wheel, drag and control clicks.

use hscroll_dom::{Document, Event, EventResult, MouseButton};

use super::HorizontalScroll;
use crate::drag::DragState;
use crate::error::Side;
use crate::offset::Source;

impl HorizontalScroll {
    /// Handle one event. Events must be delivered in the order they happened.
    ///
    /// Pointer moves and releases are handled wherever they land, so a drag
    /// keeps tracking once the pointer leaves the strip.
    pub fn handle(&mut self, document: &mut Document, event: &Event) -> EventResult {
        match event {
            Event::Wheel {
                target, delta_y, ..
            } => self.on_wheel(document, target.as_deref(), *delta_y),
            Event::MouseDown {
                target, x, button, ..
            } => self.on_mouse_down(document, target.as_deref(), *x, *button),
            Event::MouseMove { x, .. } => self.on_mouse_move(document, *x),
            Event::MouseUp {
                target, x, button, ..
            } => self.on_mouse_up(document, target.as_deref(), *x, *button),
            Event::Click { target, button, .. } => self.on_click(document, target.as_deref(), *button),
            Event::Blur => self.on_blur(document),
            Event::Resize { .. } => EventResult::Ignored,
        }
    }

    fn on_wheel(&mut self, document: &mut Document, target: Option<&str>, delta_y: f32) -> EventResult {
        if !self.is_on_strip(document, target) {
            return EventResult::Ignored;
        }

        let pixels = delta_y / self.config.delta_divider;
        self.apply(document, pixels, Source::Wheel, false);

        // The page never scrolls under the strip, accepted or not
        EventResult::Consumed
    }

    fn on_mouse_down(
        &mut self,
        document: &mut Document,
        target: Option<&str>,
        x: f32,
        button: MouseButton,
    ) -> EventResult {
        if !button.is_primary() || !self.is_on_strip(document, target) || self.control_at(document, target).is_some() {
            return EventResult::Ignored;
        }

        if !document.capture_pointer(&self.inner_id) {
            return EventResult::Ignored;
        }

        log::trace!("[hscroll] drag start at x={x}");
        self.drag = Some(DragState::start(x));
        EventResult::StartDrag
    }

    fn on_mouse_move(&mut self, document: &mut Document, x: f32) -> EventResult {
        let Some(drag) = self.drag.as_mut() else {
            return EventResult::Ignored;
        };

        let delta = drag.track(x);
        self.apply(document, delta, Source::Drag, false);
        EventResult::Consumed
    }

    fn on_mouse_up(
        &mut self,
        document: &mut Document,
        target: Option<&str>,
        x: f32,
        button: MouseButton,
    ) -> EventResult {
        let Some(drag) = self.drag else {
            return EventResult::Ignored;
        };
        if self.control_at(document, target).is_some() || !button.is_primary() {
            return EventResult::Ignored;
        }

        self.drag = None;
        document.release_pointer(&self.inner_id);

        log::trace!(
            "[hscroll] drag end at x={x}, travelled {}",
            drag.travelled() + drag.finish(x)
        );
        self.apply(document, drag.finish(x), Source::Drag, false);
        EventResult::Consumed
    }

    fn on_click(&mut self, document: &mut Document, target: Option<&str>, button: MouseButton) -> EventResult {
        if !button.is_primary() {
            return EventResult::Ignored;
        }
        let Some(side) = self.control_at(document, target) else {
            return EventResult::Ignored;
        };

        let pace = self.config.controls.pace;
        let delta = match side {
            Side::Left => -pace,
            Side::Right => pace,
        };
        self.apply(document, delta, Source::Control, true);

        // Keep the click from reaching the strip underneath
        EventResult::Consumed
    }

    /// Losing focus mid-drag means the release may never arrive: end the
    /// drag where it is without applying anything further.
    fn on_blur(&mut self, document: &mut Document) -> EventResult {
        if self.drag.take().is_none() {
            return EventResult::Ignored;
        }
        document.release_pointer(&self.inner_id);
        log::debug!("[hscroll] drag cancelled on blur at offset {}", self.offset());
        EventResult::Consumed
    }

    fn is_on_strip(&self, document: &Document, target: Option<&str>) -> bool {
        target.is_some_and(|target| document.contains(&self.inner_id, target))
    }

    /// Which control, if any, `target` is or lies within.
    fn control_at(&self, document: &Document, target: Option<&str>) -> Option<Side> {
        let controls = self.controls.as_ref()?;
        let target = target?;
        if document.contains(&controls.left, target) {
            Some(Side::Left)
        } else if document.contains(&controls.right, target) {
            Some(Side::Right)
        } else {
            None
        }
    }
}
