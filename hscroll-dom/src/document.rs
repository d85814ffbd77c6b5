use crossterm::event::{Event as CrosstermEvent, MouseEventKind};

use crate::element::{self, Element};
use crate::event::{Event, MouseButton, LINE_DELTA};
use crate::hit::hit_test;
use crate::layout::{layout, LayoutResult, Rect};
use crate::style::Stylesheet;

/// A laid-out element tree plus the page-level state that goes with it:
/// viewport, stylesheet, pointer capture and the pending mouse press.
///
/// Every mutation made through the document relays out the tree, so rects
/// read back afterwards always describe the current state.
#[derive(Debug)]
pub struct Document {
    root: Element,
    viewport: Rect,
    styles: Stylesheet,
    layout: LayoutResult,
    /// Element that currently owns pointer input.
    capture: Option<String>,
    /// Button and target of the last press, used to synthesize clicks.
    press: Option<(MouseButton, Option<String>)>,
}

impl Document {
    pub fn new(root: Element, viewport: Rect) -> Self {
        let mut document = Self {
            root,
            viewport,
            styles: Stylesheet::new(),
            layout: LayoutResult::new(),
            capture: None,
            press: None,
        };
        document.relayout();
        document
    }

    pub fn with_stylesheet(mut self, styles: Stylesheet) -> Self {
        self.styles = styles;
        self.relayout();
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.relayout();
        }
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.styles
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn relayout(&mut self) {
        self.layout = layout(&self.root, self.viewport, &self.styles);
    }

    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.layout.get(id).copied()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.root, id)
    }

    /// Mutate an element in place and relayout.
    /// Returns None if no element has that id.
    pub fn update<R>(&mut self, id: &str, f: impl FnOnce(&mut Element) -> R) -> Option<R> {
        let element = element::find_element_mut(&mut self.root, id)?;
        let result = f(element);
        self.relayout();
        Some(result)
    }

    /// An element is displayed when layout gave it a box.
    pub fn is_displayed(&self, id: &str) -> bool {
        self.layout.contains_key(id)
    }

    /// Returns true if `id` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: &str, id: &str) -> bool {
        element::contains(&self.root, ancestor, id)
    }

    /// Deepest displayed element under the point.
    pub fn target_at(&self, x: f32, y: f32) -> Option<String> {
        hit_test(&self.layout, &self.root, x, y)
    }

    // ---------------------------------------------------------------------
    // Pointer capture
    // ---------------------------------------------------------------------

    /// Route pointer input to `owner` until released.
    /// Fails if another element holds the capture.
    pub fn capture_pointer(&mut self, owner: &str) -> bool {
        match &self.capture {
            Some(current) if current != owner => {
                log::debug!("[capture] {owner} denied, held by {current}");
                false
            }
            _ => {
                self.capture = Some(owner.to_string());
                true
            }
        }
    }

    /// Release the capture if `owner` holds it.
    pub fn release_pointer(&mut self, owner: &str) -> bool {
        if self.capture.as_deref() == Some(owner) {
            self.capture = None;
            true
        } else {
            false
        }
    }

    pub fn pointer_capture(&self) -> Option<&str> {
        self.capture.as_deref()
    }

    // ---------------------------------------------------------------------
    // Terminal input
    // ---------------------------------------------------------------------

    /// Convert raw terminal input into targeted events.
    ///
    /// A release on the element that received the press is followed by a
    /// `Click` on that element.
    pub fn translate(&mut self, raw: &CrosstermEvent) -> Vec<Event> {
        match raw {
            CrosstermEvent::Mouse(mouse) => {
                let x = mouse.column as f32;
                let y = mouse.row as f32;
                let target = self.target_at(x, y);

                match mouse.kind {
                    MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                        let sign = if mouse.kind == MouseEventKind::ScrollDown {
                            1.0
                        } else {
                            -1.0
                        };
                        vec![Event::Wheel {
                            target,
                            x,
                            y,
                            delta_x: 0.0,
                            delta_y: sign * LINE_DELTA,
                        }]
                    }
                    MouseEventKind::ScrollRight | MouseEventKind::ScrollLeft => {
                        let sign = if mouse.kind == MouseEventKind::ScrollRight {
                            1.0
                        } else {
                            -1.0
                        };
                        vec![Event::Wheel {
                            target,
                            x,
                            y,
                            delta_x: sign * LINE_DELTA,
                            delta_y: 0.0,
                        }]
                    }
                    MouseEventKind::Down(button) => {
                        let button = MouseButton::from(button);
                        self.press = Some((button, target.clone()));
                        vec![Event::MouseDown {
                            target,
                            x,
                            y,
                            button,
                        }]
                    }
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                        vec![Event::MouseMove { x, y }]
                    }
                    MouseEventKind::Up(button) => {
                        let button = MouseButton::from(button);
                        let mut events = vec![Event::MouseUp {
                            target: target.clone(),
                            x,
                            y,
                            button,
                        }];
                        if let Some((pressed, pressed_target)) = self.press.take() {
                            if pressed == button && pressed_target.is_some() && pressed_target == target {
                                events.push(Event::Click {
                                    target,
                                    x,
                                    y,
                                    button,
                                });
                            }
                        }
                        events
                    }
                }
            }
            CrosstermEvent::FocusLost => {
                self.press = None;
                vec![Event::Blur]
            }
            CrosstermEvent::Resize(width, height) => vec![Event::Resize {
                width: *width,
                height: *height,
            }],
            _ => Vec::new(),
        }
    }
}
