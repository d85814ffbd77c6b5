use std::time::Instant;

use crate::animation::AnimationState;
use crate::buffer::{Buffer, Cell};
use crate::document::Document;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::char_width;
use crate::types::Position;

/// Paint the document's text content into `buf` at the positions the
/// animation state says are on screen at `now`.
pub fn render_to_buffer(document: &Document, animation: &AnimationState, buf: &mut Buffer, now: Instant) {
    let screen = Rect::from_size(buf.width() as f32, buf.height() as f32);
    let mut painter = Painter {
        layout: document.layout(),
        animation,
        now,
        buf,
    };
    painter.element(document.root(), 0.0, screen);
}

struct Painter<'a> {
    layout: &'a LayoutResult,
    animation: &'a AnimationState,
    now: Instant,
    buf: &'a mut Buffer,
}

impl Painter<'_> {
    fn element(&mut self, element: &Element, shift: f32, clip: Rect) {
        let Some(rect) = self.layout.get(&element.id) else {
            return;
        };

        // The box itself never moves with its own translation. Children were
        // laid out at the logical translation; during a transition the
        // painted one lags behind it, and the lag carries to the subtree.
        let painted = rect.translate(shift);
        let translate = self
            .animation
            .painted_translate(&element.id, self.now)
            .unwrap_or(element.translate_x);
        let content_shift = shift + translate - element.translate_x;

        let clip = if element.clip {
            match clip.intersect(&painted) {
                Some(clip) => clip,
                None => return,
            }
        } else {
            clip
        };

        match &element.content {
            Content::Text(text) => self.text(text, painted.translate(translate), clip),
            Content::Children(children) => {
                // Absolute children paint above the flow
                let flow = children.iter().filter(|c| c.position != Position::Absolute);
                let absolute = children.iter().filter(|c| c.position == Position::Absolute);
                for child in flow.chain(absolute) {
                    self.element(child, content_shift, clip);
                }
            }
            Content::None => {}
        }
    }

    fn text(&mut self, text: &str, rect: Rect, clip: Rect) {
        for (line_index, line) in text.lines().enumerate() {
            let y = rect.y.round() + line_index as f32;
            if y >= rect.bottom() || y >= clip.bottom() {
                break;
            }
            if y < clip.y {
                continue;
            }

            let mut x = rect.x.round();
            for ch in line.chars() {
                let width = char_width(ch) as f32;
                if width == 0.0 {
                    continue;
                }
                let fits = x >= clip.x && x + width <= clip.right() && x + width <= rect.right();
                if fits {
                    self.buf.set(x as u16, y as u16, Cell::new(ch));
                    if width > 1.0 {
                        self.buf.set(
                            x as u16 + 1,
                            y as u16,
                            Cell {
                                char: ' ',
                                wide_continuation: true,
                            },
                        );
                    }
                }
                x += width;
            }
        }
    }
}
