use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::types::Position;

/// Find the deepest laid-out element at the given coordinates.
///
/// Children are checked in reverse paint order (absolute children above
/// flow children, later siblings above earlier ones), elements
/// without a rect (not displayed) are skipped together with their subtree,
/// and descendants of a clipping element only hit inside its box.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: f32, y: f32) -> Option<String> {
    hit_test_element(layout, root, x, y, None)
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: f32,
    y: f32,
    clip: Option<Rect>,
) -> Option<String> {
    let rect = layout.get(&element.id)?;

    if clip.is_some_and(|clip| !clip.contains(x, y)) {
        return None;
    }

    let child_clip = if element.clip {
        match clip {
            Some(clip) => Some(clip.intersect(rect)?),
            None => Some(*rect),
        }
    } else {
        clip
    };

    // Check children first, they may overflow this element's box.
    // Absolute children paint above flow children, so they win.
    if let Content::Children(children) = &element.content {
        let absolute = children.iter().rev().filter(|c| c.position == Position::Absolute);
        let flow = children.iter().rev().filter(|c| c.position != Position::Absolute);
        for child in absolute.chain(flow) {
            if let Some(id) = hit_test_element(layout, child, x, y, child_clip) {
                return Some(id);
            }
        }
    }

    if rect.contains(x, y) {
        Some(element.id.clone())
    } else {
        None
    }
}
