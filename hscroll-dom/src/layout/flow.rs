use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::style::Stylesheet;
use crate::text::max_line_width;
use crate::types::{Direction, Display, Position, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out a tree into `available`. Elements resolved to `Display::None`
/// (and their subtrees) get no rect.
pub fn layout(element: &Element, available: Rect, styles: &Stylesheet) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, styles, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, styles: &Stylesheet, result: &mut LayoutResult) {
    if styles.display(element) == Display::None {
        return;
    }

    // Absolute elements position themselves inside the parent box
    if element.position == Position::Absolute {
        let x = available.x + element.left.unwrap_or(0.0);
        let y = available.y + element.top.unwrap_or(0.0);
        let width = resolve_size(element.width, available.width, element, styles, true);
        let height = resolve_size(element.height, available.height, element, styles, false);
        place(element, Rect::new(x, y, width, height), styles, result);
        return;
    }

    let margin = &element.margin;
    let after_margin = available.shrink(margin.top, margin.right, margin.bottom, margin.left);

    let width = resolve_size(element.width, after_margin.width, element, styles, true);
    let height = resolve_size(element.height, after_margin.height, element, styles, false);
    place(
        element,
        Rect::new(after_margin.x, after_margin.y, width, height),
        styles,
        result,
    );
}

/// Record the element's box and lay the children out inside it.
///
/// `translate_x` moves the content only: the element's own box stays where
/// flow put it, so it keeps covering (and receiving input over) the same
/// area while its children slide underneath.
fn place(element: &Element, rect: Rect, styles: &Stylesheet, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);
    layout_children(element, rect.translate(element.translate_x), styles, result);
}

fn layout_children(element: &Element, rect: Rect, styles: &Stylesheet, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let (flow_children, absolute_children): (Vec<&Element>, Vec<&Element>) = children
        .iter()
        .filter(|c| styles.display(c) != Display::None)
        .partition(|c| c.position != Position::Absolute);

    let padding = &element.padding;
    let inner = rect.shrink(padding.top, padding.right, padding.bottom, padding.left);

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed sizes and fill count
    let mut fixed_total = 0.0;
    let mut fill_count = 0usize;
    let gap_total = element.gap * flow_children.len().saturating_sub(1) as f32;

    for child in &flow_children {
        let (margin_before, margin_after) = main_margins(child, is_row);
        fixed_total += margin_before + margin_after;
        match main_axis_size(child, is_row) {
            Size::Fixed(n) => fixed_total += n,
            Size::Auto => fixed_total += estimate_size(child, is_row, styles),
            Size::Fill => fill_count += 1,
            Size::Percent(p) => fixed_total += main_size * p,
        }
    }

    let remaining = (main_size - fixed_total - gap_total).max(0.0);
    let fill_size = if fill_count > 0 {
        remaining / fill_count as f32
    } else {
        0.0
    };

    // Second pass: children follow each other along the main axis and are
    // never shrunk, so a strip of items may run past the end of its parent.
    let mut offset = 0.0;

    for child in flow_children {
        let (margin_before, margin_after) = main_margins(child, is_row);
        let (cross_margin_before, cross_margin_after) = main_margins(child, !is_row);

        let main = match main_axis_size(child, is_row) {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row, styles),
            Size::Fill => fill_size,
            Size::Percent(p) => main_size * p,
        };

        let available_cross = (cross_size - cross_margin_before - cross_margin_after).max(0.0);
        let cross = match main_axis_size(child, !is_row) {
            Size::Fixed(n) => n,
            Size::Fill | Size::Auto => available_cross,
            Size::Percent(p) => cross_size * p,
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x + offset + margin_before,
                inner.y + cross_margin_before,
                main,
                cross,
            )
        } else {
            Rect::new(
                inner.x + cross_margin_before,
                inner.y + offset + margin_before,
                cross,
                main,
            )
        };

        place(child, child_rect, styles, result);

        offset += margin_before + main + margin_after + element.gap;
    }

    for child in absolute_children {
        layout_element(child, rect, styles, result);
    }
}

fn main_axis_size(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.width
    } else {
        element.height
    }
}

fn main_margins(element: &Element, is_row: bool) -> (f32, f32) {
    if is_row {
        (element.margin.left, element.margin.right)
    } else {
        (element.margin.top, element.margin.bottom)
    }
}

fn resolve_size(size: Size, available: f32, element: &Element, styles: &Stylesheet, is_width: bool) -> f32 {
    match size {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width, styles).min(available),
        Size::Percent(p) => available * p,
    }
}

/// Intrinsic size of an element's content plus padding.
fn estimate_size(element: &Element, is_width: bool, styles: &Stylesheet) -> f32 {
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => {
            if is_width {
                max_line_width(text) as f32
            } else {
                text.lines().count().max(1) as f32
            }
        }
        Content::Children(children) => {
            let flow: Vec<&Element> = children
                .iter()
                .filter(|c| c.position != Position::Absolute && styles.display(c) != Display::None)
                .collect();

            let along_main = (element.direction == Direction::Row) == is_width;
            let extents = flow.iter().map(|c| outer_extent(c, is_width, styles));

            if flow.is_empty() {
                0.0
            } else if along_main {
                let gap_total = element.gap * (flow.len() - 1) as f32;
                extents.sum::<f32>() + gap_total
            } else {
                extents.fold(0.0, f32::max)
            }
        }
        Content::None => 0.0,
    };

    content_size + padding
}

fn outer_extent(element: &Element, is_width: bool, styles: &Stylesheet) -> f32 {
    let size = if is_width { element.width } else { element.height };
    let (before, after) = main_margins(element, is_width);
    let inner = match size {
        Size::Fixed(n) => n,
        _ => estimate_size(element, is_width, styles),
    };
    inner + before + after
}
