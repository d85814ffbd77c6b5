use crossterm::event::{
    Event as CrosstermEvent, KeyModifiers, MouseButton as CtButton, MouseEvent, MouseEventKind,
};
use hscroll_dom::{
    hit_test, ClassList, Document, Element, Event, LayoutResult, MouseButton, Position, Rect, Size,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// A 40px clipping window over a strip of four 20px items.
fn window() -> Document {
    let root = Element::col().id("root").width(Size::Fill).child(
        Element::col()
            .id("window")
            .width(Size::Fixed(40.0))
            .clip(true)
            .child(
                Element::row().id("strip").width(Size::Fill).children((0..4).map(|i| {
                    Element::box_()
                        .id(format!("item-{i}"))
                        .width(Size::Fixed(20.0))
                        .height(Size::Fixed(5.0))
                })),
            )
            .child(Element::text(">").id("next").position(Position::Absolute).left(39.0)),
    );
    Document::new(root, Rect::from_size(100.0, 20.0))
}

// ============================================================================
// Class lists
// ============================================================================

#[test]
fn test_class_list_add_remove() {
    let mut classes = ClassList::new();

    assert!(classes.add("a"));
    assert!(!classes.add("a"));
    assert!(classes.contains("a"));
    assert_eq!(classes.len(), 1);

    assert!(classes.remove("a"));
    assert!(!classes.remove("a"));
    assert!(classes.is_empty());
}

#[test]
fn test_class_list_readd_gets_new_revision() {
    let mut classes: ClassList = ["item", "s-animated"].into_iter().collect();
    let first = classes.revision("s-animated").unwrap();

    classes.remove("s-animated");
    classes.add("s-animated");
    let second = classes.revision("s-animated").unwrap();

    assert!(second > first);
    assert_eq!(classes.iter().collect::<Vec<_>>(), vec!["item", "s-animated"]);
}

#[test]
fn test_class_list_toggle() {
    let mut classes = ClassList::new();
    assert!(classes.toggle("none", true));
    assert!(!classes.toggle("none", true));
    assert!(classes.toggle("none", false));
    assert!(!classes.contains("none"));
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Click me").id("btn"));

    let layout = create_layout(&[
        ("root", Rect::new(0.0, 0.0, 100.0, 50.0)),
        ("btn", Rect::new(10.0, 10.0, 30.0, 3.0)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15.0, 11.0), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5.0, 5.0), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150.0, 150.0), None);
}

#[test]
fn test_hit_test_overflowing_child() {
    // Child sticks out of its parent without clipping
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("wide"));

    let layout = create_layout(&[
        ("root", Rect::new(0.0, 0.0, 10.0, 10.0)),
        ("wide", Rect::new(0.0, 0.0, 50.0, 10.0)),
    ]);

    assert_eq!(hit_test(&layout, &root, 30.0, 5.0), Some("wide".to_string()));
}

#[test]
fn test_hit_test_respects_clip() {
    let document = window();

    assert_eq!(document.target_at(25.0, 2.0), Some("item-1".to_string()));
    // item-2 is laid out at 40..60 but the window clips at 40
    assert_eq!(document.rect("item-2").unwrap().x, 40.0);
    assert_eq!(document.target_at(45.0, 2.0), Some("root".to_string()));
}

#[test]
fn test_hit_test_absolute_above_flow() {
    let document = window();
    assert_eq!(document.target_at(39.0, 0.0), Some("next".to_string()));
}

// ============================================================================
// Document
// ============================================================================

#[test]
fn test_update_relayouts() {
    let mut document = window();
    document.update("strip", |strip| strip.translate_x = -20.0);

    assert_eq!(document.rect("item-1").unwrap().x, 0.0);
    assert_eq!(document.target_at(5.0, 2.0), Some("item-1".to_string()));
    assert!(document.update("missing", |_| ()).is_none());
}

#[test]
fn test_contains() {
    let document = window();
    assert!(document.contains("strip", "item-3"));
    assert!(document.contains("strip", "strip"));
    assert!(!document.contains("strip", "next"));
    assert!(!document.contains("missing", "item-0"));
}

#[test]
fn test_pointer_capture() {
    let mut document = window();

    assert!(document.capture_pointer("strip"));
    assert!(document.capture_pointer("strip"));
    assert!(!document.capture_pointer("other"));
    assert_eq!(document.pointer_capture(), Some("strip"));

    assert!(!document.release_pointer("other"));
    assert!(document.release_pointer("strip"));
    assert_eq!(document.pointer_capture(), None);
}

// ============================================================================
// Terminal input translation
// ============================================================================

#[test]
fn test_translate_wheel() {
    let mut document = window();
    let events = document.translate(&mouse(MouseEventKind::ScrollDown, 5, 1));

    assert_eq!(
        events,
        vec![Event::Wheel {
            target: Some("item-0".to_string()),
            x: 5.0,
            y: 1.0,
            delta_x: 0.0,
            delta_y: hscroll_dom::event::LINE_DELTA,
        }]
    );
}

#[test]
fn test_translate_press_release_same_target_clicks() {
    let mut document = window();

    let down = document.translate(&mouse(MouseEventKind::Down(CtButton::Left), 39, 0));
    assert_eq!(
        down,
        vec![Event::MouseDown {
            target: Some("next".to_string()),
            x: 39.0,
            y: 0.0,
            button: MouseButton::Left,
        }]
    );

    let up = document.translate(&mouse(MouseEventKind::Up(CtButton::Left), 39, 0));
    assert_eq!(up.len(), 2);
    assert!(matches!(&up[1], Event::Click { target: Some(t), .. } if t == "next"));
}

#[test]
fn test_translate_release_elsewhere_does_not_click() {
    let mut document = window();

    document.translate(&mouse(MouseEventKind::Down(CtButton::Left), 5, 1));
    let moved = document.translate(&mouse(MouseEventKind::Drag(CtButton::Left), 25, 1));
    assert_eq!(moved, vec![Event::MouseMove { x: 25.0, y: 1.0 }]);

    let up = document.translate(&mouse(MouseEventKind::Up(CtButton::Left), 25, 1));
    assert_eq!(up.len(), 1);
    assert!(matches!(up[0], Event::MouseUp { .. }));
}

#[test]
fn test_translate_focus_lost_is_blur() {
    let mut document = window();
    assert_eq!(document.translate(&CrosstermEvent::FocusLost), vec![Event::Blur]);
    assert!(document.translate(&CrosstermEvent::FocusGained).is_empty());
}
