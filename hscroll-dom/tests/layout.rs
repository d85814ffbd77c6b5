use hscroll_dom::layout::layout;
use hscroll_dom::{ClassRule, Edges, Element, Position, Rect, Size, Stylesheet};

fn strip(count: usize, item_width: f32) -> Element {
    Element::row().id("strip").width(Size::Fill).children(
        (0..count).map(|i| {
            Element::box_()
                .id(format!("item-{i}"))
                .width(Size::Fixed(item_width))
                .height(Size::Fixed(10.0))
        }),
    )
}

// ============================================================================
// Flow
// ============================================================================

#[test]
fn test_row_children_are_not_shrunk_to_fit() {
    let root = Element::col().id("root").width(Size::Fill).child(strip(5, 100.0));
    let result = layout(&root, Rect::from_size(250.0, 50.0), &Stylesheet::new());

    assert_eq!(result.get("strip").unwrap().width, 250.0);
    assert_eq!(result.get("item-0").unwrap().x, 0.0);
    assert_eq!(result.get("item-4").unwrap().x, 400.0);
    assert_eq!(result.get("item-4").unwrap().right(), 500.0);
}

#[test]
fn test_margin_padding_and_gap() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .padding(Edges::all(2.0))
        .gap(3.0)
        .child(Element::box_().id("a").width(Size::Fixed(10.0)))
        .child(
            Element::box_()
                .id("b")
                .width(Size::Fixed(10.0))
                .margin(Edges::horizontal(1.0)),
        );
    let result = layout(&root, Rect::from_size(100.0, 20.0), &Stylesheet::new());

    let a = result.get("a").unwrap();
    let b = result.get("b").unwrap();
    assert_eq!(a.x, 2.0);
    assert_eq!(a.y, 2.0);
    // a (10) + gap (3) + margin (1)
    assert_eq!(b.x, 16.0);
}

#[test]
fn test_fill_shares_remaining_space() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .child(Element::box_().id("fixed").width(Size::Fixed(40.0)))
        .child(Element::box_().id("fill-a").width(Size::Fill))
        .child(Element::box_().id("fill-b").width(Size::Fill));
    let result = layout(&root, Rect::from_size(100.0, 10.0), &Stylesheet::new());

    assert_eq!(result.get("fill-a").unwrap().width, 30.0);
    assert_eq!(result.get("fill-b").unwrap().x, 70.0);
}

#[test]
fn test_percent_is_fraction_of_inner_size() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .padding(Edges::horizontal(10.0))
        .child(Element::box_().id("quarter").width(Size::Percent(0.25)))
        .child(Element::box_().id("rest").width(Size::Fill));
    let result = layout(&root, Rect::from_size(120.0, 10.0), &Stylesheet::new());

    assert_eq!(result.get("quarter").unwrap().width, 25.0);
    assert_eq!(result.get("rest").unwrap().x, 35.0);
    assert_eq!(result.get("rest").unwrap().width, 75.0);
}

#[test]
fn test_auto_text_width_is_display_width() {
    let root = Element::row()
        .id("root")
        .child(Element::text("hello").id("t"))
        .child(Element::text("日本").id("wide"));
    let result = layout(&root, Rect::from_size(80.0, 5.0), &Stylesheet::new());

    assert_eq!(result.get("t").unwrap().width, 5.0);
    assert_eq!(result.get("wide").unwrap().x, 5.0);
    assert_eq!(result.get("wide").unwrap().width, 4.0);
    assert_eq!(result.get("root").unwrap().width, 9.0);
}

// ============================================================================
// Translation, positioning, display
// ============================================================================

#[test]
fn test_translate_moves_content_not_box() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .child(strip(3, 50.0).translate_x(-30.0));
    let result = layout(&root, Rect::from_size(100.0, 50.0), &Stylesheet::new());

    assert_eq!(result.get("strip").unwrap(), &Rect::new(0.0, 0.0, 100.0, 10.0));
    assert_eq!(result.get("item-0").unwrap().x, -30.0);
    assert_eq!(result.get("item-2").unwrap().x, 70.0);
}

#[test]
fn test_nested_translations_add_up() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .translate_x(-5.0)
        .child(strip(2, 50.0).translate_x(-30.0));
    let result = layout(&root, Rect::from_size(100.0, 50.0), &Stylesheet::new());

    assert_eq!(result.get("root").unwrap().x, 0.0);
    assert_eq!(result.get("strip").unwrap().x, -5.0);
    assert_eq!(result.get("item-1").unwrap().x, 15.0);
}

#[test]
fn test_absolute_child_is_outside_flow() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::text(">")
                .id("badge")
                .position(Position::Absolute)
                .left(90.0)
                .top(4.0),
        )
        .child(Element::box_().id("first").width(Size::Fixed(10.0)));
    let result = layout(&root, Rect::new(5.0, 5.0, 100.0, 20.0), &Stylesheet::new());

    assert_eq!(result.get("badge").unwrap(), &Rect::new(95.0, 9.0, 1.0, 1.0));
    // Flow starts at the parent's edge as if the badge were not there
    assert_eq!(result.get("first").unwrap().x, 5.0);
}

#[test]
fn test_hidden_class_removes_element_from_layout() {
    let styles = Stylesheet::new().rule("none", ClassRule::new().hidden());
    let root = Element::row()
        .id("root")
        .child(
            Element::box_()
                .id("gone")
                .class("none")
                .width(Size::Fixed(10.0))
                .child(Element::box_().id("gone-child")),
        )
        .child(Element::box_().id("kept").width(Size::Fixed(10.0)));
    let result = layout(&root, Rect::from_size(100.0, 10.0), &styles);

    assert!(result.get("gone").is_none());
    assert!(result.get("gone-child").is_none());
    assert_eq!(result.get("kept").unwrap().x, 0.0);
    assert_eq!(result.get("root").unwrap().width, 10.0);
}

#[test]
fn test_later_rule_overrides_display() {
    let styles = Stylesheet::new()
        .rule("none", ClassRule::new().hidden())
        .rule("shown", ClassRule::new().display(hscroll_dom::Display::Visible));
    let element = Element::box_().class("none").class("shown");

    assert_eq!(styles.display(&element), hscroll_dom::Display::Visible);
}
