use std::time::{Duration, Instant};

use hscroll_dom::render::render_to_buffer;
use hscroll_dom::{
    AnimationState, Buffer, ClassRule, Document, Easing, Element, Rect, Size, Stylesheet,
    TransitionConfig,
};

const SLIDE: Duration = Duration::from_millis(100);

fn styles() -> Stylesheet {
    Stylesheet::new().rule("slide", ClassRule::new().transition(SLIDE, Easing::Linear))
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.01
}

// ============================================================================
// Easing
// ============================================================================

#[test]
fn test_easing_endpoints() {
    for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
    }
}

#[test]
fn test_easing_shapes() {
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert!(Easing::EaseIn.apply(0.5) < 0.5);
    assert!(Easing::EaseOut.apply(0.5) > 0.5);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
}

#[test]
fn test_progress() {
    let config = TransitionConfig::new(SLIDE, Easing::Linear);
    assert_eq!(config.progress(Duration::ZERO), 0.0);
    assert!(approx(config.progress(SLIDE / 4), 0.25));
    assert_eq!(config.progress(SLIDE * 2), 1.0);

    let instant = TransitionConfig::new(Duration::ZERO, Easing::EaseOut);
    assert_eq!(instant.progress(Duration::ZERO), 1.0);
}

// ============================================================================
// AnimationState
// ============================================================================

#[test]
fn test_transition_interpolates_translation() {
    let styles = styles();
    let mut animation = AnimationState::new();
    let t0 = Instant::now();

    let mut strip = Element::row().id("strip").class("slide");
    animation.update(&strip, &styles, t0);
    assert!(!animation.has_active_transitions());

    strip.translate_x = -100.0;
    animation.update(&strip, &styles, t0);
    assert!(animation.has_active_transitions());

    let halfway = animation.painted_translate("strip", t0 + SLIDE / 2).unwrap();
    assert!(approx(halfway, -50.0));

    animation.update(&strip, &styles, t0 + SLIDE);
    assert!(!animation.has_active_transitions());
    assert_eq!(animation.painted_translate("strip", t0 + SLIDE), Some(-100.0));
}

#[test]
fn test_readding_class_restarts_from_painted_position() {
    let styles = styles();
    let mut animation = AnimationState::new();
    let t0 = Instant::now();
    let mid = t0 + SLIDE / 2;

    let mut strip = Element::row().id("strip").class("slide");
    animation.update(&strip, &styles, t0);
    strip.translate_x = -100.0;
    animation.update(&strip, &styles, t0);

    // Retarget halfway through, re-adding the class as the widget does
    strip.classes.remove("slide");
    strip.classes.add("slide");
    strip.translate_x = -200.0;
    animation.update(&strip, &styles, mid);

    assert!(approx(animation.painted_translate("strip", mid).unwrap(), -50.0));
    let later = animation.painted_translate("strip", mid + SLIDE / 2).unwrap();
    assert!(approx(later, -125.0));
}

#[test]
fn test_without_transition_class_translation_jumps() {
    let styles = styles();
    let mut animation = AnimationState::new();
    let t0 = Instant::now();

    let mut strip = Element::row().id("strip").class("slide");
    animation.update(&strip, &styles, t0);
    strip.translate_x = -100.0;
    animation.update(&strip, &styles, t0);
    assert!(animation.has_active_transitions());

    // A drag drops the class: the running slide is abandoned
    strip.classes.remove("slide");
    strip.translate_x = -120.0;
    animation.update(&strip, &styles, t0 + SLIDE / 4);

    assert!(!animation.has_active_transitions());
    assert_eq!(animation.painted_translate("strip", t0 + SLIDE / 4), Some(-120.0));
}

#[test]
fn test_reduced_motion_jumps() {
    let styles = styles();
    let mut animation = AnimationState::new();
    animation.set_reduced_motion(true);
    let t0 = Instant::now();

    let mut strip = Element::row().id("strip").class("slide");
    animation.update(&strip, &styles, t0);
    strip.translate_x = -100.0;
    animation.update(&strip, &styles, t0);

    assert!(!animation.has_active_transitions());
    assert_eq!(animation.painted_translate("strip", t0), Some(-100.0));
}

#[test]
fn test_cleanup_forgets_removed_elements() {
    let styles = styles();
    let mut animation = AnimationState::new();
    let t0 = Instant::now();

    let root = Element::row().id("root").child(Element::box_().id("gone"));
    animation.update(&root, &styles, t0);
    assert!(animation.painted_translate("gone", t0).is_some());

    let root = Element::row().id("root");
    animation.cleanup(&hscroll_dom::animation::collect_element_ids(&root));
    assert!(animation.painted_translate("gone", t0).is_none());
    assert!(animation.painted_translate("root", t0).is_some());
}

// ============================================================================
// Rendering
// ============================================================================

/// A 6-cell clipping window over four 2-cell labels.
fn window() -> Document {
    let root = Element::col().id("root").width(Size::Fill).child(
        Element::col()
            .id("window")
            .width(Size::Fixed(6.0))
            .clip(true)
            .child(
                Element::row()
                    .id("strip")
                    .class("slide")
                    .width(Size::Fill)
                    .children(["ab", "cd", "ef", "gh"].map(Element::text)),
            ),
    );
    Document::new(root, Rect::from_size(10.0, 1.0)).with_stylesheet(styles())
}

fn paint(document: &Document, animation: &AnimationState, now: Instant) -> String {
    let mut buf = Buffer::new(10, 1);
    render_to_buffer(document, animation, &mut buf, now);
    buf.row_text(0)
}

#[test]
fn test_render_clips_to_window() {
    let document = window();
    let mut animation = AnimationState::new();
    let t0 = Instant::now();
    animation.update(document.root(), document.stylesheet(), t0);

    assert_eq!(paint(&document, &animation, t0), "abcdef    ");
}

#[test]
fn test_render_follows_animation() {
    let mut document = window();
    let mut animation = AnimationState::new();
    let t0 = Instant::now();
    animation.update(document.root(), document.stylesheet(), t0);

    document.update("strip", |strip| strip.translate_x = -4.0);
    animation.update(document.root(), document.stylesheet(), t0);

    // Layout already holds the target; painting lags behind it
    assert_eq!(paint(&document, &animation, t0), "abcdef    ");
    assert_eq!(paint(&document, &animation, t0 + SLIDE / 2), "cdefgh    ");
    assert_eq!(paint(&document, &animation, t0 + SLIDE), "efgh      ");
}
