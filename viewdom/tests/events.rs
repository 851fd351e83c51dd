use viewdom::{
    collect_focusable, contains, find_element, hit_test, Element, Event, EventResult, FocusState,
    LayoutResult, Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn menu() -> Element {
    Element::div()
        .id("root")
        .child(Element::button().id("trigger").child(Element::text("Pick").id("label")))
        .child(
            Element::div()
                .id("overlay")
                .child(Element::button().id("a"))
                .child(Element::button().id("b").disabled(true))
                .child(Element::button().id("c")),
        )
}

// ============================================================================
// Tree queries
// ============================================================================

#[test]
fn test_find_element_nested() {
    let root = menu();
    assert!(find_element(&root, "label").is_some());
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_contains_self_and_descendants() {
    let root = menu();
    assert!(contains(&root, "trigger", "trigger"));
    assert!(contains(&root, "trigger", "label"));
    assert!(!contains(&root, "trigger", "a"));
    assert!(!contains(&root, "overlay", "label"));
}

#[test]
fn test_contains_unknown_ancestor() {
    let root = menu();
    assert!(!contains(&root, "nope", "label"));
}

#[test]
fn test_text_content_finds_first_text() {
    let root = menu();
    let trigger = find_element(&root, "trigger").unwrap();
    assert_eq!(trigger.text_content(), Some("Pick"));
}

#[test]
fn test_class_dedup_and_conditional() {
    let el = Element::div()
        .class("item")
        .class("item")
        .class_if("active", false)
        .class_if("open", true);
    assert_eq!(el.classes, vec!["item".to_string(), "open".to_string()]);
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_deepest_element() {
    let root = menu();
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 200, 200)),
        ("trigger", Rect::new(0, 0, 100, 28)),
        ("label", Rect::new(4, 4, 40, 20)),
    ]);

    assert_eq!(hit_test(&layout, &root, 10, 10), Some("label".to_string()));
    assert_eq!(hit_test(&layout, &root, 90, 10), Some("trigger".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 500, 500), None);
}

#[test]
fn test_hit_test_skips_hidden() {
    let root = Element::div()
        .id("root")
        .child(Element::div().id("overlay").hidden(true));
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("overlay", Rect::new(0, 30, 100, 50)),
    ]);

    assert_eq!(hit_test(&layout, &root, 10, 40), Some("root".to_string()));
}

#[test]
fn test_hit_test_overlay_outside_parent() {
    // Overlay anchored above its trigger sits outside the wrapper rect.
    let root = Element::div()
        .id("wrapper")
        .child(Element::div().id("overlay").top(-60));
    let layout = create_layout(&[
        ("wrapper", Rect::new(0, 100, 100, 28)),
        ("overlay", Rect::new(0, 40, 100, 60)),
    ]);

    assert_eq!(hit_test(&layout, &root, 10, 50), Some("overlay".to_string()));
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_focus_state_focus_blur() {
    let mut focus = FocusState::new();

    assert_eq!(focus.focused(), None);

    assert!(focus.focus("input1"));
    assert_eq!(focus.focused(), Some("input1"));

    // Focus same element - no change
    assert!(!focus.focus("input1"));

    assert!(!focus.blur_if("other"));
    assert!(focus.blur_if("input1"));
    assert_eq!(focus.focused(), None);
    assert!(!focus.blur());
}

#[test]
fn test_collect_focusable_skips_disabled_and_hidden() {
    let root = menu();
    assert_eq!(collect_focusable(&root), vec!["trigger", "a", "c"]);

    let hidden = Element::div()
        .hidden(true)
        .child(Element::button().id("x"));
    assert!(collect_focusable(&hidden).is_empty());
}

#[test]
fn test_focus_next_within_wraps() {
    let root = menu();
    let overlay = find_element(&root, "overlay").unwrap();
    let mut focus = FocusState::new();
    focus.focus("trigger");

    // Focus outside the scope starts at the first element.
    assert_eq!(focus.focus_next_within(overlay), Some("a".to_string()));
    assert_eq!(focus.focus_next_within(overlay), Some("c".to_string()));
    assert_eq!(focus.focus_next_within(overlay), Some("a".to_string()));
}

#[test]
fn test_focus_prev_within_wraps() {
    let root = menu();
    let overlay = find_element(&root, "overlay").unwrap();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_prev_within(overlay), Some("c".to_string()));
    assert_eq!(focus.focus_prev_within(overlay), Some("a".to_string()));
    assert_eq!(focus.focus_prev_within(overlay), Some("c".to_string()));
}

#[test]
fn test_focus_first_last_within() {
    let root = menu();
    let overlay = find_element(&root, "overlay").unwrap();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_last_within(overlay), Some("c".to_string()));
    assert_eq!(focus.focus_first_within(overlay), Some("a".to_string()));
    // Already there
    assert_eq!(focus.focus_first_within(overlay), None);
}

#[test]
fn test_focus_within_empty_scope() {
    let empty = Element::div();
    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next_within(&empty), None);
    assert_eq!(focus.focus_prev_within(&empty), None);
}

#[test]
fn test_focus_is_valid() {
    let root = menu();
    let mut focus = FocusState::new();
    assert!(!focus.is_valid(&root));
    focus.focus("a");
    assert!(focus.is_valid(&root));
    focus.focus("b");
    assert!(!focus.is_valid(&root));
}

// ============================================================================
// Event helpers
// ============================================================================

#[test]
fn test_event_target() {
    assert_eq!(Event::pointer_down(Some("a")).target(), Some("a"));
    assert_eq!(Event::pointer_down(None).target(), None);
    assert_eq!(Event::WindowBlur.target(), None);
    assert!(Event::TouchStart { target: None }.is_press());
    assert!(!Event::click(Some("a")).is_press());
}

#[test]
fn test_event_result_flags() {
    let r = EventResult::handled().prevent_default();
    assert!(r.is_handled());
    assert!(r.default_prevented);
    assert!(!r.propagation_stopped);

    let merged = r.merge(EventResult::IGNORED.stop_propagation());
    assert!(merged.default_prevented);
    assert!(merged.propagation_stopped);
    assert!(!EventResult::IGNORED.is_handled());
}
