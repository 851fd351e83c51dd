use crossterm::event::{
    Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
    MouseButton as TermButton, MouseEvent, MouseEventKind,
};
use viewdom::{
    translate_terminal_event, Element, Event, FocusState, Key, LayoutResult, Modifiers,
    MouseButton, Rect,
};

fn scene() -> (Element, LayoutResult) {
    let root = Element::div()
        .id("root")
        .child(Element::button().id("trigger"));
    let mut layout = LayoutResult::new();
    layout.insert("root".to_string(), Rect::new(0, 0, 80, 24));
    layout.insert("trigger".to_string(), Rect::new(2, 1, 10, 1));
    (root, layout)
}

fn translate(event: TermEvent, focus: &FocusState) -> Option<Event> {
    let (root, layout) = scene();
    translate_terminal_event(&event, &root, &layout, focus)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> TermEvent {
    TermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_key_targets_focused_element() {
    let mut focus = FocusState::new();
    focus.focus("trigger");

    let event = translate(
        TermEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::CONTROL)),
        &focus,
    );

    assert_eq!(
        event,
        Some(Event::Key {
            target: Some("trigger".to_string()),
            key: Key::Escape,
            modifiers: Modifiers {
                shift: false,
                ctrl: true,
                alt: false,
            },
        })
    );
}

#[test]
fn test_key_without_focus_has_no_target() {
    let event = translate(
        TermEvent::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
        &FocusState::new(),
    );
    assert_eq!(event, Some(Event::key(None, Key::Char('x'))));
}

#[test]
fn test_key_release_is_dropped() {
    let release = KeyEvent::new_with_kind_and_state(
        KeyCode::Enter,
        KeyModifiers::NONE,
        KeyEventKind::Release,
        KeyEventState::NONE,
    );
    assert_eq!(translate(TermEvent::Key(release), &FocusState::new()), None);
}

#[test]
fn test_unmapped_key_is_dropped() {
    let event = translate(
        TermEvent::Key(KeyEvent::new(KeyCode::CapsLock, KeyModifiers::NONE)),
        &FocusState::new(),
    );
    assert_eq!(event, None);
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_mouse_down_hit_tests_cell() {
    let event = translate(
        mouse(MouseEventKind::Down(TermButton::Left), 5, 1),
        &FocusState::new(),
    );
    assert_eq!(
        event,
        Some(Event::PointerDown {
            target: Some("trigger".to_string()),
            x: 5,
            y: 1,
            button: MouseButton::Left,
        })
    );
}

#[test]
fn test_mouse_up_outside_tree() {
    let event = translate(
        mouse(MouseEventKind::Up(TermButton::Right), 100, 40),
        &FocusState::new(),
    );
    assert_eq!(
        event,
        Some(Event::PointerUp {
            target: None,
            x: 100,
            y: 40,
            button: MouseButton::Right,
        })
    );
}

#[test]
fn test_mouse_motion_is_dropped() {
    let event = translate(mouse(MouseEventKind::Moved, 5, 1), &FocusState::new());
    assert_eq!(event, None);
}

// ============================================================================
// Window
// ============================================================================

#[test]
fn test_focus_lost_becomes_window_blur() {
    assert_eq!(
        translate(TermEvent::FocusLost, &FocusState::new()),
        Some(Event::WindowBlur)
    );
    assert_eq!(translate(TermEvent::FocusGained, &FocusState::new()), None);
}

#[test]
fn test_resize() {
    assert_eq!(
        translate(TermEvent::Resize(120, 40), &FocusState::new()),
        Some(Event::Resize {
            width: 120,
            height: 40,
        })
    );
}
