use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use viewdom::{Element, FocusState, TaskQueue, Window};

// ============================================================================
// Blur subscriptions
// ============================================================================

#[test]
fn test_blur_listener_called() {
    let window = Window::new(800, 600);
    let calls = Arc::new(AtomicUsize::new(0));

    let c = calls.clone();
    let _sub = window.on_blur(move || {
        c.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(window.dispatch_blur(), 1);
    assert_eq!(window.dispatch_blur(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_dropping_subscription_detaches() {
    let window = Window::new(800, 600);
    let calls = Arc::new(AtomicUsize::new(0));

    let c = calls.clone();
    let sub = window.on_blur(move || {
        c.fetch_add(1, Ordering::SeqCst);
    });
    assert!(sub.is_attached());
    assert_eq!(window.blur_listener_count(), 1);

    drop(sub);
    assert_eq!(window.blur_listener_count(), 0);
    assert_eq!(window.dispatch_blur(), 0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_subscriptions_are_independent() {
    let window = Window::new(800, 600);
    let a = window.on_blur(|| {});
    let b = window.on_blur(|| {});
    assert_eq!(window.blur_listener_count(), 2);

    drop(a);
    assert!(b.is_attached());
    assert_eq!(window.blur_listener_count(), 1);
}

#[test]
fn test_subscription_outlives_window() {
    let window = Window::new(800, 600);
    let sub = window.on_blur(|| {});
    drop(window);
    assert!(!sub.is_attached());
    // Dropping after the window is gone must not panic.
    drop(sub);
}

#[test]
fn test_resize() {
    let window = Window::new(800, 600);
    assert_eq!(window.inner_height(), 600);
    window.clone().resize(1024, 300);
    assert_eq!(window.size(), (1024, 300));
}

// ============================================================================
// Post-render tasks
// ============================================================================

#[test]
fn test_focus_when_mounted_focuses_existing() {
    let mut tasks = TaskQueue::new();
    let mut focus = FocusState::new();
    tasks.focus_when_mounted("input");
    assert_eq!(tasks.len(), 1);

    let root = Element::div().child(Element::text_input("").id("input"));
    assert_eq!(tasks.run_pending(&root, &mut focus), 1);
    assert_eq!(focus.focused(), Some("input"));
    assert!(tasks.is_empty());
}

#[test]
fn test_focus_when_mounted_guards_missing() {
    let mut tasks = TaskQueue::new();
    let mut focus = FocusState::new();
    focus.focus("trigger");
    tasks.focus_when_mounted("input");

    let root = Element::div().child(Element::button().id("trigger"));
    tasks.run_pending(&root, &mut focus);
    assert_eq!(focus.focused(), Some("trigger"));
}

#[test]
fn test_focus_when_mounted_guards_hidden() {
    let mut tasks = TaskQueue::new();
    let mut focus = FocusState::new();
    tasks.focus_when_mounted("input");

    let root = Element::div().child(Element::text_input("").id("input").hidden(true));
    tasks.run_pending(&root, &mut focus);
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_tasks_run_in_order() {
    let mut tasks = TaskQueue::new();
    let mut focus = FocusState::new();
    tasks.defer(|cx| {
        cx.focus.focus("first");
    });
    tasks.defer(|cx| {
        cx.focus.focus("second");
    });

    tasks.run_pending(&Element::div(), &mut focus);
    assert_eq!(focus.focused(), Some("second"));
}
