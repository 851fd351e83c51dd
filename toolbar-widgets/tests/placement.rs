use toolbar_widgets::dropdown::{place_overlay, Placement, OVERLAY_OFFSET_BELOW};
use viewdom::Rect;

#[test]
fn test_place_below_when_it_fits() {
    let trigger = Rect::new(10, 100, 100, 28);
    let overlay = Rect::new(10, 128, 100, 300);
    assert_eq!(
        place_overlay(Some(trigger), Some(overlay), 600),
        Some(Placement::Below)
    );
    assert_eq!(Placement::Below.top(), OVERLAY_OFFSET_BELOW);
}

#[test]
fn test_place_above_when_overflowing() {
    let trigger = Rect::new(10, 400, 100, 28);
    let overlay = Rect::new(10, 428, 100, 300);
    let placement = place_overlay(Some(trigger), Some(overlay), 600);
    assert_eq!(placement, Some(Placement::Above { overlay_height: 300 }));
    assert_eq!(placement.map(|p| p.top()), Some(-300));
}

#[test]
fn test_exact_fit_stays_below() {
    let trigger = Rect::new(0, 272, 100, 28);
    let overlay = Rect::new(0, 300, 100, 300);
    assert_eq!(
        place_overlay(Some(trigger), Some(overlay), 600),
        Some(Placement::Below)
    );
}

#[test]
fn test_missing_rects_are_noop() {
    let rect = Rect::new(0, 0, 100, 28);
    assert_eq!(place_overlay(None, Some(rect), 600), None);
    assert_eq!(place_overlay(Some(rect), None, 600), None);
    assert_eq!(place_overlay(None, None, 600), None);
}
