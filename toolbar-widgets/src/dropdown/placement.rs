//! Overlay placement relative to the trigger.

use viewdom::Rect;

/// Gap between the trigger's top edge and an overlay placed below it.
pub const OVERLAY_OFFSET_BELOW: i32 = 28;

/// Where the overlay sits relative to its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Below,
    /// Anchored above the trigger; carries the overlay height.
    Above { overlay_height: i32 },
}

impl Placement {
    /// Top offset of the overlay from the trigger's top edge.
    pub fn top(&self) -> i32 {
        match self {
            Self::Below => OVERLAY_OFFSET_BELOW,
            Self::Above { overlay_height } => -overlay_height,
        }
    }
}

/// Pick a placement from the measured trigger and overlay rects.
///
/// The overlay goes above the trigger when it would run past the bottom of
/// the viewport. Returns `None` when either element has not been measured,
/// which leaves the previous placement untouched.
pub fn place_overlay(
    trigger: Option<Rect>,
    overlay: Option<Rect>,
    viewport_height: i32,
) -> Option<Placement> {
    let trigger = trigger?;
    let overlay = overlay?;

    if trigger.bottom() + overlay.height > viewport_height {
        Some(Placement::Above {
            overlay_height: overlay.height,
        })
    } else {
        Some(Placement::Below)
    }
}
