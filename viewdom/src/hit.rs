use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest visible element at the given coordinates.
///
/// Hosts use this to fill in event targets. Children are checked in reverse
/// order so later siblings (overlays) win.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: i32, y: i32) -> Option<String> {
    if root.hidden {
        return None;
    }

    for child in root.child_elements().iter().rev() {
        if let Some(id) = hit_test(layout, child, x, y) {
            return Some(id);
        }
    }

    // Absolutely placed children may poke out of their parent, so the
    // parent's own rect is only checked after them.
    let rect = layout.get(&root.id)?;
    rect.contains(x, y).then(|| root.id.clone())
}
