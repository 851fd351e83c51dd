use viewdom::{Element, Event};

/// Detects presses that land outside an element subtree.
#[derive(Debug, Clone)]
pub struct ClickOutside {
    root_id: String,
}

impl ClickOutside {
    pub fn new(root_id: impl Into<String>) -> Self {
        Self {
            root_id: root_id.into(),
        }
    }

    /// Whether `event` is a press outside the watched subtree.
    ///
    /// Presses with no target landed outside the tree entirely and count as
    /// outside.
    pub fn is_outside(&self, event: &Event, root: &Element) -> bool {
        if !event.is_press() {
            return false;
        }
        match event.target() {
            Some(target) => !viewdom::contains(root, &self.root_id, target),
            None => true,
        }
    }

    /// Run `on_outside` for presses outside the subtree. Returns whether it ran.
    pub fn handle(&self, event: &Event, root: &Element, on_outside: impl FnOnce(&Event)) -> bool {
        if self.is_outside(event, root) {
            on_outside(event);
            true
        } else {
            false
        }
    }
}
