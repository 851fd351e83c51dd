use viewdom::{find_element, Element, EventResult, FocusState, Key};

/// Arrow-key focus traversal inside an open overlay.
///
/// Down/Up move to the next/previous focusable element (wrapping), Home/End
/// jump to the ends, Escape runs the close callback. Keys are ignored while
/// the overlay is closed or missing from the tree.
#[derive(Debug, Clone)]
pub struct ArrowFocus {
    scope_id: String,
}

impl ArrowFocus {
    pub fn new(scope_id: impl Into<String>) -> Self {
        Self {
            scope_id: scope_id.into(),
        }
    }

    pub fn handle_key(
        &self,
        open: bool,
        key: Key,
        root: &Element,
        focus: &mut FocusState,
        on_close: impl FnOnce(),
    ) -> EventResult {
        if !open {
            return EventResult::IGNORED;
        }
        let Some(scope) = find_element(root, &self.scope_id) else {
            return EventResult::IGNORED;
        };

        match key {
            Key::Down => {
                focus.focus_next_within(scope);
            }
            Key::Up => {
                focus.focus_prev_within(scope);
            }
            Key::Home => {
                focus.focus_first_within(scope);
            }
            Key::End => {
                focus.focus_last_within(scope);
            }
            Key::Escape => on_close(),
            _ => return EventResult::IGNORED,
        }

        EventResult::handled().prevent_default()
    }
}
