use crate::element::{find_element, Element};

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.is_focused(id) {
            return false;
        }
        log::debug!("[focus] {:?} -> {}", self.focused, id);
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Drop focus if it sits on `id`. Returns true if it did.
    pub fn blur_if(&mut self, id: &str) -> bool {
        if self.is_focused(id) {
            self.focused = None;
            true
        } else {
            false
        }
    }

    /// Focus the next focusable element inside `scope`, wrapping around.
    ///
    /// When nothing inside the scope is focused yet, the first element wins.
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next_within(&mut self, scope: &Element) -> Option<String> {
        let focusable = collect_focusable(scope);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match self.position_in(&focusable) {
            Some(i) => focusable[(i + 1) % focusable.len()].clone(),
            None => focusable[0].clone(),
        };
        self.move_to(new_focus)
    }

    /// Focus the previous focusable element inside `scope`, wrapping around.
    ///
    /// When nothing inside the scope is focused yet, the last element wins.
    pub fn focus_prev_within(&mut self, scope: &Element) -> Option<String> {
        let focusable = collect_focusable(scope);
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match self.position_in(&focusable) {
            Some(0) | None => focusable[last].clone(),
            Some(i) => focusable[i - 1].clone(),
        };
        self.move_to(new_focus)
    }

    pub fn focus_first_within(&mut self, scope: &Element) -> Option<String> {
        let first = collect_focusable(scope).into_iter().next()?;
        self.move_to(first)
    }

    pub fn focus_last_within(&mut self, scope: &Element) -> Option<String> {
        let last = collect_focusable(scope).pop()?;
        self.move_to(last)
    }

    /// Whether the focused element still exists in `root` and can take focus.
    pub fn is_valid(&self, root: &Element) -> bool {
        self.focused
            .as_deref()
            .and_then(|id| find_element(root, id))
            .is_some_and(|el| el.focusable && el.is_interactive())
    }

    fn position_in(&self, focusable: &[String]) -> Option<usize> {
        let current = self.focused.as_ref()?;
        focusable.iter().position(|id| id == current)
    }

    fn move_to(&mut self, id: String) -> Option<String> {
        if self.focused.as_ref() != Some(&id) {
            log::debug!("[focus] {:?} -> {}", self.focused, id);
            self.focused = Some(id.clone());
            Some(id)
        } else {
            None
        }
    }
}

/// Collect focusable element IDs in tree order.
///
/// Hidden or disabled subtrees contribute nothing.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_inner(root, &mut result);
    result
}

fn collect_focusable_inner(element: &Element, result: &mut Vec<String>) {
    if !element.is_interactive() {
        return;
    }

    if element.focusable {
        result.push(element.id.clone());
    }

    for child in element.child_elements() {
        collect_focusable_inner(child, result);
    }
}
