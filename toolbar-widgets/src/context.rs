//! Host services handed to widgets while they handle an event.

use viewdom::{Element, FocusState, LayoutResult, Rect, TaskQueue, Window};

use crate::i18n::Translator;

/// Everything a widget may read or touch while handling one event.
///
/// `root` and `layout` describe the most recently rendered tree; the host
/// rebuilds and re-measures after every event.
pub struct WidgetCx<'a> {
    pub root: &'a Element,
    pub layout: &'a LayoutResult,
    pub window: &'a Window,
    pub focus: &'a mut FocusState,
    pub tasks: &'a mut TaskQueue,
    pub translator: &'a dyn Translator,
}

impl<'a> WidgetCx<'a> {
    pub fn new(
        root: &'a Element,
        layout: &'a LayoutResult,
        window: &'a Window,
        focus: &'a mut FocusState,
        tasks: &'a mut TaskQueue,
        translator: &'a dyn Translator,
    ) -> Self {
        Self {
            root,
            layout,
            window,
            focus,
            tasks,
            translator,
        }
    }

    /// Measured rect of a rendered element, if the host has one.
    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.layout.get(id).copied()
    }

    /// Whether `target` is `ancestor` or inside it in the rendered tree.
    pub fn contains(&self, ancestor: &str, target: Option<&str>) -> bool {
        target.is_some_and(|t| viewdom::contains(self.root, ancestor, t))
    }
}
