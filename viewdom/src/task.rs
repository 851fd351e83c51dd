//! Post-render task queue.
//!
//! Widgets sometimes need to act on elements that only exist after the next
//! render (focusing a text field that is mounted when an overlay opens). They
//! queue a task here; the host drains the queue once the new tree is built.

use std::collections::VecDeque;
use std::fmt;

use crate::element::{find_element, Element};
use crate::focus::FocusState;

/// What a deferred task can see when it runs.
pub struct TaskCx<'a> {
    /// The freshly rendered tree.
    pub root: &'a Element,
    pub focus: &'a mut FocusState,
}

type Task = Box<dyn FnOnce(&mut TaskCx<'_>) + Send>;

/// Single-shot tasks run after the current event pass.
///
/// Tasks cannot be cancelled. Each one is expected to guard itself against
/// the element it targets having gone away.
#[derive(Default)]
pub struct TaskQueue {
    tasks: VecDeque<Task>,
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&mut self, task: impl FnOnce(&mut TaskCx<'_>) + Send + 'static) {
        self.tasks.push_back(Box::new(task));
    }

    /// Queue focusing `id` once it is mounted.
    ///
    /// If the element is missing or hidden by the time the task runs, the
    /// task does nothing.
    pub fn focus_when_mounted(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.defer(move |cx| match find_element(cx.root, &id) {
            Some(el) if el.is_interactive() => {
                cx.focus.focus(&id);
            }
            _ => log::debug!("[tasks] skip focus of unmounted {}", id),
        });
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run every task queued before this call against the rendered tree.
    ///
    /// Tasks queued while running wait for the next pass. Returns how many ran.
    pub fn run_pending(&mut self, root: &Element, focus: &mut FocusState) -> usize {
        let batch: Vec<Task> = self.tasks.drain(..).collect();
        let count = batch.len();
        let mut cx = TaskCx { root, focus };
        for task in batch {
            task(&mut cx);
        }
        count
    }
}
