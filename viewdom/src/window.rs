//! Host window handle: viewport size and window-level blur notifications.

use std::fmt;
use std::sync::{Arc, Mutex, RwLock, Weak};

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// The window hosting the widgets.
///
/// Cheap to clone; clones share the same listeners and size.
#[derive(Clone)]
pub struct Window {
    listeners: Arc<Mutex<Listeners>>,
    size: Arc<RwLock<(i32, i32)>>,
}

impl Default for Window {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("size", &self.size())
            .field("blur_listeners", &self.blur_listener_count())
            .finish()
    }
}

impl Window {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Listeners::default())),
            size: Arc::new(RwLock::new((width, height))),
        }
    }

    pub fn size(&self) -> (i32, i32) {
        self.size.read().map(|guard| *guard).unwrap_or_default()
    }

    pub fn inner_height(&self) -> i32 {
        self.size().1
    }

    pub fn resize(&self, width: i32, height: i32) {
        if let Ok(mut guard) = self.size.write() {
            *guard = (width, height);
        }
    }

    /// Listen for the window losing focus.
    ///
    /// The listener stays attached until the returned subscription is dropped.
    pub fn on_blur(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = match self.listeners.lock() {
            Ok(mut guard) => {
                let id = guard.next_id;
                guard.next_id += 1;
                guard.entries.push((id, Arc::new(listener)));
                id
            }
            Err(_) => u64::MAX,
        };
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    pub fn blur_listener_count(&self) -> usize {
        self.listeners
            .lock()
            .map(|guard| guard.entries.len())
            .unwrap_or(0)
    }

    /// Notify every blur listener. Returns how many were called.
    pub fn dispatch_blur(&self) -> usize {
        // Snapshot first so listeners may subscribe or unsubscribe while running.
        let snapshot: Vec<Listener> = match self.listeners.lock() {
            Ok(guard) => guard.entries.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => return 0,
        };
        log::debug!("[window] blur -> {} listeners", snapshot.len());
        for listener in &snapshot {
            listener();
        }
        snapshot.len()
    }
}

/// Scoped listener registration. Dropping it detaches the listener.
#[must_use = "dropping a subscription detaches its listener"]
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl Subscription {
    pub fn is_attached(&self) -> bool {
        let Some(listeners) = self.listeners.upgrade() else {
            return false;
        };
        let attached = match listeners.lock() {
            Ok(guard) => guard.entries.iter().any(|(id, _)| *id == self.id),
            Err(_) => false,
        };
        attached
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            if let Ok(mut guard) = listeners.lock() {
                guard.entries.retain(|(id, _)| *id != self.id);
            }
        }
    }
}
