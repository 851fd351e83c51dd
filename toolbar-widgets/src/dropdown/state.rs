//! Dropdown widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use viewdom::{FocusState, Subscription, Window};

use super::placement::Placement;
use super::props::OpenedCallback;

/// Unique identifier for a Dropdown instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownId(usize);

impl DropdownId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DropdownId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__dropdown_{}", self.0)
    }
}

/// Interaction state reported by [`Dropdown::state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    Closed,
    Open,
    /// Open, with the free-text input holding focus.
    OpenWithInputFocused,
}

/// An option as it was last rendered, used to map clicks back to items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RenderedOption {
    pub element_id: String,
    pub key: String,
    /// Position in the supplied items (or images).
    pub index: usize,
    /// Localized text; `None` for icon options.
    pub label: Option<String>,
}

#[derive(Debug, Default)]
struct DropdownInner {
    /// Current text-field value (free-text mode).
    input_value: String,
    /// Filter query; cleared whenever the overlay closes.
    query: String,
    placement: Option<Placement>,
    rendered: Vec<RenderedOption>,
    blur_subscription: Option<Subscription>,
}

/// A dropdown selector with its own open/closed state.
///
/// Selection itself is owned by the parent (see
/// [`DropdownProps`](super::DropdownProps)); the dropdown only tracks whether
/// it is open, what has been typed, and where its overlay sits.
///
/// # Example
///
/// ```ignore
/// let zoom = Dropdown::new();
/// zoom.mount(&window);
///
/// // every frame
/// let tree = zoom.build(&props, &translations);
/// // host lays out `tree`, then for each event:
/// zoom.handle_event(&event, &props, &mut cx);
/// ```
#[derive(Debug)]
pub struct Dropdown {
    id: DropdownId,
    inner: Arc<RwLock<DropdownInner>>,
    is_open: Arc<AtomicBool>,
    dirty: Arc<AtomicBool>,
}

impl Dropdown {
    pub fn new() -> Self {
        Self {
            id: DropdownId::new(),
            inner: Arc::new(RwLock::new(DropdownInner::default())),
            is_open: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> DropdownId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn trigger_id(&self) -> String {
        format!("{}-trigger", self.id)
    }

    pub fn input_id(&self) -> String {
        format!("{}-input", self.id)
    }

    pub fn overlay_id(&self) -> String {
        format!("{}-overlay", self.id)
    }

    pub(crate) fn item_id(&self, index: usize) -> String {
        format!("{}-item-{}", self.id, index)
    }

    pub(crate) fn image_id(&self, index: usize) -> String {
        format!("{}-image-{}", self.id, index)
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Start listening for the host window losing focus.
    ///
    /// Mounting twice replaces the previous subscription.
    pub fn mount(&self, window: &Window) {
        let is_open = Arc::downgrade(&self.is_open);
        let inner = Arc::downgrade(&self.inner);
        let dirty = Arc::downgrade(&self.dirty);
        let id = self.id;

        let subscription = window.on_blur(move || {
            let (Some(is_open), Some(inner), Some(dirty)) =
                (is_open.upgrade(), inner.upgrade(), dirty.upgrade())
            else {
                return;
            };
            if is_open.swap(false, Ordering::SeqCst) {
                log::debug!("Dropdown {} closed by window blur", id);
                if let Ok(mut guard) = inner.write() {
                    guard.query.clear();
                }
                dirty.store(true, Ordering::SeqCst);
            }
        });

        if let Ok(mut guard) = self.inner.write() {
            guard.blur_subscription = Some(subscription);
        }
    }

    /// Detach from the window. The overlay is closed.
    pub fn unmount(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.blur_subscription = None;
        }
        self.close();
    }

    pub fn is_mounted(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.blur_subscription.is_some())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    pub fn state(&self, focus: &FocusState) -> DropdownState {
        if !self.is_open() {
            DropdownState::Closed
        } else if focus.is_focused(&self.input_id()) {
            DropdownState::OpenWithInputFocused
        } else {
            DropdownState::Open
        }
    }

    /// Open the overlay. Returns true if it was closed before.
    pub(crate) fn open(&self, on_opened: Option<&OpenedCallback>) -> bool {
        if self.is_open.swap(true, Ordering::SeqCst) {
            return false;
        }
        // The text field mounts fresh on every open.
        if let Ok(mut guard) = self.inner.write() {
            guard.input_value.clear();
        }
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("Dropdown {} opened", self.id);
        if let Some(on_opened) = on_opened {
            on_opened();
        }
        true
    }

    /// Close the overlay unconditionally. Clears the filter query.
    pub fn close(&self) {
        if self.is_open.swap(false, Ordering::SeqCst) {
            if let Ok(mut guard) = self.inner.write() {
                guard.query.clear();
            }
            self.dirty.store(true, Ordering::SeqCst);
            log::debug!("Dropdown {} closed", self.id);
        }
    }

    // -------------------------------------------------------------------------
    // Free-text input
    // -------------------------------------------------------------------------

    /// The filter query typed so far.
    pub fn query(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.query.clone())
            .unwrap_or_default()
    }

    /// The text field's current value.
    pub fn input_value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.input_value.clone())
            .unwrap_or_default()
    }

    pub(crate) fn set_input(&self, value: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.input_value = value.to_string();
            guard.query = value.to_string();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub(crate) fn set_input_value(&self, value: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.input_value = value.to_string();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub(crate) fn clear_query(&self) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.query.is_empty()
        {
            guard.query.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Overlay placement
    // -------------------------------------------------------------------------

    /// Placement chosen at the last toggle, if the overlay was measured then.
    pub fn placement(&self) -> Option<Placement> {
        self.inner
            .read()
            .map(|guard| guard.placement)
            .unwrap_or(None)
    }

    pub(crate) fn set_placement(&self, placement: Placement) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placement = Some(placement);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Rendered options (set during build)
    // -------------------------------------------------------------------------

    pub(crate) fn set_rendered(&self, rendered: Vec<RenderedOption>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rendered = rendered;
        }
    }

    /// Find the rendered option an event target belongs to.
    pub(crate) fn rendered_option(
        &self,
        contains: impl Fn(&str) -> bool,
    ) -> Option<RenderedOption> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.rendered.iter().find(|o| contains(&o.element_id)).cloned())
    }

    /// Keys of the options rendered by the last build, in order.
    pub fn rendered_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.rendered.iter().map(|o| o.key.clone()).collect())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the dropdown needs a re-render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Default for Dropdown {
    fn default() -> Self {
        Self::new()
    }
}
