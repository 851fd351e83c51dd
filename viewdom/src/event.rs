/// High-level host events with element targeting.
///
/// `target` is the deepest element under the pointer (or the focused element
/// for keys); `None` means the event landed outside the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse button pressed
    PointerDown {
        target: Option<String>,
        x: i32,
        y: i32,
        button: MouseButton,
    },
    /// Mouse button released
    PointerUp {
        target: Option<String>,
        x: i32,
        y: i32,
        button: MouseButton,
    },
    /// Finger touched the surface
    TouchStart { target: Option<String> },
    /// Finger lifted from the surface
    TouchEnd { target: Option<String> },
    /// Completed click (press + release on the same element)
    Click {
        target: Option<String>,
        button: MouseButton,
    },
    /// Key press, targeted at the focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Text field content changed
    Input { target: String, value: String },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur {
        target: String,
        new_target: Option<String>,
    },
    /// The host window lost focus. Carries no target.
    WindowBlur,
    /// Host viewport resized
    Resize { width: i32, height: i32 },
}

impl Event {
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::PointerDown { target, .. }
            | Self::PointerUp { target, .. }
            | Self::TouchStart { target }
            | Self::TouchEnd { target }
            | Self::Click { target, .. }
            | Self::Key { target, .. } => target.as_deref(),
            Self::Input { target, .. } | Self::Focus { target } | Self::Blur { target, .. } => {
                Some(target)
            }
            Self::WindowBlur | Self::Resize { .. } => None,
        }
    }

    /// Pointer-down style events (mouse press or touch start).
    pub fn is_press(&self) -> bool {
        matches!(self, Self::PointerDown { .. } | Self::TouchStart { .. })
    }

    pub fn key(target: Option<&str>, key: Key) -> Self {
        Self::Key {
            target: target.map(str::to_string),
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn pointer_down(target: Option<&str>) -> Self {
        Self::PointerDown {
            target: target.map(str::to_string),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    pub fn click(target: Option<&str>) -> Self {
        Self::Click {
            target: target.map(str::to_string),
            button: MouseButton::Left,
        }
    }
}

/// What a handler did with an event.
///
/// Mirrors the host's own dispatch flags: a handled event may additionally
/// suppress the host default action and stop bubbling to outer listeners
/// (such as click-outside detection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResult {
    pub handled: bool,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl EventResult {
    pub const IGNORED: Self = Self {
        handled: false,
        default_prevented: false,
        propagation_stopped: false,
    };

    pub const fn handled() -> Self {
        Self {
            handled: true,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub const fn prevent_default(mut self) -> Self {
        self.default_prevented = true;
        self
    }

    pub const fn stop_propagation(mut self) -> Self {
        self.propagation_stopped = true;
        self
    }

    pub const fn is_handled(&self) -> bool {
        self.handled
    }

    /// Combine results from two handlers that saw the same event.
    pub const fn merge(self, other: Self) -> Self {
        Self {
            handled: self.handled || other.handled,
            default_prevented: self.default_prevented || other.default_prevented,
            propagation_stopped: self.propagation_stopped || other.propagation_stopped,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
