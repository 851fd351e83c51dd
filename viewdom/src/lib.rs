pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod style;
pub mod task;
pub mod terminal;
pub mod window;

pub use element::{contains, find_element, Content, Element, Tag};
pub use event::{Event, EventResult, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::hit_test;
pub use layout::{LayoutResult, Rect};
pub use style::StyleMap;
pub use task::{TaskCx, TaskQueue};
pub use terminal::translate_terminal_event;
pub use window::{Subscription, Window};
