//! Toolbar widgets for the document viewer.
//!
//! Widgets are headless: each one builds a `viewdom::Element` tree from its
//! props, and the host lays that tree out, measures it and feeds events back
//! through `handle_event` together with a [`WidgetCx`].

pub mod behaviors;
pub mod color_palette;
pub mod context;
pub mod dropdown;
pub mod error;
pub mod i18n;

pub use context::WidgetCx;
pub use error::WidgetError;

pub mod prelude {
    pub use crate::color_palette::{Color, ColorPalettePicker, ColorPalettePickerProps};
    pub use crate::context::WidgetCx;
    pub use crate::dropdown::{
        Dropdown, DropdownItem, DropdownProps, DropdownState, ImageItem, Placement,
    };
    pub use crate::error::WidgetError;
    pub use crate::i18n::{Translations, Translator};

    pub use viewdom::{Element, Event, EventResult, FocusState, LayoutResult, Rect, Window};
}
