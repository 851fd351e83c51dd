//! Dropdown configuration.

use std::fmt;
use std::sync::Arc;

use viewdom::{Element, StyleMap};

use super::item::{DropdownItem, ImageItem};

/// Trigger width in pixels when none is configured.
pub const DEFAULT_WIDTH: i32 = 100;

/// Row height used when the overlay scrolls inside `max_height`.
pub const DENSE_ROW_HEIGHT: i32 = 28;

/// Called with the selected key (or free text) and its item index.
///
/// The index is `None` when the value did not come from a list position
/// (unmatched free text, or the fallback default).
pub type ItemCallback = Arc<dyn Fn(&str, Option<usize>) + Send + Sync>;
pub type OpenedCallback = Arc<dyn Fn() + Send + Sync>;
pub type ValidatorFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;
pub type LabelFn = Arc<dyn Fn(&str) -> String + Send + Sync>;
pub type ItemStyleFn<T> = Arc<dyn Fn(&T) -> StyleMap + Send + Sync>;
/// Replaces the stock trigger; receives whether the overlay is open.
pub type DisplayButtonFn = Arc<dyn Fn(bool) -> Element + Send + Sync>;

/// Everything the parent configures on a Dropdown.
///
/// The dropdown is controlled: `current_selection_key` belongs to the parent,
/// which updates it from `on_click_item`.
///
/// # Example
///
/// ```ignore
/// let props = DropdownProps::new(vec!["fitWidth", "fitPage"])
///     .translation_prefix("option.zoom")
///     .current_selection_key("fitPage")
///     .data_element("zoomDropdown")
///     .on_click_item(|key, _| println!("zoom -> {key}"));
/// ```
pub struct DropdownProps<T> {
    pub items: Vec<T>,
    /// Icon options. When non-empty they replace `items` for display.
    pub images: Vec<ImageItem>,
    pub width: i32,
    pub current_selection_key: Option<String>,
    pub translation_prefix: Option<String>,
    pub translation_label: Option<LabelFn>,
    pub data_element: Option<String>,
    pub class_name: String,
    pub disabled: bool,
    pub custom_item_style: Option<ItemStyleFn<T>>,
    pub apply_custom_style_to_button: bool,
    pub placeholder: Option<String>,
    pub max_height: Option<i32>,
    pub has_input: bool,
    pub search_enabled: bool,
    pub custom_data_validator: Option<ValidatorFn>,
    pub display_button: Option<DisplayButtonFn>,
    pub on_click_item: Option<ItemCallback>,
    pub on_opened: Option<OpenedCallback>,
}

impl<T> Default for DropdownProps<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            images: Vec::new(),
            width: DEFAULT_WIDTH,
            current_selection_key: None,
            translation_prefix: None,
            translation_label: None,
            data_element: None,
            class_name: String::new(),
            disabled: false,
            custom_item_style: None,
            apply_custom_style_to_button: true,
            placeholder: None,
            max_height: None,
            has_input: false,
            search_enabled: true,
            custom_data_validator: None,
            display_button: None,
            on_click_item: None,
            on_opened: None,
        }
    }
}

impl<T: Clone> Clone for DropdownProps<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            images: self.images.clone(),
            width: self.width,
            current_selection_key: self.current_selection_key.clone(),
            translation_prefix: self.translation_prefix.clone(),
            translation_label: self.translation_label.clone(),
            data_element: self.data_element.clone(),
            class_name: self.class_name.clone(),
            disabled: self.disabled,
            custom_item_style: self.custom_item_style.clone(),
            apply_custom_style_to_button: self.apply_custom_style_to_button,
            placeholder: self.placeholder.clone(),
            max_height: self.max_height,
            has_input: self.has_input,
            search_enabled: self.search_enabled,
            custom_data_validator: self.custom_data_validator.clone(),
            display_button: self.display_button.clone(),
            on_click_item: self.on_click_item.clone(),
            on_opened: self.on_opened.clone(),
        }
    }
}

impl<T> fmt::Debug for DropdownProps<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownProps")
            .field("items", &self.items.len())
            .field("images", &self.images.len())
            .field("width", &self.width)
            .field("current_selection_key", &self.current_selection_key)
            .field("translation_prefix", &self.translation_prefix)
            .field("data_element", &self.data_element)
            .field("disabled", &self.disabled)
            .field("max_height", &self.max_height)
            .field("has_input", &self.has_input)
            .field("search_enabled", &self.search_enabled)
            .finish_non_exhaustive()
    }
}

impl<T: DropdownItem> DropdownProps<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Whether icon options are shown instead of text items.
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// First item whose key is the current selection.
    pub fn selected_item(&self) -> Option<(usize, &T)> {
        let key = self.current_selection_key.as_deref()?;
        self.items
            .iter()
            .enumerate()
            .find(|(_, item)| item.key() == key)
    }

    pub fn is_valid_text(&self, text: &str) -> bool {
        self.custom_data_validator
            .as_ref()
            .is_none_or(|validate| validate(text))
    }

    pub fn item_style(&self, item: &T) -> StyleMap {
        self.custom_item_style
            .as_ref()
            .map(|style| style(item))
            .unwrap_or_default()
    }

    // Builder methods

    pub fn images(mut self, images: impl IntoIterator<Item = ImageItem>) -> Self {
        self.images = images.into_iter().collect();
        self
    }

    /// Set the trigger width in pixels.
    pub fn width(mut self, width: i32) -> Self {
        self.width = width;
        self
    }

    pub fn current_selection_key(mut self, key: impl Into<String>) -> Self {
        self.current_selection_key = Some(key.into());
        self
    }

    pub fn translation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.translation_prefix = Some(prefix.into());
        self
    }

    /// Map display tokens to full translation keys instead of using the prefix.
    pub fn translation_label(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.translation_label = Some(Arc::new(f));
        self
    }

    pub fn data_element(mut self, data_element: impl Into<String>) -> Self {
        self.data_element = Some(data_element.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn custom_item_style(mut self, f: impl Fn(&T) -> StyleMap + Send + Sync + 'static) -> Self {
        self.custom_item_style = Some(Arc::new(f));
        self
    }

    pub fn apply_custom_style_to_button(mut self, apply: bool) -> Self {
        self.apply_custom_style_to_button = apply;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Cap the overlay height; rows switch to the dense height.
    pub fn max_height(mut self, max_height: i32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Allow free text to be typed into the trigger while open.
    pub fn has_input(mut self, has_input: bool) -> Self {
        self.has_input = has_input;
        self
    }

    pub fn search_enabled(mut self, enabled: bool) -> Self {
        self.search_enabled = enabled;
        self
    }

    pub fn custom_data_validator(mut self, f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.custom_data_validator = Some(Arc::new(f));
        self
    }

    pub fn display_button(mut self, f: impl Fn(bool) -> Element + Send + Sync + 'static) -> Self {
        self.display_button = Some(Arc::new(f));
        self
    }

    pub fn on_click_item(mut self, f: impl Fn(&str, Option<usize>) + Send + Sync + 'static) -> Self {
        self.on_click_item = Some(Arc::new(f));
        self
    }

    pub fn on_opened(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_opened = Some(Arc::new(f));
        self
    }
}
