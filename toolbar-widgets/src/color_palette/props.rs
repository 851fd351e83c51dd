use std::fmt;
use std::sync::Arc;

use super::color::{same_hex, Color};

pub type HexColorFn = Arc<dyn Fn(&Color) -> String + Send + Sync>;
pub type CustomIndexFn = Arc<dyn Fn(&str) -> Option<usize> + Send + Sync>;
pub type MarkForDeletionFn = Arc<dyn Fn(&str) + Send + Sync>;
pub type SelectColorFn = Arc<dyn Fn(Color) + Send + Sync>;

/// Configuration for a [`ColorPalettePicker`](super::ColorPalettePicker).
///
/// Which custom color is pending deletion is owned by the caller, like the
/// selected color.
#[derive(Clone)]
pub struct ColorPalettePickerProps {
    /// Currently selected color.
    pub color: Color,
    /// User-added colors as hex strings, shown after the default palette.
    pub custom_colors: Vec<String>,
    /// Default-palette entries to hide.
    pub colors_to_ignore: Vec<String>,
    pub color_to_be_deleted: Option<String>,
    pub data_element: Option<String>,
    pub get_hex_color: Option<HexColorFn>,
    pub find_custom_colors_index: Option<CustomIndexFn>,
    pub set_color_to_be_deleted: Option<MarkForDeletionFn>,
    pub on_select: Option<SelectColorFn>,
}

impl Default for ColorPalettePickerProps {
    fn default() -> Self {
        Self {
            color: Color::rgb(0, 0, 0),
            custom_colors: Vec::new(),
            colors_to_ignore: Vec::new(),
            color_to_be_deleted: None,
            data_element: None,
            get_hex_color: None,
            find_custom_colors_index: None,
            set_color_to_be_deleted: None,
            on_select: None,
        }
    }
}

impl fmt::Debug for ColorPalettePickerProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPalettePickerProps")
            .field("color", &self.color)
            .field("custom_colors", &self.custom_colors)
            .field("colors_to_ignore", &self.colors_to_ignore)
            .field("color_to_be_deleted", &self.color_to_be_deleted)
            .field("data_element", &self.data_element)
            .finish_non_exhaustive()
    }
}

impl ColorPalettePickerProps {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Hex form of `color`, through `get_hex_color` when one is set.
    pub fn hex_of(&self, color: &Color) -> String {
        match &self.get_hex_color {
            Some(get_hex_color) => get_hex_color(color),
            None => color.to_hex(),
        }
    }

    /// Position of `hex` in `custom_colors`.
    pub fn custom_index(&self, hex: &str) -> Option<usize> {
        match &self.find_custom_colors_index {
            Some(find) => find(hex),
            None => self.custom_colors.iter().position(|c| same_hex(c, hex)),
        }
    }

    pub fn is_ignored(&self, hex: &str) -> bool {
        self.colors_to_ignore.iter().any(|c| same_hex(c, hex))
    }

    // Builder methods

    pub fn custom_colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.custom_colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn colors_to_ignore<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.colors_to_ignore = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn color_to_be_deleted(mut self, hex: impl Into<String>) -> Self {
        self.color_to_be_deleted = Some(hex.into());
        self
    }

    pub fn data_element(mut self, data_element: impl Into<String>) -> Self {
        self.data_element = Some(data_element.into());
        self
    }

    pub fn get_hex_color(mut self, f: impl Fn(&Color) -> String + Send + Sync + 'static) -> Self {
        self.get_hex_color = Some(Arc::new(f));
        self
    }

    pub fn find_custom_colors_index(
        mut self,
        f: impl Fn(&str) -> Option<usize> + Send + Sync + 'static,
    ) -> Self {
        self.find_custom_colors_index = Some(Arc::new(f));
        self
    }

    pub fn set_color_to_be_deleted(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.set_color_to_be_deleted = Some(Arc::new(f));
        self
    }

    pub fn on_select(mut self, f: impl Fn(Color) + Send + Sync + 'static) -> Self {
        self.on_select = Some(Arc::new(f));
        self
    }
}
