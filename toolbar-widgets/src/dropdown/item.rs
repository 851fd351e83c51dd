//! Items that can be shown in a Dropdown.

use serde::{Deserialize, Serialize};

/// Trait for values listed in a Dropdown.
///
/// Keys identify items for selection and must be unique within one list;
/// when they are not, lookups take the first match. The display value is a
/// translation token, resolved through the dropdown's translation prefix.
///
/// # Example
///
/// ```ignore
/// struct ZoomLevel { percent: u32 }
///
/// impl DropdownItem for ZoomLevel {
///     fn key(&self) -> String {
///         self.percent.to_string()
///     }
///
///     fn display_value(&self) -> String {
///         format!("{}%", self.percent)
///     }
/// }
/// ```
pub trait DropdownItem {
    fn key(&self) -> String;

    /// Defaults to the key.
    fn display_value(&self) -> String {
        self.key()
    }
}

impl DropdownItem for String {
    fn key(&self) -> String {
        self.clone()
    }
}

impl DropdownItem for &str {
    fn key(&self) -> String {
        (*self).to_string()
    }
}

// (key, display token) pairs
impl<S1, S2> DropdownItem for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn key(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn display_value(&self) -> String {
        self.1.as_ref().to_string()
    }
}

/// An icon option, used instead of text items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    pub key: String,
    /// Icon glyph reference.
    pub src: String,
    #[serde(default, rename = "className")]
    pub class_name: String,
}

impl ImageItem {
    pub fn new(key: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            src: src.into(),
            class_name: String::new(),
        }
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

/// Position of the first image whose key is `key`.
pub fn image_index(images: &[ImageItem], key: Option<&str>) -> Option<usize> {
    let key = key?;
    images.iter().position(|image| image.key == key)
}
