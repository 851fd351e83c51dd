//! Translation lookup.
//!
//! Widgets never hold localized strings themselves. They ask a [`Translator`]
//! for `prefix.token` keys and fall back to the raw token when a key is missing.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::WidgetError;

/// Localization lookup supplied by the host.
pub trait Translator: Send + Sync {
    /// Resolve `key`. Missing keys yield `fallback`, or the key itself.
    fn translate(&self, key: &str, fallback: Option<&str>) -> String;

    /// Whether the catalog has finished loading. Until then widgets show
    /// empty text in places where a raw key would look broken.
    fn is_ready(&self) -> bool {
        true
    }
}

impl<F> Translator for F
where
    F: Fn(&str, Option<&str>) -> String + Send + Sync,
{
    fn translate(&self, key: &str, fallback: Option<&str>) -> String {
        self(key, fallback)
    }
}

/// In-memory translation catalog with dotted keys (`"option.toolbar.zoom"`).
#[derive(Debug, Clone)]
pub struct Translations {
    entries: HashMap<String, String>,
    ready: bool,
}

impl Default for Translations {
    fn default() -> Self {
        Self::new()
    }
}

impl Translations {
    /// An empty, ready catalog. Every lookup falls back.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            ready: true,
        }
    }

    /// A catalog whose resources are still loading.
    pub fn pending() -> Self {
        Self {
            entries: HashMap::new(),
            ready: false,
        }
    }

    /// Parse a nested JSON resource (i18next layout) into dotted keys.
    ///
    /// ```ignore
    /// let t = Translations::from_json(r#"{"message": {"noResults": "No results"}}"#)?;
    /// assert_eq!(t.translate("message.noResults", None), "No results");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            return Err(WidgetError::CatalogShape);
        };

        let mut entries = HashMap::new();
        for (key, value) in map {
            flatten_into(&mut entries, key, value);
        }
        log::debug!("Translations::from_json loaded {} keys", entries.len());

        Ok(Self {
            entries,
            ready: true,
        })
    }

    /// Read and parse a JSON resource file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WidgetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| WidgetError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Merge another catalog on top of this one and mark it ready.
    pub fn extend(&mut self, other: Translations) {
        self.entries.extend(other.entries);
        self.ready = true;
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Translations {
    fn translate(&self, key: &str, fallback: Option<&str>) -> String {
        if self.ready
            && let Some(value) = self.entries.get(key)
        {
            return value.clone();
        }
        fallback.unwrap_or(key).to_string()
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: String, value: Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(entries, format!("{prefix}.{key}"), child);
            }
        }
        Value::String(s) => {
            entries.insert(prefix, s);
        }
        Value::Null => {}
        // Numbers and booleans show up in some catalogs; keep their text form.
        other => {
            entries.insert(prefix, other.to_string());
        }
    }
}

/// Resolve an item's display token to localized text.
///
/// A `label_override` maps the token to a full key. Without one the key is
/// `"{prefix}.{token}"` with the token itself as fallback.
pub fn resolve_label(
    translator: &dyn Translator,
    prefix: Option<&str>,
    token: &str,
    label_override: Option<&(dyn Fn(&str) -> String + Send + Sync)>,
) -> String {
    if let Some(to_key) = label_override {
        return translator.translate(&to_key(token), None);
    }

    match prefix {
        Some(prefix) if !prefix.is_empty() => {
            translator.translate(&format!("{prefix}.{token}"), Some(token))
        }
        _ => translator.translate(token, Some(token)),
    }
}
