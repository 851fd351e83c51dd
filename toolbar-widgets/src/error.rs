//! Error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    /// A color string could not be read as `#rgb` / `#rrggbb`.
    #[error("invalid hex color {input:?}")]
    InvalidHexColor {
        input: String,
        #[source]
        source: palette::rgb::FromHexError,
    },

    /// A translation catalog was not valid JSON.
    #[error("failed to parse translation catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    /// A translation catalog parsed, but its root was not an object.
    #[error("translation catalog root must be an object")]
    CatalogShape,

    #[error("failed to read translation catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
