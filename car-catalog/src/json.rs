//! JSON loading and writing for catalog files.
//!
//! Output is indented with two spaces, keeps non-ASCII text (Hebrew names)
//! literal and has no trailing newline, matching the files already shipped
//! in the app.

use std::path::Path;

use serde::Serialize;

use crate::error::CatalogError;
use crate::types::BrandInput;

/// Load the ordered brand list from the source catalog file.
pub fn load_brand_inputs(path: &Path) -> Result<Vec<BrandInput>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::InputNotFound(path.display().to_string()));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| CatalogError::InputMalformed {
        path: path.display().to_string(),
        source: e,
    })
}

/// Render a value as pretty-printed JSON.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Serialize `value` and write it to `path`, replacing any existing file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CatalogError> {
    let json = to_pretty_json(value).map_err(|e| CatalogError::Serialize {
        path: path.display().to_string(),
        source: e,
    })?;

    std::fs::write(path, json).map_err(|e| CatalogError::OutputWrite {
        path: path.display().to_string(),
        source: e,
    })
}
