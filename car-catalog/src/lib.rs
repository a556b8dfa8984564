//! Car catalog generator: stable IDs and versioned JSON artifacts.
//!
//! Reads the bilingual brand/model source file, derives URL-safe brand and
//! model identifiers, and writes a flat brand list, a brand manifest and one
//! models file per brand, mirrored into the web tree.

pub mod error;
pub mod generate;
pub mod ids;
pub mod json;
pub mod layout;
pub mod output;
pub mod slug;
pub mod types;

pub use error::CatalogError;
pub use generate::{FORMAT_VERSION, GenerateOptions, generate};
pub use ids::{brand_id, ensure_unique_model_ids, model_id};
pub use json::{load_brand_inputs, write_json};
pub use layout::CatalogLayout;
pub use output::{RunSummary, mirror_catalog, run, write_catalog};
pub use slug::slugify;
pub use types::*;
