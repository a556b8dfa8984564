//! Data model types for the car catalog.
//!
//! Input records mirror the hand-maintained source file; derived records and
//! artifact envelopes mirror the generated JSON consumed by the app and web.

use serde::{Deserialize, Serialize};

// ── Input ───────────────────────────────────────────────────────────────────

/// A brand record from the source catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInput {
    pub brand_en: String,
    pub brand_he: String,
    #[serde(default)]
    pub models: Vec<ModelInput>,
}

/// A model record nested under a [`BrandInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInput {
    pub model_en: String,
    pub model_he: String,
}

// ── Derived ─────────────────────────────────────────────────────────────────

/// A brand with its derived identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub brand_id: String,
    pub brand_en: String,
    pub brand_he: String,
}

/// A model with its brand-namespaced identifier (`<brandId>:<slug>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub model_id: String,
    pub model_en: String,
    pub model_he: String,
}

/// Manifest row: brand metadata plus a pointer to its models file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandManifestEntry {
    pub brand_id: String,
    pub brand_en: String,
    pub brand_he: String,
    pub models_count: usize,
    /// Path of the models file relative to the app's raw resource directory.
    pub models_ref: String,
}

// ── Artifacts ───────────────────────────────────────────────────────────────

/// Flat brand list (`brands_only.v<N>.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandList {
    pub version: u32,
    pub generated_at: String,
    pub brands: Vec<Brand>,
}

/// Brand manifest (`brand_manifest.v<N>.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandManifest {
    pub version: u32,
    pub generated_at: String,
    pub brands: Vec<BrandManifestEntry>,
}

/// Per-brand models file (`<brandId>.models.v<N>.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandModels {
    pub version: u32,
    pub brand_id: String,
    pub brand_en: String,
    pub brand_he: String,
    pub generated_at: String,
    pub models: Vec<Model>,
}

/// Everything a single generator run produces, before it touches disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCatalog {
    pub version: u32,
    pub brand_list: BrandList,
    pub manifest: BrandManifest,
    /// One entry per input brand, in input order.
    pub brand_models: Vec<BrandModels>,
}

impl GeneratedCatalog {
    /// Total number of models across all brands.
    pub fn model_count(&self) -> usize {
        self.brand_models.iter().map(|b| b.models.len()).sum()
    }
}
