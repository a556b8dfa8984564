//! Assembly of the versioned catalog artifacts from source records.
//!
//! Generation is pure: the date and format version come in through
//! [`GenerateOptions`], so the same input always yields the same catalog.

use chrono::NaiveDate;

use crate::ids::{brand_id, ensure_unique_model_ids, find_duplicate_brand_ids, model_id};
use crate::types::{
    Brand, BrandInput, BrandList, BrandManifest, BrandManifestEntry, BrandModels,
    GeneratedCatalog, Model,
};

/// Current artifact format version, written to every file and file name.
pub const FORMAT_VERSION: u32 = 1;

/// Directory that `modelsRef` paths are relative to, as seen by the app.
pub const DEFAULT_MODELS_REF_DIR: &str = "car_catalog/brands";

/// Inputs to a generation run that do not come from the catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub version: u32,
    pub generated_at: NaiveDate,
    pub models_ref_dir: String,
}

impl GenerateOptions {
    /// Options for the current format version, stamped with `generated_at`.
    pub fn new(generated_at: NaiveDate) -> Self {
        Self {
            version: FORMAT_VERSION,
            generated_at,
            models_ref_dir: DEFAULT_MODELS_REF_DIR.to_string(),
        }
    }

    /// The `generatedAt` value as written to disk (`YYYY-MM-DD`).
    pub fn generated_at_str(&self) -> String {
        self.generated_at.format("%Y-%m-%d").to_string()
    }
}

/// File name of the flat brand list for a format version.
pub fn brand_list_file_name(version: u32) -> String {
    format!("brands_only.v{version}.json")
}

/// File name of the brand manifest for a format version.
pub fn manifest_file_name(version: u32) -> String {
    format!("brand_manifest.v{version}.json")
}

/// Suffix shared by every per-brand models file of a format version.
pub fn models_file_suffix(version: u32) -> String {
    format!(".models.v{version}.json")
}

/// File name of one brand's models file.
pub fn models_file_name(brand_id: &str, version: u32) -> String {
    format!("{brand_id}{}", models_file_suffix(version))
}

/// Derive brands and models from `inputs` and assemble all artifacts.
pub fn generate(inputs: &[BrandInput], options: &GenerateOptions) -> GeneratedCatalog {
    let generated_at = options.generated_at_str();

    let mut brands = Vec::with_capacity(inputs.len());
    let mut manifest_entries = Vec::with_capacity(inputs.len());
    let mut brand_models = Vec::with_capacity(inputs.len());

    for input in inputs {
        let brand = build_brand(input);
        let models = build_models(&brand.brand_id, input);

        manifest_entries.push(BrandManifestEntry {
            brand_id: brand.brand_id.clone(),
            brand_en: brand.brand_en.clone(),
            brand_he: brand.brand_he.clone(),
            models_count: models.len(),
            models_ref: format!(
                "{}/{}",
                options.models_ref_dir,
                models_file_name(&brand.brand_id, options.version)
            ),
        });

        brand_models.push(BrandModels {
            version: options.version,
            brand_id: brand.brand_id.clone(),
            brand_en: brand.brand_en.clone(),
            brand_he: brand.brand_he.clone(),
            generated_at: generated_at.clone(),
            models,
        });

        brands.push(brand);
    }

    for duplicate in find_duplicate_brand_ids(&brands) {
        log::warn!(
            "Brand ID '{}' is shared by several brands; its models file will be overwritten",
            duplicate,
        );
    }

    GeneratedCatalog {
        version: options.version,
        brand_list: BrandList {
            version: options.version,
            generated_at: generated_at.clone(),
            brands,
        },
        manifest: BrandManifest {
            version: options.version,
            generated_at,
            brands: manifest_entries,
        },
        brand_models,
    }
}

fn build_brand(input: &BrandInput) -> Brand {
    Brand {
        brand_id: brand_id(&input.brand_en),
        brand_en: input.brand_en.clone(),
        brand_he: input.brand_he.clone(),
    }
}

fn build_models(brand_id: &str, input: &BrandInput) -> Vec<Model> {
    let mut models: Vec<Model> = input
        .models
        .iter()
        .map(|m| Model {
            model_id: model_id(brand_id, &m.model_en),
            model_en: m.model_en.clone(),
            model_he: m.model_he.clone(),
        })
        .collect();
    ensure_unique_model_ids(&mut models);
    models
}
