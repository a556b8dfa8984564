//! Writing generated artifacts and mirroring them to the web tree.

use std::fs;
use std::path::Path;

use crate::error::CatalogError;
use crate::generate::{
    GenerateOptions, brand_list_file_name, generate, manifest_file_name, models_file_name,
    models_file_suffix,
};
use crate::json::{load_brand_inputs, write_json};
use crate::layout::CatalogLayout;
use crate::types::GeneratedCatalog;

/// Counts reported after a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub brands: usize,
    pub models: usize,
    pub files_written: usize,
    pub files_mirrored: usize,
}

fn create_dir(dir: &Path) -> Result<(), CatalogError> {
    fs::create_dir_all(dir).map_err(|e| CatalogError::OutputWrite {
        path: dir.display().to_string(),
        source: e,
    })
}

fn copy_file(from: &Path, to: &Path) -> Result<(), CatalogError> {
    fs::copy(from, to).map_err(|e| CatalogError::Copy {
        from: from.display().to_string(),
        to: to.display().to_string(),
        source: e,
    })?;
    Ok(())
}

/// Write every artifact of `catalog` under the primary output directory.
///
/// Returns the number of files written. Existing files are overwritten.
pub fn write_catalog(
    catalog: &GeneratedCatalog,
    layout: &CatalogLayout,
) -> Result<usize, CatalogError> {
    create_dir(&layout.output_dir)?;
    create_dir(&layout.brands_dir)?;

    let mut written = 0;
    for brand in &catalog.brand_models {
        let path = layout
            .brands_dir
            .join(models_file_name(&brand.brand_id, catalog.version));
        write_json(&path, brand)?;
        log::info!("  Generated {}: {} models", brand.brand_id, brand.models.len());
        written += 1;
    }

    let brand_list_path = layout.output_dir.join(brand_list_file_name(catalog.version));
    write_json(&brand_list_path, &catalog.brand_list)?;
    log::info!("Written {}", brand_list_path.display());

    let manifest_path = layout.output_dir.join(manifest_file_name(catalog.version));
    write_json(&manifest_path, &catalog.manifest)?;
    log::info!("Written {}", manifest_path.display());

    Ok(written + 2)
}

/// Copy the primary artifacts byte-for-byte into the mirror directory.
///
/// Every models file of `version` present in the primary brands directory
/// is copied, in file name order. Returns the number of files copied.
pub fn mirror_catalog(layout: &CatalogLayout, version: u32) -> Result<usize, CatalogError> {
    create_dir(&layout.mirror_dir)?;
    create_dir(&layout.mirror_brands_dir)?;

    for name in [brand_list_file_name(version), manifest_file_name(version)] {
        copy_file(&layout.output_dir.join(&name), &layout.mirror_dir.join(&name))?;
    }

    let suffix = models_file_suffix(version);
    let mut entries: Vec<_> = fs::read_dir(&layout.brands_dir)
        .map_err(|e| CatalogError::Io {
            path: layout.brands_dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(&suffix))
        .collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in &entries {
        copy_file(&entry.path(), &layout.mirror_brands_dir.join(entry.file_name()))?;
    }

    log::info!("Copied to {}", layout.mirror_dir.display());
    Ok(entries.len() + 2)
}

/// Run the full pipeline: load, generate, write, mirror.
///
/// Input is loaded and validated before any directory is created, so a
/// missing or malformed input leaves the output trees untouched. A mirror
/// failure leaves the primary artifacts in place.
pub fn run(layout: &CatalogLayout, options: &GenerateOptions) -> Result<RunSummary, CatalogError> {
    log::info!("Reading {}...", layout.input.display());
    let inputs = load_brand_inputs(&layout.input)?;

    let catalog = generate(&inputs, options);
    let files_written = write_catalog(&catalog, layout)?;
    log::info!(
        "Generated {} brands with catalog structure.",
        catalog.brand_list.brands.len()
    );

    let files_mirrored = mirror_catalog(layout, catalog.version)?;

    Ok(RunSummary {
        brands: catalog.brand_list.brands.len(),
        models: catalog.model_count(),
        files_written,
        files_mirrored,
    })
}
