//! Where the generator reads from and writes to.
//!
//! All paths hang off the repository root:
//! ```text
//! <root>/
//!   app/src/main/res/raw/
//!     car_catalog_models_he_en.json     (input)
//!     car_catalog/
//!       brands_only.v1.json
//!       brand_manifest.v1.json
//!       brands/<brandId>.models.v1.json
//!   web/public/car_catalog/             (mirror, same layout)
//! ```

use std::path::{Path, PathBuf};

/// Resolved input and output paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLayout {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub brands_dir: PathBuf,
    pub mirror_dir: PathBuf,
    pub mirror_brands_dir: PathBuf,
}

impl CatalogLayout {
    pub fn from_repo_root(root: &Path) -> Self {
        let raw = root.join("app").join("src").join("main").join("res").join("raw");
        let output_dir = raw.join("car_catalog");
        let mirror_dir = root.join("web").join("public").join("car_catalog");

        Self {
            input: raw.join("car_catalog_models_he_en.json"),
            brands_dir: output_dir.join("brands"),
            output_dir,
            mirror_brands_dir: mirror_dir.join("brands"),
            mirror_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_derive_from_root() {
        let layout = CatalogLayout::from_repo_root(Path::new("/repo"));
        assert_eq!(
            layout.input,
            Path::new("/repo/app/src/main/res/raw/car_catalog_models_he_en.json")
        );
        assert_eq!(
            layout.brands_dir,
            Path::new("/repo/app/src/main/res/raw/car_catalog/brands")
        );
        assert_eq!(
            layout.mirror_brands_dir,
            Path::new("/repo/web/public/car_catalog/brands")
        );
    }
}
