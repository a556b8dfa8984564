use std::path::Path;

use car_catalog::{CatalogLayout, GenerateOptions, RunSummary};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Regenerate the car catalog under `root` and mirror it to the web tree.
pub(crate) fn run_generate(root: &Path, today: NaiveDate) -> Result<RunSummary, CliError> {
    let layout = CatalogLayout::from_repo_root(root);
    let options = GenerateOptions::new(today);

    let summary = car_catalog::run(&layout, &options)?;

    crate::log_blank();
    log::info!(
        "{}",
        "Car catalog generated".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Brands:         {:>6}", summary.brands);
    log::info!("  Models:         {:>6}", summary.models);
    log::info!("  Files written:  {:>6}", summary.files_written);
    log::info!("  Files mirrored: {:>6}", summary.files_mirrored);
    log::info!("Done!");

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    #[test]
    fn generates_into_root() {
        let tmp = TempDir::new().unwrap();
        let layout = CatalogLayout::from_repo_root(tmp.path());
        fs::create_dir_all(layout.input.parent().unwrap()).unwrap();
        fs::write(
            &layout.input,
            r#"[{"brandEn":"Audi","brandHe":"אודי","models":[{"modelEn":"A4","modelHe":"A4"}]}]"#,
        )
        .unwrap();

        let summary = run_generate(tmp.path(), today()).unwrap();
        assert_eq!(summary.brands, 1);
        assert!(layout.mirror_brands_dir.join("audi.models.v1.json").is_file());
    }

    #[test]
    fn missing_input_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = run_generate(tmp.path(), today()).unwrap_err();
        assert!(err.to_string().starts_with("Input file not found"));
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}
