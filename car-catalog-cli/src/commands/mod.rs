pub(crate) mod generate;

use std::path::{Path, PathBuf};

use crate::CliError;

/// Root of the app repository this tool lives in.
///
/// The workspace sits one level below the repository root (like any other
/// `tools/` entry), so the root is two levels above this crate. Resolved at
/// build time, never from the working directory or the environment.
pub(crate) fn default_repo_root() -> Result<PathBuf, CliError> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            CliError::layout(format!(
                "No repository root above {}",
                manifest_dir.display()
            ))
        })
}
