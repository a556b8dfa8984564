use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog generation failed
    #[error("{0}")]
    Catalog(#[from] car_catalog::CatalogError),

    /// Repository layout could not be resolved
    #[error("Layout error: {0}")]
    Layout(String),
}

impl CliError {
    pub(crate) fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }
}
