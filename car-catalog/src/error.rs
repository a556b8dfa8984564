use thiserror::Error;

/// Errors that abort a catalog generation run.
///
/// Every variant is fatal; nothing is retried and no record is skipped.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Malformed catalog input in {path}: {source}")]
    InputMalformed {
        path: String,
        source: serde_json::Error,
    },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: String,
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    OutputWrite {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: String,
        to: String,
        source: std::io::Error,
    },
}
