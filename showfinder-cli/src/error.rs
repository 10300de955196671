use thiserror::Error;

use showfinder_catalog::CatalogError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog could not be read
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
