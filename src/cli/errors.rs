//! CLI-specific error types

use thiserror::Error;

use crate::table::TableError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// Failure of a CLI command
#[derive(Debug, Error)]
pub enum CliError {
    /// A table operation failed
    #[error(transparent)]
    Table(#[from] TableError),

    /// Rendering output failed
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}
