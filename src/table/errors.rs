//! Table engine error types
//!
//! The three failure classes of every operation:
//! - `Parse`: the stored value is not valid JSON
//! - `Validation`: a record or stored array violates the schema
//! - `Io`: the underlying key-value backend failed
//!
//! All failures are returned as values; none is retried internally.

use thiserror::Error;

use crate::kv::KvError;
use crate::schema::SchemaError;

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Failure of a single table operation
#[derive(Debug, Error)]
pub enum TableError {
    /// The stored value for a table is not valid JSON
    #[error("stored value for table '{table}' is not valid JSON: {source}")]
    Parse {
        table: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record, batch, or stored array violated the schema
    #[error("validation failed: {0}")]
    Validation(#[from] SchemaError),

    /// The storage primitive failed on get/set/remove
    #[error(transparent)]
    Io(#[from] KvError),
}

impl TableError {
    /// Whether this failure came from schema validation
    pub fn is_validation(&self) -> bool {
        matches!(self, TableError::Validation(_))
    }

    /// Whether this failure came from the storage backend
    pub fn is_io(&self) -> bool {
        matches!(self, TableError::Io(_))
    }
}
