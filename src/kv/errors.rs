//! Storage primitive error types
//!
//! Every variant names the failing operation and key. All I/O failures keep
//! their `std::io::Error` source for the error chain.

use std::io;

use thiserror::Error;

/// Result type for key-value backend operations
pub type KvResult<T> = Result<T, KvError>;

/// Failures of the underlying key-value backend
#[derive(Debug, Error)]
pub enum KvError {
    /// Reading a key failed
    #[error("failed to read key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Writing a key failed
    #[error("failed to write key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Removing a key failed
    #[error("failed to remove key '{key}': {source}")]
    Remove {
        key: String,
        #[source]
        source: io::Error,
    },

    /// The backend itself is unusable (e.g. a poisoned lock)
    #[error("storage backend unavailable: {0}")]
    Backend(String),
}

impl KvError {
    /// Returns the key involved, if the failure is tied to one
    pub fn key(&self) -> Option<&str> {
        match self {
            KvError::Read { key, .. }
            | KvError::Write { key, .. }
            | KvError::Remove { key, .. } => Some(key),
            KvError::Backend(_) => None,
        }
    }
}
