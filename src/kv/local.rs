//! Local filesystem backend
//!
//! One file per key under a root directory, written through `tokio::fs`.
//! A missing file maps to an absent key.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use super::backend::{BoxFuture, KvStore};
use super::errors::{KvError, KvResult};

/// Filesystem-backed key-value store
#[derive(Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KvStore for LocalStore {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, KvResult<Option<String>>> {
        Box::pin(async move {
            match fs::read_to_string(self.entry_path(key)).await {
                Ok(value) => Ok(Some(value)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(KvError::Read {
                    key: key.to_string(),
                    source: e,
                }),
            }
        })
    }

    fn set<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, KvResult<()>> {
        Box::pin(async move {
            fs::create_dir_all(&self.root).await.map_err(|e| KvError::Write {
                key: key.to_string(),
                source: e,
            })?;

            fs::write(self.entry_path(key), value)
                .await
                .map_err(|e| KvError::Write {
                    key: key.to_string(),
                    source: e,
                })
        })
    }

    fn remove<'a>(&'a self, key: &'a str) -> BoxFuture<'a, KvResult<()>> {
        Box::pin(async move {
            match fs::remove_file(self.entry_path(key)).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(KvError::Remove {
                    key: key.to_string(),
                    source: e,
                }),
            }
        })
    }
}
