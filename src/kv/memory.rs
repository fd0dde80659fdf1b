//! In-memory backend
//!
//! HashMap behind a Mutex. Used as the test backend and wherever persistence
//! across process restarts is not needed.

use std::collections::HashMap;
use std::sync::Mutex;

use super::backend::{BoxFuture, KvStore};
use super::errors::{KvError, KvResult};

/// In-memory key-value backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> KvResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| KvError::Backend(format!("lock poisoned: {}", e)))
    }
}

impl KvStore for MemoryStore {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, KvResult<Option<String>>> {
        Box::pin(async move { Ok(self.lock()?.get(key).cloned()) })
    }

    fn set<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, KvResult<()>> {
        Box::pin(async move {
            self.lock()?.insert(key.to_string(), value);
            Ok(())
        })
    }

    fn remove<'a>(&'a self, key: &'a str) -> BoxFuture<'a, KvResult<()>> {
        Box::pin(async move {
            self.lock()?.remove(key);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("users", "[]".into()).await.unwrap();
        assert_eq!(store.get("users").await.unwrap(), Some("[]".into()));
    }

    #[tokio::test]
    async fn test_get_absent_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set("k", "a".into()).await.unwrap();
        store.set("k", "b".into()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("b".into()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("k", "v".into()).await.unwrap();
        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }
}
