//! Storage backend capability trait
//!
//! Backends return boxed futures so implementations may be synchronous
//! (in-memory) or asynchronous (filesystem) behind the same seam. The engine
//! awaits each call before starting the next dependent step and places no
//! other ordering requirement on the backend.

use std::future::Future;
use std::pin::Pin;

use super::errors::KvResult;

/// Boxed future returned by backend operations
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Capability trait for the key-value storage primitive
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`, or `None` if the key is absent
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, KvResult<Option<String>>>;

    /// Store `value` under `key`, replacing any previous value
    fn set<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, KvResult<()>>;

    /// Remove the entry under `key`; removing an absent key succeeds
    fn remove<'a>(&'a self, key: &'a str) -> BoxFuture<'a, KvResult<()>>;
}
