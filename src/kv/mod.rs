//! Key-value storage primitive for shelfdb
//!
//! The engine consumes storage through the narrow `KvStore` capability:
//! get/set/remove against string keys and string values. Backends are
//! injected, never global.
//!
//! # Design Principles
//!
//! - Absent key on `get` is `Ok(None)`, not an error
//! - `remove` of an absent key succeeds (idempotent)
//! - `set` is all-or-nothing per key; no partial values are observable
//! - Every failure carries the key and the underlying I/O source

mod backend;
mod errors;
mod local;
mod memory;

pub use backend::{BoxFuture, KvStore};
pub use errors::{KvError, KvResult};
pub use local::LocalStore;
pub use memory::MemoryStore;
