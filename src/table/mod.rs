//! Table storage engine for shelfdb
//!
//! A table is a named collection of same-schema records, persisted as one
//! JSON array under a single storage key. The engine is constructed once per
//! schema and exposes six operations: read_all, read_where, write, write_all,
//! update, delete_all.
//!
//! # Deferred execution
//!
//! Every operation is an `async fn`: constructing the returned future does no
//! I/O and nothing runs until the caller awaits it. Composed operations
//! (read_where, update) run their sub-steps strictly in sequence and
//! short-circuit on the first failure.
//!
//! # Invariants
//!
//! - The engine never persists a record or array that failed validation
//! - An absent storage entry is an empty table, not an error
//! - write/write_all append in insertion order; update replaces; delete_all
//!   removes the entry
//!
//! # Consistency
//!
//! No concurrent-writer coordination: two interleaved read-modify-write
//! sequences against the same table can lose updates. `update` is a
//! two-phase delete-then-write; a failure between the phases leaves the
//! table observably empty (see `TableStore::update`).

mod errors;
mod store;

pub use errors::{TableError, TableResult};
pub use store::TableStore;
