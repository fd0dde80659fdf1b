//! shelfdb - a schema-validated table store over a pluggable key-value backend
//!
//! Tables are named collections of same-schema JSON records, persisted as one
//! serialized array per table under a single storage key. Every operation is a
//! deferred computation that yields a typed success-or-failure value.

pub mod cli;
pub mod kv;
pub mod observability;
pub mod schema;
pub mod table;
