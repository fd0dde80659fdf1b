//! Observability for shelfdb
//!
//! Structured JSON logging: one line per event, explicit severity,
//! deterministic field ordering, synchronous writes. The table engine stays
//! pure; logging happens at the call sites that drive it.

mod logger;

pub use logger::{Logger, Severity};
