//! Schema subsystem for shelfdb
//!
//! A schema is the validity contract for one record type: which fields exist,
//! whether they are required, and what constraints their values must satisfy
//! (numeric ranges, string formats). Schemas are immutable and owned by the
//! caller; the table engine consumes them through `SchemaValidator`.
//!
//! # Validation semantics
//!
//! - Records must be JSON objects
//! - All required fields must be present
//! - Undeclared fields are rejected
//! - Null values are rejected (optional means absent, not null)
//! - No type coercion, no defaults, no normalization
//! - Validation fails on the first violated constraint and names it

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use types::{FieldDef, FieldType, Schema, StringFormat};
pub use validator::SchemaValidator;
