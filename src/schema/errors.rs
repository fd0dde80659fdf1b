//! Schema validation error types
//!
//! Every message names the offending field path and the first violated
//! constraint. For batch validation the path is prefixed with the element
//! index, e.g. `[2].age`.

use thiserror::Error;

/// Result type for schema validation
pub type SchemaResult<T> = Result<T, SchemaError>;

/// A record or batch of records violated the schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The value to validate is not a JSON object
    #[error("{path}: expected a record object, found {found}")]
    NotAnObject { path: String, found: &'static str },

    /// The value to validate as a batch is not a JSON array
    #[error("expected an array of records, found {found}")]
    NotAnArray { found: &'static str },

    /// A required field is absent
    #[error("{path}: required field is missing")]
    MissingField { path: String },

    /// A field is present but the schema does not declare it
    #[error("{path}: field is not declared in schema '{schema}'")]
    UnknownField { path: String, schema: String },

    /// A field holds null, which is never valid
    #[error("{path}: null is not allowed")]
    NullValue { path: String },

    /// A field value has the wrong JSON type
    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A field value has the right type but violates a constraint
    #[error("{path}: {message}")]
    Constraint { path: String, message: String },
}

impl SchemaError {
    /// The field path the violation occurred at, if tied to one
    pub fn path(&self) -> Option<&str> {
        match self {
            SchemaError::NotAnObject { path, .. }
            | SchemaError::MissingField { path }
            | SchemaError::UnknownField { path, .. }
            | SchemaError::NullValue { path }
            | SchemaError::TypeMismatch { path, .. }
            | SchemaError::Constraint { path, .. } => Some(path),
            SchemaError::NotAnArray { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_message_names_field_and_constraint() {
        let err = SchemaError::Constraint {
            path: "age".into(),
            message: "value -1 is below minimum 0".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("age"));
        assert!(msg.contains("below minimum 0"));
    }

    #[test]
    fn test_indexed_path_survives_display() {
        let err = SchemaError::TypeMismatch {
            path: "[2].age".into(),
            expected: "int",
            found: "string",
        };
        assert!(err.to_string().starts_with("[2].age"));
        assert_eq!(err.path(), Some("[2].age"));
    }
}
