//! Schema validator for record validation
//!
//! The validator owns its schema and is constructed once per table
//! instantiation. It never mutates records and is deterministic: fields are
//! checked in name order, batch elements in array order, and the first
//! violation is reported.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldType, Schema, StringFormat};

/// Absolute http(s) URLs only; no whitespace, a non-empty host part
const URL_PATTERN: &str = r"^https?://[^\s/$.?#][^\s]*$";

fn url_regex() -> &'static Regex {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    URL_RE.get_or_init(|| Regex::new(URL_PATTERN).expect("URL_PATTERN is a valid regex"))
}

/// Validates records against a fixed schema
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    schema: Schema,
}

impl SchemaValidator {
    /// Create a validator for the given schema
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// The schema this validator enforces
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validates a single record.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: non-object value, undeclared
    /// field, missing required field, null, type mismatch, or a range/format
    /// violation.
    pub fn validate_record(&self, record: &Value) -> SchemaResult<()> {
        self.validate_at(record, "")
    }

    /// Validates a JSON value as an array of records.
    ///
    /// Fails on the first violation; the error path carries the element
    /// index. On success returns the elements in array order.
    pub fn validate_records(&self, value: &Value) -> SchemaResult<Vec<Value>> {
        let elements = value.as_array().ok_or_else(|| SchemaError::NotAnArray {
            found: json_type_name(value),
        })?;

        for (i, element) in elements.iter().enumerate() {
            self.validate_at(element, &format!("[{}]", i))?;
        }

        Ok(elements.clone())
    }

    fn validate_at(&self, record: &Value, path_prefix: &str) -> SchemaResult<()> {
        let obj = record.as_object().ok_or_else(|| SchemaError::NotAnObject {
            path: root_path(path_prefix),
            found: json_type_name(record),
        })?;

        // Undeclared fields are rejected before anything else
        for key in obj.keys() {
            if !self.schema.fields.contains_key(key) {
                return Err(SchemaError::UnknownField {
                    path: make_path(path_prefix, key),
                    schema: self.schema.name.clone(),
                });
            }
        }

        // Declared fields, in name order
        for (field_name, field_def) in &self.schema.fields {
            let path = make_path(path_prefix, field_name);

            match obj.get(field_name) {
                Some(value) => {
                    if value.is_null() {
                        return Err(SchemaError::NullValue { path });
                    }
                    validate_value(value, &field_def.field_type, &path)?;
                }
                None => {
                    if field_def.required {
                        return Err(SchemaError::MissingField { path });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Validates one value against a field type and its constraints
fn validate_value(value: &Value, expected: &FieldType, path: &str) -> SchemaResult<()> {
    match expected {
        FieldType::String { format } => {
            let s = value
                .as_str()
                .ok_or_else(|| type_error(path, "string", value))?;

            if let Some(StringFormat::Url) = format {
                if !url_regex().is_match(s) {
                    return Err(SchemaError::Constraint {
                        path: path.to_string(),
                        message: format!("'{}' is not a valid URL", s),
                    });
                }
            }
        }
        FieldType::Int { min, max } => {
            let n = value
                .as_i64()
                .ok_or_else(|| type_error(path, "int", value))?;

            if let Some(min) = min {
                if n < *min {
                    return Err(SchemaError::Constraint {
                        path: path.to_string(),
                        message: format!("value {} is below minimum {}", n, min),
                    });
                }
            }
            if let Some(max) = max {
                if n > *max {
                    return Err(SchemaError::Constraint {
                        path: path.to_string(),
                        message: format!("value {} is above maximum {}", n, max),
                    });
                }
            }
        }
        FieldType::Float { min, max } => {
            // Integers are acceptable where floats are declared
            let n = value
                .as_f64()
                .ok_or_else(|| type_error(path, "float", value))?;

            if let Some(min) = min {
                if n < *min {
                    return Err(SchemaError::Constraint {
                        path: path.to_string(),
                        message: format!("value {} is below minimum {}", n, min),
                    });
                }
            }
            if let Some(max) = max {
                if n > *max {
                    return Err(SchemaError::Constraint {
                        path: path.to_string(),
                        message: format!("value {} is above maximum {}", n, max),
                    });
                }
            }
        }
        FieldType::Bool => {
            if !value.is_boolean() {
                return Err(type_error(path, "bool", value));
            }
        }
    }

    Ok(())
}

/// Returns the JSON type name for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn root_path(prefix: &str) -> String {
    if prefix.is_empty() {
        "$root".to_string()
    } else {
        prefix.to_string()
    }
}

fn type_error(path: &str, expected: &'static str, actual: &Value) -> SchemaError {
    SchemaError::TypeMismatch {
        path: path.to_string(),
        expected,
        found: json_type_name(actual),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::types::FieldDef;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn user_validator() -> SchemaValidator {
        let mut fields = BTreeMap::new();
        fields.insert("age".into(), FieldDef::required_int_range(0, 120));
        fields.insert("link".into(), FieldDef::optional_url());
        SchemaValidator::new(Schema::new("user", fields))
    }

    #[test]
    fn test_valid_record_passes() {
        let validator = user_validator();
        let record = json!({ "age": 25, "link": "https://example.com" });
        assert!(validator.validate_record(&record).is_ok());
    }

    #[test]
    fn test_optional_field_may_be_absent() {
        let validator = user_validator();
        assert!(validator.validate_record(&json!({ "age": 40 })).is_ok());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let validator = user_validator();
        let err = validator
            .validate_record(&json!({ "link": "https://example.com" }))
            .unwrap_err();
        assert_eq!(err, SchemaError::MissingField { path: "age".into() });
    }

    #[test]
    fn test_age_below_minimum_fails_with_constraint() {
        let validator = user_validator();
        let err = validator.validate_record(&json!({ "age": -1 })).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("age"));
        assert!(msg.contains("below minimum 0"));
    }

    #[test]
    fn test_age_above_maximum_fails() {
        let validator = user_validator();
        let err = validator.validate_record(&json!({ "age": 130 })).unwrap_err();
        assert!(err.to_string().contains("above maximum 120"));
    }

    #[test]
    fn test_invalid_url_fails() {
        let validator = user_validator();
        let err = validator
            .validate_record(&json!({ "age": 25, "link": "not a url" }))
            .unwrap_err();
        assert!(err.to_string().contains("not a valid URL"));
    }

    #[test]
    fn test_type_mismatch_fails() {
        let validator = user_validator();
        let err = validator
            .validate_record(&json!({ "age": "twenty-five" }))
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::TypeMismatch {
                path: "age".into(),
                expected: "int",
                found: "string",
            }
        );
    }

    #[test]
    fn test_null_rejected() {
        let validator = user_validator();
        let err = validator
            .validate_record(&json!({ "age": 25, "link": null }))
            .unwrap_err();
        assert_eq!(err, SchemaError::NullValue { path: "link".into() });
    }

    #[test]
    fn test_undeclared_field_rejected() {
        let validator = user_validator();
        let err = validator
            .validate_record(&json!({ "age": 25, "nickname": "kv" }))
            .unwrap_err();
        assert!(matches!(err, SchemaError::UnknownField { .. }));
        assert!(err.to_string().contains("nickname"));
    }

    #[test]
    fn test_non_object_record_rejected() {
        let validator = user_validator();
        let err = validator.validate_record(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(
            err,
            SchemaError::NotAnObject {
                path: "$root".into(),
                found: "array",
            }
        );
    }

    #[test]
    fn test_batch_reports_first_failing_index() {
        let validator = user_validator();
        let batch = json!([{ "age": 25 }, { "age": -3 }, { "age": 30 }]);
        let err = validator.validate_records(&batch).unwrap_err();
        assert!(err.to_string().starts_with("[1].age"));
    }

    #[test]
    fn test_batch_must_be_array() {
        let validator = user_validator();
        let err = validator.validate_records(&json!({ "age": 25 })).unwrap_err();
        assert_eq!(err, SchemaError::NotAnArray { found: "object" });
    }

    #[test]
    fn test_batch_returns_elements_in_order() {
        let validator = user_validator();
        let batch = json!([{ "age": 1 }, { "age": 2 }]);
        let records = validator.validate_records(&batch).unwrap();
        assert_eq!(records, vec![json!({ "age": 1 }), json!({ "age": 2 })]);
    }
}
