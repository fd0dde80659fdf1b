//! Schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string, optionally format-constrained (url)
//! - int: 64-bit signed integer, optionally range-constrained
//! - float: 64-bit floating point, optionally range-constrained
//! - bool: Boolean
//!
//! Fields are flat: records are objects of scalar values. Fields iterate in
//! name order (BTreeMap), so the first violated constraint is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Format constraints for string fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringFormat {
    /// Value must be an absolute http(s) URL
    Url,
}

/// Supported field types with their value constraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string, optionally constrained to a format
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<StringFormat>,
    },
    /// 64-bit signed integer with optional inclusive bounds
    Int {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    /// 64-bit float with optional inclusive bounds
    Float {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    /// Boolean
    Bool,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String { .. } => "string",
            FieldType::Int { .. } => "int",
            FieldType::Float { .. } => "float",
            FieldType::Bool => "bool",
        }
    }
}

/// A field declaration: its type plus whether it must be present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field data type and constraints
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Whether the field must be present
    pub required: bool,
}

impl FieldDef {
    /// Create a required string field
    pub fn required_string() -> Self {
        Self {
            field_type: FieldType::String { format: None },
            required: true,
        }
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self {
            field_type: FieldType::String { format: None },
            required: false,
        }
    }

    /// Create a required URL-formatted string field
    pub fn required_url() -> Self {
        Self {
            field_type: FieldType::String {
                format: Some(StringFormat::Url),
            },
            required: true,
        }
    }

    /// Create an optional URL-formatted string field
    pub fn optional_url() -> Self {
        Self {
            field_type: FieldType::String {
                format: Some(StringFormat::Url),
            },
            required: false,
        }
    }

    /// Create a required int field without bounds
    pub fn required_int() -> Self {
        Self {
            field_type: FieldType::Int {
                min: None,
                max: None,
            },
            required: true,
        }
    }

    /// Create an optional int field without bounds
    pub fn optional_int() -> Self {
        Self {
            field_type: FieldType::Int {
                min: None,
                max: None,
            },
            required: false,
        }
    }

    /// Create a required int field with inclusive bounds
    pub fn required_int_range(min: i64, max: i64) -> Self {
        Self {
            field_type: FieldType::Int {
                min: Some(min),
                max: Some(max),
            },
            required: true,
        }
    }

    /// Create a required float field with inclusive bounds
    pub fn required_float_range(min: f64, max: f64) -> Self {
        Self {
            field_type: FieldType::Float {
                min: Some(min),
                max: Some(max),
            },
            required: true,
        }
    }

    /// Create a required bool field
    pub fn required_bool() -> Self {
        Self {
            field_type: FieldType::Bool,
            required: true,
        }
    }
}

/// The validity contract for one record type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema name, used in error messages
    pub name: String,
    /// Field declarations by field name
    pub fields: BTreeMap<String, FieldDef>,
}

impl Schema {
    /// Create a new schema
    pub fn new(name: impl Into<String>, fields: BTreeMap<String, FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}
