//! Field definition for the integration schema system
//!
//! This module defines the schema descriptors that declare the shape of every
//! configuration key, independent of the integration that owns it.

use std::borrow::Borrow;
use std::fmt;

use serde_json::Value;

/// Symbolic name of a configuration key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName(&'static str);

impl FieldName {
    /// Create a field name from a static string
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The key as it appears in configuration
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl From<&'static str> for FieldName {
    fn from(name: &'static str) -> Self {
        Self(name)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Represents the scalar type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Text value
    String,
    /// Integer value
    Integer,
    /// Decimal value
    Float,
    /// Boolean value
    Boolean,
}

impl FieldType {
    /// Check whether an untyped value has this scalar type
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Float => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Integer => write!(f, "integer"),
            FieldType::Float => write!(f, "float"),
            FieldType::Boolean => write!(f, "boolean"),
        }
    }
}

/// Shape of a configuration key
#[derive(Debug, Clone, PartialEq)]
pub enum FieldShape {
    /// A single scalar
    Scalar(FieldType),
    /// An optional nested record, carried as a list holding at most one map
    Object(Vec<FieldDefinition>),
    /// Repeated nested records
    List {
        /// Schema of each record
        fields: Vec<FieldDefinition>,
        /// Whether the records are unordered
        set: bool,
    },
}

/// A schema descriptor for one configuration key
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    /// Key of the field
    pub name: FieldName,
    /// Shape of the value
    pub shape: FieldShape,
    /// Whether the host must reject configuration without this field
    pub required: bool,
    /// Upper bound on the number of records for block shapes
    pub max_items: Option<usize>,
    /// Human readable description
    pub description: Option<&'static str>,
}

impl FieldDefinition {
    fn with_shape(name: FieldName, shape: FieldShape) -> Self {
        Self {
            name,
            shape,
            required: false,
            max_items: None,
            description: None,
        }
    }

    /// Create a scalar field definition
    #[must_use]
    pub fn scalar(name: FieldName, field_type: FieldType) -> Self {
        Self::with_shape(name, FieldShape::Scalar(field_type))
    }

    /// Create a nested single-record field definition
    #[must_use]
    pub fn object(name: FieldName, fields: Vec<FieldDefinition>) -> Self {
        Self::with_shape(name, FieldShape::Object(fields))
    }

    /// Create a repeated-record field definition
    #[must_use]
    pub fn list(name: FieldName, fields: Vec<FieldDefinition>) -> Self {
        Self::with_shape(name, FieldShape::List { fields, set: false })
    }

    /// Mark the field as required or optional
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Bound the number of records
    #[must_use]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Mark a repeated-record field as an unordered set
    #[must_use]
    pub fn as_set(mut self) -> Self {
        if let FieldShape::List { set, .. } = &mut self.shape {
            *set = true;
        }
        self
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Nested field definitions, empty for scalars
    #[must_use]
    pub fn children(&self) -> &[FieldDefinition] {
        match &self.shape {
            FieldShape::Scalar(_) => &[],
            FieldShape::Object(fields) | FieldShape::List { fields, .. } => fields,
        }
    }

    /// Find a nested field definition by key
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&FieldDefinition> {
        self.children().iter().find(|child| child.matches_name(name))
    }

    /// Whether values of this field are lists of maps
    #[must_use]
    pub fn is_block(&self) -> bool {
        !matches!(self.shape, FieldShape::Scalar(_))
    }

    /// Check if the given key names this field
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.as_str() == name
    }
}
