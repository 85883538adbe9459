//! Structural checks of untyped configuration against field definitions
//!
//! This is the contract a host schema engine enforces before any hook runs:
//! required keys, scalar types, record bounds and unknown keys.

use std::fmt;

use itertools::Itertools;
use serde_json::{Map, Value};

use super::field::{FieldDefinition, FieldShape};
use crate::error::{IntegrationError, Result};

/// A single structural problem found in a configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// Dotted path of the offending key, list indexes included
    pub path: String,
    /// Description of the problem
    pub description: String,
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.description)
    }
}

/// Outcome of checking one configuration value
#[derive(Debug, Default)]
pub struct SchemaCheckReport {
    /// Problems found, in traversal order
    pub issues: Vec<SchemaIssue>,
}

impl SchemaCheckReport {
    /// Whether no problem was found
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Turn the report into a validation error listing every issue
    pub fn into_result(self) -> Result<()> {
        if self.issues.is_empty() {
            return Ok(());
        }
        Err(IntegrationError::validation(self.issues.iter().join("; ")))
    }

    fn push(&mut self, path: &str, description: impl Into<String>) {
        self.issues.push(SchemaIssue {
            path: path.to_string(),
            description: description.into(),
        });
    }
}

/// Check a value against a field definition
///
/// `value` is `None` when the key is absent from its enclosing map.
#[must_use]
pub fn check_field(def: &FieldDefinition, value: Option<&Value>) -> SchemaCheckReport {
    let mut report = SchemaCheckReport::default();
    check_value(def, value, def.name.as_str(), &mut report);
    report
}

fn check_value(def: &FieldDefinition, value: Option<&Value>, path: &str, report: &mut SchemaCheckReport) {
    let value = match value {
        None | Some(Value::Null) => {
            if def.required {
                report.push(path, "required field is not set");
            }
            return;
        }
        Some(value) => value,
    };

    let fields = match &def.shape {
        FieldShape::Scalar(field_type) => {
            if !field_type.matches(value) {
                report.push(path, format!("expected {field_type}, found {}", value_kind(value)));
            }
            return;
        }
        FieldShape::Object(fields) | FieldShape::List { fields, .. } => fields,
    };

    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) if matches!(def.shape, FieldShape::Object(_)) => vec![value],
        other => {
            report.push(path, format!("expected a list of maps, found {}", value_kind(other)));
            return;
        }
    };

    if items.is_empty() && def.required {
        report.push(path, "required field is not set");
    }
    if let Some(max) = def.max_items {
        if items.len() > max {
            report.push(
                path,
                format!("at most {max} item(s) allowed, found {}", items.len()),
            );
        }
    }

    let empty = Map::new();
    for (index, item) in items.into_iter().enumerate() {
        let map = match item {
            Value::Object(map) => map,
            Value::Null => &empty,
            other => {
                report.push(
                    &format!("{path}.{index}"),
                    format!("expected a map, found {}", value_kind(other)),
                );
                continue;
            }
        };
        check_map(fields, map, &format!("{path}.{index}"), report);
    }
}

fn check_map(
    fields: &[FieldDefinition],
    map: &Map<String, Value>,
    path: &str,
    report: &mut SchemaCheckReport,
) {
    for child in fields {
        check_value(child, map.get(child.name.as_str()), &format!("{path}.{}", child.name), report);
    }
    for key in map.keys() {
        if !fields.iter().any(|child| child.matches_name(key)) {
            report.push(&format!("{path}.{key}"), "unsupported argument");
        }
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}
