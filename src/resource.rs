//! The host's view of one resource's configuration.

use serde_json::Value;

use crate::error::{IntegrationError, Result};
use crate::schema::{ConfigMap, FieldName};

/// Configuration values of one resource, keyed by top-level field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    values: ConfigMap,
}

impl ResourceData {
    /// Create empty resource data
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing configuration map
    #[must_use]
    pub fn from_map(values: ConfigMap) -> Self {
        Self { values }
    }

    /// Build resource data from a JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            _ => Err(IntegrationError::validation(
                "resource data must be a JSON object",
            )),
        }
    }

    /// Parse resource data from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Raw value of a field, `None` when the key is absent
    #[must_use]
    pub fn get(&self, name: FieldName) -> Option<&Value> {
        self.values.get(name.as_str())
    }

    /// Value of a field if it is set to something other than its zero value
    ///
    /// `null`, `false`, `0`, `""` and empty lists or maps count as not set.
    #[must_use]
    pub fn get_ok(&self, name: FieldName) -> Option<&Value> {
        self.get(name).filter(|value| !is_zero(value))
    }

    /// Set a field, replacing any previous value
    pub fn set(&mut self, name: FieldName, value: Value) {
        self.values.insert(name.as_str().to_string(), value);
    }

    /// All configured values
    #[must_use]
    pub fn values(&self) -> &ConfigMap {
        &self.values
    }

    /// Consume into the underlying JSON object
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }
}

fn is_zero(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BLOCK: FieldName = FieldName::new("integration_gitlab");

    #[test]
    fn test_get_ok_ignores_zero_values() {
        let data = ResourceData::from_value(json!({
            "integration_gitlab": [],
            "flag": false,
            "count": 0,
            "name": "",
        }))
        .unwrap();
        assert!(data.get(BLOCK).is_some());
        assert!(data.get_ok(BLOCK).is_none());
        assert!(data.get_ok(FieldName::new("flag")).is_none());
        assert!(data.get_ok(FieldName::new("count")).is_none());
        assert!(data.get_ok(FieldName::new("name")).is_none());
        assert!(data.get_ok(FieldName::new("missing")).is_none());
    }

    #[test]
    fn test_set_then_get_ok() {
        let mut data = ResourceData::new();
        data.set(BLOCK, json!([{"runner": [{"is_enabled": true}]}]));
        assert!(data.get_ok(BLOCK).is_some());
    }

    #[test]
    fn test_rejects_non_object() {
        let err = ResourceData::from_json_str("[1, 2]").unwrap_err();
        assert!(err.is_validation());
        assert!(ResourceData::from_json_str("{").is_err());
    }
}
