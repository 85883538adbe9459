//! Conversion between untyped configuration values and typed blocks
//!
//! The "list holding at most one map" encoding of optional records only exists
//! in this module. Everything past it works with `Option<T>` and `Vec<T>`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::block::{ConfigBlock, ConfigMap};
use super::field_def::{FieldName, value_kind};
use crate::error::{IntegrationError, Result};

/// Read an optional scalar
///
/// Absent keys, `null` and values of another type all yield `None`.
pub fn scalar<T: DeserializeOwned>(map: &ConfigMap, name: FieldName) -> Option<T> {
    let value = map.get(name.as_str())?;
    if value.is_null() {
        return None;
    }
    match T::deserialize(value) {
        Ok(v) => Some(v),
        Err(err) => {
            log::debug!("Ignoring {name}: {err}");
            None
        }
    }
}

/// Read an optional nested record
pub fn object<T: ConfigBlock>(map: &ConfigMap, name: FieldName) -> Result<Option<T>> {
    match map.get(name.as_str()) {
        None => Ok(None),
        Some(value) => block(value, name),
    }
}

/// Decode a value holding at most one record
///
/// An empty list or `null` is "no record". Only the first element of a list is
/// read. A bare map is accepted in place of a singleton list.
pub fn block<T: ConfigBlock>(value: &Value, name: FieldName) -> Result<Option<T>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => match items.first() {
            None => Ok(None),
            Some(item) => record(item, name).map(Some),
        },
        Value::Object(map) => T::from_map(map).map(Some),
        other => Err(shape_error(name, "a list of maps", other)),
    }
}

/// Read repeated nested records, skipping `null` elements
pub fn objects<T: ConfigBlock>(map: &ConfigMap, name: FieldName) -> Result<Vec<T>> {
    match map.get(name.as_str()) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(|item| record(item, name))
            .collect(),
        Some(Value::Object(map)) => Ok(vec![T::from_map(map)?]),
        Some(other) => Err(shape_error(name, "a list of maps", other)),
    }
}

fn record<T: ConfigBlock>(item: &Value, name: FieldName) -> Result<T> {
    log::trace!("Decoding {name} record");
    match item {
        Value::Object(map) => T::from_map(map),
        Value::Null => T::from_map(&ConfigMap::new()),
        other => Err(shape_error(name, "a map", other)),
    }
}

fn shape_error(name: FieldName, expected: &str, found: &Value) -> IntegrationError {
    IntegrationError::validation(format!(
        "invalid {} attributes: expected {expected}, found {}",
        name.as_str().replace('_', " "),
        value_kind(found)
    ))
}

/// Encode a scalar
pub fn encode_scalar<T: Clone + Into<Value>>(value: &T) -> Value {
    value.clone().into()
}

/// Encode one record as a singleton list
pub fn encode_block<T: ConfigBlock>(block: &T) -> Value {
    Value::Array(vec![Value::Object(block.to_map())])
}

/// Encode repeated records
pub fn encode_blocks<T: ConfigBlock>(blocks: &[T]) -> Value {
    Value::Array(
        blocks
            .iter()
            .map(|block| Value::Object(block.to_map()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDefinition, FieldType};
    use serde_json::json;

    const NAME: FieldName = FieldName::new("name");
    const RECORD: FieldName = FieldName::new("record_sets");

    #[derive(Debug, PartialEq)]
    struct Named {
        name: Option<String>,
    }

    impl ConfigBlock for Named {
        fn fields() -> Vec<FieldDefinition> {
            vec![FieldDefinition::scalar(NAME, FieldType::String)]
        }

        fn from_map(map: &ConfigMap) -> Result<Self> {
            Ok(Self {
                name: scalar(map, NAME),
            })
        }

        fn to_map(&self) -> ConfigMap {
            let mut map = ConfigMap::new();
            if let Some(name) = &self.name {
                map.insert(NAME.as_str().to_string(), encode_scalar(name));
            }
            map
        }
    }

    fn config(value: Value) -> ConfigMap {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_scalar_wrong_type_is_absent() {
        let map = config(json!({"a": "7", "b": 7, "c": null}));
        assert_eq!(scalar::<i64>(&map, FieldName::new("a")), None);
        assert_eq!(scalar::<i64>(&map, FieldName::new("b")), Some(7));
        assert_eq!(scalar::<i64>(&map, FieldName::new("c")), None);
        assert_eq!(scalar::<i64>(&map, FieldName::new("d")), None);
    }

    #[test]
    fn test_block_encodings() {
        assert_eq!(block::<Named>(&json!([]), RECORD).unwrap(), None);
        assert_eq!(block::<Named>(&Value::Null, RECORD).unwrap(), None);
        assert_eq!(
            block::<Named>(&json!([null]), RECORD).unwrap(),
            Some(Named { name: None })
        );
        assert_eq!(
            block::<Named>(&json!({"name": "www"}), RECORD).unwrap(),
            Some(Named { name: Some("www".into()) })
        );
        assert_eq!(
            block::<Named>(&json!([{"name": "a"}, {"name": "b"}]), RECORD).unwrap(),
            Some(Named { name: Some("a".into()) })
        );
    }

    #[test]
    fn test_block_shape_error() {
        let err = block::<Named>(&json!("www"), RECORD).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid record sets attributes: expected a list of maps, found string"
        );
        let err = block::<Named>(&json!([3]), RECORD).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid record sets attributes: expected a map, found number"
        );
    }

    #[test]
    fn test_objects_skip_nulls() {
        let map = config(json!({"record_sets": [{"name": "a"}, null, {"name": "b"}]}));
        let records: Vec<Named> = objects(&map, RECORD).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name.as_deref(), Some("b"));
        assert!(objects::<Named>(&ConfigMap::new(), RECORD).unwrap().is_empty());
    }

    #[test]
    fn test_encode_blocks() {
        let records = vec![Named { name: Some("a".into()) }, Named { name: None }];
        assert_eq!(encode_blocks(&records), json!([{"name": "a"}, {}]));
        assert_eq!(encode_block(&records[0]), json!([{"name": "a"}]));
    }
}
