//! Typed configuration blocks
//!
//! A configuration block is the typed intermediate form of one nested level of
//! configuration. Blocks are normally declared with `#[derive(ConfigBlock)]`,
//! which generates the schema, the boundary decoder and the inverse encoder
//! from the struct's fields.

use serde_json::{Map, Value};

use super::field_def::FieldDefinition;
use crate::error::Result;

/// Untyped map of configuration keys to values
pub type ConfigMap = Map<String, Value>;

/// The typed intermediate form of one nested level of configuration
pub trait ConfigBlock: Sized {
    /// Schema descriptors for the keys of this block, in declaration order
    fn fields() -> Vec<FieldDefinition>;

    /// Decode the block from an untyped map
    ///
    /// Optional scalars of the wrong type decode as absent. Nested blocks that
    /// are neither a list nor a map fail with a validation error.
    fn from_map(map: &ConfigMap) -> Result<Self>;

    /// Encode the block back into an untyped map, skipping absent values
    fn to_map(&self) -> ConfigMap;
}
