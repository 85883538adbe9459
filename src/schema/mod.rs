//! Schema declarations for integration configuration blocks.

pub mod block;
pub mod decode;
pub mod field_def;

pub use block::{ConfigBlock, ConfigMap};
pub use field_def::{
    FieldDefinition, FieldName, FieldShape, FieldType, SchemaCheckReport, SchemaIssue,
    check_field,
};

// Derive macro for `ConfigBlock`
pub use integration_macros::ConfigBlock;
