//! Module for integration field definitions
//!
//! This module provides the schema descriptors used to declare configuration
//! keys and the structural check a host applies against them.

mod check;
pub mod field;

pub(crate) use check::value_kind;
pub use check::{SchemaCheckReport, SchemaIssue, check_field};
pub use field::{FieldDefinition, FieldName, FieldShape, FieldType};
