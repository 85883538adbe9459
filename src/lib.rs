//! Field bindings between Elastigroup integration configuration blocks and the
//! Elastigroup API data model, with schema validation and a write-once field
//! registry.

extern crate self as elastigroup_integrations;

pub mod config;
pub mod error;
pub mod integrations;
pub mod models;
pub mod registry;
pub mod resource;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::IntegrationsConfig;
pub use error::{IntegrationError, Result};
pub use resource::ResourceData;

// Registry
pub use registry::{FieldRegistry, FieldRegistryBuilder, GenericField, Namespace};

// Schema
pub use schema::{ConfigBlock, FieldDefinition, FieldName, SchemaCheckReport, SchemaIssue};

// Backend object graph
pub use models::{Group, GroupWrapper, Integration, Nullable};

// Integrations
pub use integrations::{IntegrationBinding, setup_fields};
