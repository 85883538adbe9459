//! Field descriptors with lifecycle hooks
//!
//! A generic field couples a top-level schema descriptor with the hooks the
//! host invokes for it: pre-validate, read, create and update.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::models::GroupWrapper;
use crate::resource::ResourceData;
use crate::schema::{FieldDefinition, FieldName};

/// Hook run before any write, on configuration alone
pub trait ValidateHook: Fn(&ResourceData) -> Result<()> + Send + Sync + 'static {}

impl<F> ValidateHook for F where F: Fn(&ResourceData) -> Result<()> + Send + Sync + 'static {}

/// Hook copying backend state into configuration
pub trait ReadHook: Fn(&GroupWrapper, &mut ResourceData) -> Result<()> + Send + Sync + 'static {}

impl<F> ReadHook for F where F: Fn(&GroupWrapper, &mut ResourceData) -> Result<()> + Send + Sync + 'static {}

/// Hook copying configuration into the in-flight request
pub trait WriteHook: Fn(&mut GroupWrapper, &ResourceData) -> Result<()> + Send + Sync + 'static {}

impl<F> WriteHook for F where F: Fn(&mut GroupWrapper, &ResourceData) -> Result<()> + Send + Sync + 'static {}

/// Namespace a field is registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Third-party integrations of an Elastigroup
    ElastigroupIntegrations,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::ElastigroupIntegrations => write!(f, "elastigroup_integrations"),
        }
    }
}

/// The lifecycle event a hook belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    Validate,
    Read,
    Create,
    Update,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookKind::Validate => write!(f, "validate"),
            HookKind::Read => write!(f, "read"),
            HookKind::Create => write!(f, "create"),
            HookKind::Update => write!(f, "update"),
        }
    }
}

/// A registered top-level field and its hooks
///
/// Hooks default to no-ops, so a field only wires the events it takes part in.
#[derive(Clone)]
pub struct GenericField {
    namespace: Namespace,
    schema: FieldDefinition,
    on_validate: Arc<dyn ValidateHook>,
    on_read: Arc<dyn ReadHook>,
    on_create: Arc<dyn WriteHook>,
    on_update: Arc<dyn WriteHook>,
}

impl GenericField {
    /// Create a field from its top-level schema descriptor
    #[must_use]
    pub fn new(namespace: Namespace, schema: FieldDefinition) -> Self {
        Self {
            namespace,
            schema,
            on_validate: Arc::new(skip_validate),
            on_read: Arc::new(skip_read),
            on_create: Arc::new(skip_write),
            on_update: Arc::new(skip_write),
        }
    }

    #[must_use]
    pub fn on_validate<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ResourceData) -> Result<()> + Send + Sync + 'static,
    {
        self.on_validate = Arc::new(hook);
        self
    }

    #[must_use]
    pub fn on_read<F>(mut self, hook: F) -> Self
    where
        F: Fn(&GroupWrapper, &mut ResourceData) -> Result<()> + Send + Sync + 'static,
    {
        self.on_read = Arc::new(hook);
        self
    }

    #[must_use]
    pub fn on_create<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut GroupWrapper, &ResourceData) -> Result<()> + Send + Sync + 'static,
    {
        self.on_create = Arc::new(hook);
        self
    }

    #[must_use]
    pub fn on_update<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut GroupWrapper, &ResourceData) -> Result<()> + Send + Sync + 'static,
    {
        self.on_update = Arc::new(hook);
        self
    }

    /// Name of the field
    #[must_use]
    pub fn name(&self) -> FieldName {
        self.schema.name
    }

    /// Namespace of the field
    #[must_use]
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Top-level schema descriptor
    #[must_use]
    pub fn schema(&self) -> &FieldDefinition {
        &self.schema
    }

    /// Run the pre-validate hook
    pub fn validate(&self, data: &ResourceData) -> Result<()> {
        (self.on_validate)(data)
    }

    /// Run the read hook
    pub fn read(&self, wrapper: &GroupWrapper, data: &mut ResourceData) -> Result<()> {
        (self.on_read)(wrapper, data)
    }

    /// Run the create hook
    pub fn create(&self, wrapper: &mut GroupWrapper, data: &ResourceData) -> Result<()> {
        (self.on_create)(wrapper, data)
    }

    /// Run the update hook
    pub fn update(&self, wrapper: &mut GroupWrapper, data: &ResourceData) -> Result<()> {
        (self.on_update)(wrapper, data)
    }
}

fn skip_validate(_: &ResourceData) -> Result<()> {
    Ok(())
}

fn skip_read(_: &GroupWrapper, _: &mut ResourceData) -> Result<()> {
    Ok(())
}

fn skip_write(_: &mut GroupWrapper, _: &ResourceData) -> Result<()> {
    Ok(())
}

impl fmt::Debug for GenericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericField")
            .field("namespace", &self.namespace)
            .field("name", &self.schema.name)
            .finish_non_exhaustive()
    }
}
