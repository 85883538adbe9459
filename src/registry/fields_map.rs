//! Ordered field registry
//!
//! Fields are registered once at startup through a builder. Sealing the builder
//! produces a `FieldRegistry`, which has no way to insert further fields.

use std::time::Instant;

use rustc_hash::FxHashMap;

use super::generic_field::{GenericField, HookKind, Namespace};
use crate::config::IntegrationsConfig;
use crate::error::{IntegrationError, Result};
use crate::models::GroupWrapper;
use crate::resource::ResourceData;
use crate::schema::FieldName;
use crate::utils::logging::{log_hook_complete, log_hook_failed, log_hook_start};

/// Collects field registrations in order before sealing
#[derive(Debug)]
pub struct FieldRegistryBuilder {
    namespace: Namespace,
    config: IntegrationsConfig,
    fields: Vec<GenericField>,
    index: FxHashMap<FieldName, usize>,
}

impl FieldRegistryBuilder {
    /// Start an empty registry for a namespace
    #[must_use]
    pub fn new(namespace: Namespace, config: IntegrationsConfig) -> Self {
        Self {
            namespace,
            config,
            fields: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Settings the registry is built with
    #[must_use]
    pub fn config(&self) -> &IntegrationsConfig {
        &self.config
    }

    /// Register a field
    ///
    /// Fails when the name is already taken or the field belongs to another namespace.
    pub fn register(&mut self, field: GenericField) -> Result<()> {
        let name = field.name();
        if field.namespace() != self.namespace {
            return Err(IntegrationError::NamespaceMismatch {
                name,
                found: field.namespace().to_string(),
                expected: self.namespace.to_string(),
            });
        }
        if self.index.contains_key(&name) {
            return Err(IntegrationError::DuplicateField(name));
        }

        log::debug!("Registering field {}/{name}", self.namespace);
        self.index.insert(name, self.fields.len());
        self.fields.push(field);
        Ok(())
    }

    /// Number of registered fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Freeze the registrations
    #[must_use]
    pub fn seal(self) -> FieldRegistry {
        log::info!(
            "Sealed {} registry with {} field(s)",
            self.namespace,
            self.fields.len()
        );
        FieldRegistry {
            namespace: self.namespace,
            config: self.config,
            fields: self.fields,
            index: self.index,
        }
    }
}

/// Immutable table of registered fields
#[derive(Debug)]
pub struct FieldRegistry {
    namespace: Namespace,
    config: IntegrationsConfig,
    fields: Vec<GenericField>,
    index: FxHashMap<FieldName, usize>,
}

impl FieldRegistry {
    /// Look up a field by name
    pub fn lookup(&self, name: impl AsRef<str>) -> Result<&GenericField> {
        let name = name.as_ref();
        self.index
            .get(name)
            .map(|&position| &self.fields[position])
            .ok_or_else(|| IntegrationError::FieldNotFound {
                namespace: self.namespace.to_string(),
                name: name.to_string(),
            })
    }

    /// Registered fields in registration order
    pub fn fields(&self) -> impl Iterator<Item = &GenericField> {
        self.fields.iter()
    }

    /// Registered names in registration order
    #[must_use]
    pub fn names(&self) -> Vec<FieldName> {
        self.fields.iter().map(GenericField::name).collect()
    }

    #[must_use]
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    #[must_use]
    pub fn config(&self) -> &IntegrationsConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Run every pre-validate hook, stopping at the first failure
    pub fn validate_all(&self, data: &ResourceData) -> Result<()> {
        for field in &self.fields {
            self.run_hook(HookKind::Validate, field, || field.validate(data))?;
        }
        Ok(())
    }

    /// Run every create hook against a fresh request
    pub fn create_all(&self, wrapper: &mut GroupWrapper, data: &ResourceData) -> Result<()> {
        for field in &self.fields {
            self.run_hook(HookKind::Create, field, || field.create(wrapper, data))?;
        }
        Ok(())
    }

    /// Run every update hook
    pub fn update_all(&self, wrapper: &mut GroupWrapper, data: &ResourceData) -> Result<()> {
        for field in &self.fields {
            self.run_hook(HookKind::Update, field, || field.update(wrapper, data))?;
        }
        Ok(())
    }

    /// Run every read hook
    pub fn read_all(&self, wrapper: &GroupWrapper, data: &mut ResourceData) -> Result<()> {
        for field in &self.fields {
            self.run_hook(HookKind::Read, field, || field.read(wrapper, data))?;
        }
        Ok(())
    }

    fn run_hook<F>(&self, hook: HookKind, field: &GenericField, run: F) -> Result<()>
    where
        F: FnOnce() -> Result<()>,
    {
        if !self.config.log_hooks {
            return run();
        }

        log_hook_start(hook, field.name());
        let start = Instant::now();
        let result = run();
        match &result {
            Ok(()) => log_hook_complete(hook, field.name(), start.elapsed()),
            Err(err) => log_hook_failed(hook, field.name(), err),
        }
        result
    }
}
