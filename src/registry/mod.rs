//! Field registry for integration configuration blocks
//!
//! The registry is built once, in registration order, and then sealed. A
//! process-wide instance is available through [`global`]; a custom one can be
//! put in its place with [`install`] before first use.

mod fields_map;
mod generic_field;

use std::sync::OnceLock;

pub use fields_map::{FieldRegistry, FieldRegistryBuilder};
pub use generic_field::{GenericField, HookKind, Namespace, ReadHook, ValidateHook, WriteHook};

use crate::config::IntegrationsConfig;
use crate::error::{IntegrationError, Result};

static GLOBAL: OnceLock<FieldRegistry> = OnceLock::new();

/// Install a custom registry as the process-wide instance
///
/// Fails once a registry is in place, whether installed or built by [`global`].
pub fn install(registry: FieldRegistry) -> Result<&'static FieldRegistry> {
    GLOBAL
        .set(registry)
        .map_err(|_| IntegrationError::RegistryInitialized)?;
    GLOBAL.get().ok_or(IntegrationError::RegistryInitialized)
}

/// The process-wide registry, built with default settings on first use
pub fn global() -> Result<&'static FieldRegistry> {
    if let Some(registry) = GLOBAL.get() {
        return Ok(registry);
    }
    let registry = crate::integrations::setup_fields(&IntegrationsConfig::default())?;
    Ok(GLOBAL.get_or_init(|| registry))
}
