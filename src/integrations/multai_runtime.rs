//! Multai-Runtime integration

use super::IntegrationBinding;
use super::common::non_empty;
use super::consts::{DEPLOYMENT_ID, INTEGRATION_MULTAI_RUNTIME};
use crate::error::Result;
use crate::models::{Integration, MultaiIntegration, Nullable};
use crate::schema::{ConfigBlock, FieldName};

pub struct MultaiRuntime;

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct MultaiRuntimeConfig {
    #[field(name = DEPLOYMENT_ID, required)]
    pub deployment_id: Option<String>,
}

impl IntegrationBinding for MultaiRuntime {
    const FIELD: FieldName = INTEGRATION_MULTAI_RUNTIME;

    type Config = MultaiRuntimeConfig;
    type Backend = MultaiIntegration;

    fn expand(config: MultaiRuntimeConfig) -> Result<MultaiIntegration> {
        Ok(MultaiIntegration {
            deployment_id: non_empty(config.deployment_id),
        })
    }

    fn collapse(backend: &MultaiIntegration) -> MultaiRuntimeConfig {
        MultaiRuntimeConfig {
            deployment_id: backend.deployment_id.clone(),
        }
    }

    fn slot(integration: &mut Integration) -> &mut Nullable<MultaiIntegration> {
        &mut integration.multai_runtime
    }

    fn slot_ref(integration: &Integration) -> &Nullable<MultaiIntegration> {
        &integration.multai_runtime
    }
}
