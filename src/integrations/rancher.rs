//! Rancher integration

use super::IntegrationBinding;
use super::common::non_empty;
use super::consts::{ACCESS_KEY, INTEGRATION_RANCHER, MASTER_HOST, SECRET_KEY};
use crate::error::Result;
use crate::models::{Integration, Nullable, RancherIntegration};
use crate::schema::{ConfigBlock, FieldName};

pub struct Rancher;

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct RancherConfig {
    #[field(name = MASTER_HOST, required)]
    pub master_host: Option<String>,
    #[field(name = ACCESS_KEY, required)]
    pub access_key: Option<String>,
    #[field(name = SECRET_KEY, required)]
    pub secret_key: Option<String>,
}

impl IntegrationBinding for Rancher {
    const FIELD: FieldName = INTEGRATION_RANCHER;

    type Config = RancherConfig;
    type Backend = RancherIntegration;

    fn expand(config: RancherConfig) -> Result<RancherIntegration> {
        Ok(RancherIntegration {
            master_host: non_empty(config.master_host),
            access_key: non_empty(config.access_key),
            secret_key: non_empty(config.secret_key),
        })
    }

    fn collapse(backend: &RancherIntegration) -> RancherConfig {
        RancherConfig {
            master_host: backend.master_host.clone(),
            access_key: backend.access_key.clone(),
            secret_key: backend.secret_key.clone(),
        }
    }

    fn slot(integration: &mut Integration) -> &mut Nullable<RancherIntegration> {
        &mut integration.rancher
    }

    fn slot_ref(integration: &Integration) -> &Nullable<RancherIntegration> {
        &integration.rancher
    }
}
