//! Mesosphere integration

use super::IntegrationBinding;
use super::common::non_empty;
use super::consts::{API_SERVER, INTEGRATION_MESOSPHERE};
use crate::error::Result;
use crate::models::{Integration, MesosphereIntegration, Nullable};
use crate::schema::{ConfigBlock, FieldName};

pub struct Mesosphere;

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct MesosphereConfig {
    #[field(name = API_SERVER, required)]
    pub api_server: Option<String>,
}

impl IntegrationBinding for Mesosphere {
    const FIELD: FieldName = INTEGRATION_MESOSPHERE;

    type Config = MesosphereConfig;
    type Backend = MesosphereIntegration;

    fn expand(config: MesosphereConfig) -> Result<MesosphereIntegration> {
        Ok(MesosphereIntegration {
            server: non_empty(config.api_server),
        })
    }

    fn collapse(backend: &MesosphereIntegration) -> MesosphereConfig {
        MesosphereConfig {
            api_server: backend.server.clone(),
        }
    }

    fn slot(integration: &mut Integration) -> &mut Nullable<MesosphereIntegration> {
        &mut integration.mesosphere
    }

    fn slot_ref(integration: &Integration) -> &Nullable<MesosphereIntegration> {
        &integration.mesosphere
    }
}
