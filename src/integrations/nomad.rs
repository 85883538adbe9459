//! Nomad integration
//!
//! Constraint keys travel to the backend wrapped as `${key}`. Collapse strips
//! the wrapping again so configuration shows the bare key.

use super::IntegrationBinding;
use super::common::{DownConfig, HeadroomConfig, KeyValueConfig, non_empty, positive};
use super::consts::{
    ACL_TOKEN, AUTOSCALE_CONSTRAINTS, AUTOSCALE_COOLDOWN, AUTOSCALE_DOWN, AUTOSCALE_HEADROOM,
    AUTOSCALE_IS_ENABLED, INTEGRATION_NOMAD, MASTER_HOST, MASTER_PORT,
};
use crate::error::Result;
use crate::models::{AutoScaleKeyValue, Integration, NomadAutoScaler, NomadIntegration, Nullable};
use crate::schema::{ConfigBlock, FieldName};

pub struct Nomad;

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct NomadConfig {
    #[field(name = MASTER_HOST, required)]
    pub master_host: Option<String>,
    #[field(name = MASTER_PORT, required)]
    pub master_port: Option<i64>,
    #[field(name = ACL_TOKEN)]
    pub acl_token: Option<String>,
    #[field(name = AUTOSCALE_IS_ENABLED)]
    pub autoscale_is_enabled: Option<bool>,
    #[field(name = AUTOSCALE_COOLDOWN)]
    pub autoscale_cooldown: Option<i64>,
    #[field(name = AUTOSCALE_HEADROOM, max_items = 1)]
    pub autoscale_headroom: Option<HeadroomConfig>,
    #[field(name = AUTOSCALE_DOWN, max_items = 1)]
    pub autoscale_down: Option<DownConfig>,
    #[field(name = AUTOSCALE_CONSTRAINTS, set)]
    pub autoscale_constraints: Vec<KeyValueConfig>,
}

/// Wrap a constraint key the way the backend expects it
#[must_use]
pub fn wrap_constraint_key(key: &str) -> String {
    format!("${{{key}}}")
}

/// Strip the backend wrapping from a constraint key
#[must_use]
pub fn unwrap_constraint_key(key: &str) -> &str {
    key.strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(key)
}

impl IntegrationBinding for Nomad {
    const FIELD: FieldName = INTEGRATION_NOMAD;

    type Config = NomadConfig;
    type Backend = NomadIntegration;

    fn expand(config: NomadConfig) -> Result<NomadIntegration> {
        let auto_scale = NomadAutoScaler {
            is_enabled: config.autoscale_is_enabled,
            cooldown: positive(config.autoscale_cooldown),
            headroom: config.autoscale_headroom.map(HeadroomConfig::expand),
            down: config.autoscale_down.map(DownConfig::expand),
            constraints: config
                .autoscale_constraints
                .into_iter()
                .map(|constraint| {
                    let pair = constraint.expand();
                    AutoScaleKeyValue {
                        key: pair.key.as_deref().map(wrap_constraint_key),
                        value: pair.value,
                    }
                })
                .collect(),
        };

        Ok(NomadIntegration {
            master_host: non_empty(config.master_host),
            master_port: positive(config.master_port),
            acl_token: non_empty(config.acl_token),
            auto_scale: (auto_scale != NomadAutoScaler::default()).then_some(auto_scale),
        })
    }

    fn collapse(backend: &NomadIntegration) -> NomadConfig {
        let mut config = NomadConfig {
            master_host: backend.master_host.clone(),
            master_port: backend.master_port,
            acl_token: backend.acl_token.clone(),
            ..NomadConfig::default()
        };
        if let Some(auto_scale) = &backend.auto_scale {
            config.autoscale_is_enabled = auto_scale.is_enabled;
            config.autoscale_cooldown = auto_scale.cooldown;
            config.autoscale_headroom = auto_scale.headroom.as_ref().map(HeadroomConfig::collapse);
            config.autoscale_down = auto_scale.down.as_ref().map(DownConfig::collapse);
            config.autoscale_constraints = auto_scale
                .constraints
                .iter()
                .map(|constraint| KeyValueConfig {
                    key: constraint
                        .key
                        .as_deref()
                        .map(|key| unwrap_constraint_key(key).to_string()),
                    value: constraint.value.clone(),
                })
                .collect();
        }
        config
    }

    fn slot(integration: &mut Integration) -> &mut Nullable<NomadIntegration> {
        &mut integration.nomad
    }

    fn slot_ref(integration: &Integration) -> &Nullable<NomadIntegration> {
        &integration.nomad
    }
}
