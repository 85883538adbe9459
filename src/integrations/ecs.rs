//! ECS integration
//!
//! The auto-scaler settings sit flat in the block next to the cluster name. The
//! backend auto-scaler node is left out unless it ends up carrying a setting.

use super::IntegrationBinding;
use super::common::{
    DownConfig, HeadroomConfig, KeyValueConfig, collapse_key_values, expand_key_values, non_empty,
    positive,
};
use super::consts::{
    AUTOSCALE_ATTRIBUTES, AUTOSCALE_COOLDOWN, AUTOSCALE_DOWN, AUTOSCALE_HEADROOM,
    AUTOSCALE_IS_AUTO_CONFIG, AUTOSCALE_IS_ENABLED, CLUSTER_NAME, INTEGRATION_ECS,
    SHOULD_SCALE_DOWN_NON_SERVICE_TASKS,
};
use crate::error::Result;
use crate::models::{EcsAutoScaler, EcsIntegration, Integration, Nullable};
use crate::schema::{ConfigBlock, FieldName};

pub struct Ecs;

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct EcsConfig {
    #[field(name = CLUSTER_NAME, required)]
    pub cluster_name: Option<String>,
    #[field(name = AUTOSCALE_IS_ENABLED)]
    pub autoscale_is_enabled: Option<bool>,
    #[field(name = AUTOSCALE_COOLDOWN)]
    pub autoscale_cooldown: Option<i64>,
    #[field(name = AUTOSCALE_IS_AUTO_CONFIG)]
    pub autoscale_is_auto_config: Option<bool>,
    #[field(name = SHOULD_SCALE_DOWN_NON_SERVICE_TASKS)]
    pub autoscale_scale_down_non_service_tasks: Option<bool>,
    #[field(name = AUTOSCALE_HEADROOM, max_items = 1)]
    pub autoscale_headroom: Option<HeadroomConfig>,
    #[field(name = AUTOSCALE_DOWN, max_items = 1)]
    pub autoscale_down: Option<DownConfig>,
    #[field(name = AUTOSCALE_ATTRIBUTES, set)]
    pub autoscale_attributes: Vec<KeyValueConfig>,
}

impl IntegrationBinding for Ecs {
    const FIELD: FieldName = INTEGRATION_ECS;

    type Config = EcsConfig;
    type Backend = EcsIntegration;

    fn expand(config: EcsConfig) -> Result<EcsIntegration> {
        let auto_scale = EcsAutoScaler {
            is_enabled: config.autoscale_is_enabled,
            cooldown: positive(config.autoscale_cooldown),
            is_auto_config: config.autoscale_is_auto_config,
            should_scale_down_non_service_tasks: config.autoscale_scale_down_non_service_tasks,
            headroom: config.autoscale_headroom.map(HeadroomConfig::expand),
            down: config.autoscale_down.map(DownConfig::expand),
            attributes: expand_key_values(config.autoscale_attributes),
        };

        Ok(EcsIntegration {
            cluster_name: non_empty(config.cluster_name),
            auto_scale: (auto_scale != EcsAutoScaler::default()).then_some(auto_scale),
        })
    }

    fn collapse(backend: &EcsIntegration) -> EcsConfig {
        let mut config = EcsConfig {
            cluster_name: backend.cluster_name.clone(),
            ..EcsConfig::default()
        };
        if let Some(auto_scale) = &backend.auto_scale {
            config.autoscale_is_enabled = auto_scale.is_enabled;
            config.autoscale_cooldown = auto_scale.cooldown;
            config.autoscale_is_auto_config = auto_scale.is_auto_config;
            config.autoscale_scale_down_non_service_tasks =
                auto_scale.should_scale_down_non_service_tasks;
            config.autoscale_headroom = auto_scale.headroom.as_ref().map(HeadroomConfig::collapse);
            config.autoscale_down = auto_scale.down.as_ref().map(DownConfig::collapse);
            config.autoscale_attributes = collapse_key_values(&auto_scale.attributes);
        }
        config
    }

    fn slot(integration: &mut Integration) -> &mut Nullable<EcsIntegration> {
        &mut integration.ecs
    }

    fn slot_ref(integration: &Integration) -> &Nullable<EcsIntegration> {
        &integration.ecs
    }
}
