//! Kubernetes integration

use super::IntegrationBinding;
use super::common::{
    DownConfig, HeadroomConfig, KeyValueConfig, collapse_key_values, expand_key_values, non_empty,
    positive,
};
use super::consts::{
    API_SERVER, AUTOSCALE_COOLDOWN, AUTOSCALE_DOWN, AUTOSCALE_HEADROOM, AUTOSCALE_IS_AUTO_CONFIG,
    AUTOSCALE_IS_ENABLED, AUTOSCALE_LABELS, CLUSTER_IDENTIFIER, INTEGRATION_KUBERNETES,
    INTEGRATION_MODE, TOKEN,
};
use crate::error::Result;
use crate::models::{Integration, KubernetesAutoScaler, KubernetesIntegration, Nullable};
use crate::schema::{ConfigBlock, FieldName};

pub struct Kubernetes;

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct KubernetesConfig {
    #[field(name = INTEGRATION_MODE)]
    pub integration_mode: Option<String>,
    #[field(name = CLUSTER_IDENTIFIER)]
    pub cluster_identifier: Option<String>,
    #[field(name = API_SERVER)]
    pub api_server: Option<String>,
    #[field(name = TOKEN)]
    pub token: Option<String>,
    #[field(name = AUTOSCALE_IS_ENABLED)]
    pub autoscale_is_enabled: Option<bool>,
    #[field(name = AUTOSCALE_COOLDOWN)]
    pub autoscale_cooldown: Option<i64>,
    #[field(name = AUTOSCALE_IS_AUTO_CONFIG)]
    pub autoscale_is_auto_config: Option<bool>,
    #[field(name = AUTOSCALE_HEADROOM, max_items = 1)]
    pub autoscale_headroom: Option<HeadroomConfig>,
    #[field(name = AUTOSCALE_DOWN, max_items = 1)]
    pub autoscale_down: Option<DownConfig>,
    #[field(name = AUTOSCALE_LABELS, set)]
    pub autoscale_labels: Vec<KeyValueConfig>,
}

impl IntegrationBinding for Kubernetes {
    const FIELD: FieldName = INTEGRATION_KUBERNETES;

    type Config = KubernetesConfig;
    type Backend = KubernetesIntegration;

    fn expand(config: KubernetesConfig) -> Result<KubernetesIntegration> {
        let auto_scale = KubernetesAutoScaler {
            is_enabled: config.autoscale_is_enabled,
            cooldown: positive(config.autoscale_cooldown),
            is_auto_config: config.autoscale_is_auto_config,
            headroom: config.autoscale_headroom.map(HeadroomConfig::expand),
            down: config.autoscale_down.map(DownConfig::expand),
            labels: expand_key_values(config.autoscale_labels),
        };

        Ok(KubernetesIntegration {
            integration_mode: non_empty(config.integration_mode),
            cluster_identifier: non_empty(config.cluster_identifier),
            server: non_empty(config.api_server),
            token: non_empty(config.token),
            auto_scale: (auto_scale != KubernetesAutoScaler::default()).then_some(auto_scale),
        })
    }

    fn collapse(backend: &KubernetesIntegration) -> KubernetesConfig {
        let mut config = KubernetesConfig {
            integration_mode: backend.integration_mode.clone(),
            cluster_identifier: backend.cluster_identifier.clone(),
            api_server: backend.server.clone(),
            token: backend.token.clone(),
            ..KubernetesConfig::default()
        };
        if let Some(auto_scale) = &backend.auto_scale {
            config.autoscale_is_enabled = auto_scale.is_enabled;
            config.autoscale_cooldown = auto_scale.cooldown;
            config.autoscale_is_auto_config = auto_scale.is_auto_config;
            config.autoscale_headroom = auto_scale.headroom.as_ref().map(HeadroomConfig::collapse);
            config.autoscale_down = auto_scale.down.as_ref().map(DownConfig::collapse);
            config.autoscale_labels = collapse_key_values(&auto_scale.labels);
        }
        config
    }

    fn slot(integration: &mut Integration) -> &mut Nullable<KubernetesIntegration> {
        &mut integration.kubernetes
    }

    fn slot_ref(integration: &Integration) -> &Nullable<KubernetesIntegration> {
        &integration.kubernetes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::expand_value;
    use crate::models::AutoScaleDown;
    use serde_json::json;

    #[test]
    fn test_saas_mode_with_auto_scaler() {
        let kubernetes = expand_value::<Kubernetes>(&json!([{
            "integration_mode": "pod",
            "cluster_identifier": "k8s-prod",
            "autoscale_is_auto_config": true,
            "autoscale_down": [{"evaluation_periods": 3}]
        }]))
        .unwrap()
        .unwrap();

        assert_eq!(kubernetes.integration_mode.as_deref(), Some("pod"));
        assert_eq!(kubernetes.server, None);
        let auto_scale = kubernetes.auto_scale.unwrap();
        assert_eq!(auto_scale.is_auto_config, Some(true));
        assert_eq!(
            auto_scale.down,
            Some(AutoScaleDown {
                evaluation_periods: Some(3)
            })
        );
    }

    #[test]
    fn test_serialized_server_key() {
        let kubernetes = Kubernetes::expand(KubernetesConfig {
            api_server: Some("https://k8s:6443".to_string()),
            token: Some("t".to_string()),
            ..KubernetesConfig::default()
        })
        .unwrap();
        assert_eq!(
            serde_json::to_value(&kubernetes).unwrap(),
            json!({"server": "https://k8s:6443", "token": "t"})
        );
    }
}
