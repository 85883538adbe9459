//! Kubernetes integration structures.

use serde::{Deserialize, Serialize};

use super::autoscale::{AutoScaleDown, AutoScaleHeadroom, AutoScaleKeyValue};

/// Kubernetes cluster backed by the group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesIntegration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scale: Option<KubernetesAutoScaler>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesAutoScaler {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto_config: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headroom: Option<AutoScaleHeadroom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<AutoScaleDown>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<AutoScaleKeyValue>,
}
