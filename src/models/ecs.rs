//! ECS integration structures.

use serde::{Deserialize, Serialize};

use super::autoscale::{AutoScaleDown, AutoScaleHeadroom, AutoScaleKeyValue};

/// ECS cluster backed by the group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcsIntegration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scale: Option<EcsAutoScaler>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcsAutoScaler {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto_config: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_scale_down_non_service_tasks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headroom: Option<AutoScaleHeadroom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<AutoScaleDown>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AutoScaleKeyValue>,
}
