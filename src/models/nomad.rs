//! Nomad integration structures.

use serde::{Deserialize, Serialize};

use super::autoscale::{AutoScaleDown, AutoScaleHeadroom, AutoScaleKeyValue};

/// Nomad cluster backed by the group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NomadIntegration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_port: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scale: Option<NomadAutoScaler>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NomadAutoScaler {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headroom: Option<AutoScaleHeadroom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<AutoScaleDown>,
    /// Constraint keys are sent wrapped as `${key}`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<AutoScaleKeyValue>,
}
