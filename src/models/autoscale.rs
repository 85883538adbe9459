//! Auto-scaler structures shared by the container orchestrator integrations.

use serde::{Deserialize, Serialize};

/// Spare capacity kept available by the auto-scaler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScaleHeadroom {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_per_unit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_per_unit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_of_units: Option<i64>,
}

/// Scale-down behaviour of the auto-scaler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScaleDown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_periods: Option<i64>,
}

/// Key/value pair used for attributes, labels and constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AutoScaleKeyValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
