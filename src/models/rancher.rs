use serde::{Deserialize, Serialize};

/// Rancher server the group registers with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RancherIntegration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}
