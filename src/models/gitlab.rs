use serde::{Deserialize, Serialize};

/// GitLab runner hosted on the group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitlabIntegration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner: Option<GitlabRunner>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitlabRunner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}
