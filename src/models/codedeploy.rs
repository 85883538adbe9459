//! CodeDeploy integration structures.

use serde::{Deserialize, Serialize};

/// CodeDeploy deployment groups that target the group's instances
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeDeployIntegration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup_on_failure: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminate_instance_on_failure: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deployment_groups: Vec<DeploymentGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_group_name: Option<String>,
}
