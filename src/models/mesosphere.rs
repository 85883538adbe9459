use serde::{Deserialize, Serialize};

/// Mesosphere DC/OS cluster the group joins
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MesosphereIntegration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}
