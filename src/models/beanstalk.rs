//! Elastic Beanstalk integration structures.

use serde::{Deserialize, Serialize};

/// Elastic Beanstalk environment managed by the group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElasticBeanstalkIntegration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_preferences: Option<DeploymentPreferences>,
}

/// Roll-out behaviour of Beanstalk deployments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_roll: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size_percentage: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grace_period: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<BeanstalkStrategy>,
}

/// Deployment strategy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeanstalkStrategy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_drain_instances: Option<bool>,
}
