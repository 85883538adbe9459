//! The group request object the integration hooks write into.

use serde::{Deserialize, Serialize};

use super::beanstalk::ElasticBeanstalkIntegration;
use super::codedeploy::CodeDeployIntegration;
use super::ecs::EcsIntegration;
use super::gitlab::GitlabIntegration;
use super::kubernetes::KubernetesIntegration;
use super::mesosphere::MesosphereIntegration;
use super::multai::MultaiIntegration;
use super::nomad::NomadIntegration;
use super::nullable::Nullable;
use super::rancher::RancherIntegration;
use super::route53::Route53Integration;

/// Third-party integrations of a group, one slot per integration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub elastic_beanstalk: Nullable<ElasticBeanstalkIntegration>,
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub rancher: Nullable<RancherIntegration>,
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub ecs: Nullable<EcsIntegration>,
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub kubernetes: Nullable<KubernetesIntegration>,
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub nomad: Nullable<NomadIntegration>,
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub mesosphere: Nullable<MesosphereIntegration>,
    #[serde(default, rename = "multai", skip_serializing_if = "Nullable::is_omitted")]
    pub multai_runtime: Nullable<MultaiIntegration>,
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub code_deploy: Nullable<CodeDeployIntegration>,
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub gitlab: Nullable<GitlabIntegration>,
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    pub route53: Nullable<Route53Integration>,
}

/// The part of an Elastigroup these bindings manage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub integration: Integration,
}

/// In-flight request object handed from hook to hook during one lifecycle event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupWrapper {
    group: Group,
}

impl GroupWrapper {
    /// Start a request from an empty group
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a group fetched from the backend
    #[must_use]
    pub fn from_group(group: Group) -> Self {
        Self { group }
    }

    /// The group being built or read
    #[must_use]
    pub fn group(&self) -> &Group {
        &self.group
    }

    /// Mutable access for write hooks
    pub fn group_mut(&mut self) -> &mut Group {
        &mut self.group
    }

    /// Finish the request and hand the group to the transport
    #[must_use]
    pub fn into_group(self) -> Group {
        self.group
    }
}
