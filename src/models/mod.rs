//! Backend object graph
//!
//! Strongly typed mirrors of the Elastigroup API structures produced by Expand
//! and consumed by Collapse. Serialized with camelCase keys; absent optional
//! values are left out of the request.

pub mod autoscale;
pub mod beanstalk;
pub mod codedeploy;
pub mod ecs;
pub mod gitlab;
pub mod group;
pub mod kubernetes;
pub mod mesosphere;
pub mod multai;
pub mod nomad;
pub mod nullable;
pub mod rancher;
pub mod route53;

pub use autoscale::{AutoScaleDown, AutoScaleHeadroom, AutoScaleKeyValue};
pub use beanstalk::{BeanstalkStrategy, DeploymentPreferences, ElasticBeanstalkIntegration};
pub use codedeploy::{CodeDeployIntegration, DeploymentGroup};
pub use ecs::{EcsAutoScaler, EcsIntegration};
pub use gitlab::{GitlabIntegration, GitlabRunner};
pub use group::{Group, GroupWrapper, Integration};
pub use kubernetes::{KubernetesAutoScaler, KubernetesIntegration};
pub use mesosphere::MesosphereIntegration;
pub use multai::MultaiIntegration;
pub use nomad::{NomadAutoScaler, NomadIntegration};
pub use nullable::Nullable;
pub use rancher::RancherIntegration;
pub use route53::{Domain, RecordSet, Route53Integration};
