//! CodeDeploy integration

use super::IntegrationBinding;
use super::common::non_empty;
use super::consts::{
    APPLICATION_NAME, CLEANUP_ON_FAILURE, DEPLOYMENT_GROUP_NAME, DEPLOYMENT_GROUPS,
    INTEGRATION_CODE_DEPLOY, TERMINATE_INSTANCE_ON_FAILURE,
};
use crate::error::Result;
use crate::models::{CodeDeployIntegration, DeploymentGroup, Integration, Nullable};
use crate::schema::{ConfigBlock, FieldName};

pub struct CodeDeploy;

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct CodeDeployConfig {
    #[field(name = CLEANUP_ON_FAILURE, required)]
    pub cleanup_on_failure: Option<bool>,
    #[field(name = TERMINATE_INSTANCE_ON_FAILURE, required)]
    pub terminate_instance_on_failure: Option<bool>,
    #[field(name = DEPLOYMENT_GROUPS, required, set)]
    pub deployment_groups: Vec<DeploymentGroupConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct DeploymentGroupConfig {
    #[field(name = APPLICATION_NAME, required)]
    pub application_name: Option<String>,
    #[field(name = DEPLOYMENT_GROUP_NAME, required)]
    pub deployment_group_name: Option<String>,
}

impl IntegrationBinding for CodeDeploy {
    const FIELD: FieldName = INTEGRATION_CODE_DEPLOY;

    type Config = CodeDeployConfig;
    type Backend = CodeDeployIntegration;

    fn expand(config: CodeDeployConfig) -> Result<CodeDeployIntegration> {
        Ok(CodeDeployIntegration {
            cleanup_on_failure: config.cleanup_on_failure,
            terminate_instance_on_failure: config.terminate_instance_on_failure,
            deployment_groups: config
                .deployment_groups
                .into_iter()
                .map(|group| DeploymentGroup {
                    application_name: non_empty(group.application_name),
                    deployment_group_name: non_empty(group.deployment_group_name),
                })
                .collect(),
        })
    }

    fn collapse(backend: &CodeDeployIntegration) -> CodeDeployConfig {
        CodeDeployConfig {
            cleanup_on_failure: backend.cleanup_on_failure,
            terminate_instance_on_failure: backend.terminate_instance_on_failure,
            deployment_groups: backend
                .deployment_groups
                .iter()
                .map(|group| DeploymentGroupConfig {
                    application_name: group.application_name.clone(),
                    deployment_group_name: group.deployment_group_name.clone(),
                })
                .collect(),
        }
    }

    fn slot(integration: &mut Integration) -> &mut Nullable<CodeDeployIntegration> {
        &mut integration.code_deploy
    }

    fn slot_ref(integration: &Integration) -> &Nullable<CodeDeployIntegration> {
        &integration.code_deploy
    }
}
