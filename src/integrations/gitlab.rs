//! GitLab integration

use super::IntegrationBinding;
use super::consts::{GITLAB_RUNNER, GITLAB_RUNNER_IS_ENABLED, INTEGRATION_GITLAB};
use crate::error::Result;
use crate::models::{GitlabIntegration, GitlabRunner, Integration, Nullable};
use crate::schema::{ConfigBlock, FieldName};

pub struct Gitlab;

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct GitlabConfig {
    #[field(name = GITLAB_RUNNER, max_items = 1)]
    pub runner: Option<RunnerConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct RunnerConfig {
    #[field(name = GITLAB_RUNNER_IS_ENABLED)]
    pub is_enabled: Option<bool>,
}

impl IntegrationBinding for Gitlab {
    const FIELD: FieldName = INTEGRATION_GITLAB;

    type Config = GitlabConfig;
    type Backend = GitlabIntegration;

    fn expand(config: GitlabConfig) -> Result<GitlabIntegration> {
        Ok(GitlabIntegration {
            runner: config.runner.map(|runner| GitlabRunner {
                is_enabled: runner.is_enabled,
            }),
        })
    }

    fn collapse(backend: &GitlabIntegration) -> GitlabConfig {
        GitlabConfig {
            runner: backend.runner.as_ref().map(|runner| RunnerConfig {
                is_enabled: runner.is_enabled,
            }),
        }
    }

    fn slot(integration: &mut Integration) -> &mut Nullable<GitlabIntegration> {
        &mut integration.gitlab
    }

    fn slot_ref(integration: &Integration) -> &Nullable<GitlabIntegration> {
        &integration.gitlab
    }
}
