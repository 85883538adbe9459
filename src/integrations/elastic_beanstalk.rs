//! Elastic Beanstalk integration
//!
//! Binds `integration_elastic_beanstalk` to the group's Beanstalk environment and
//! its deployment preferences. Expansion goes one level at a time:
//! integration, then deployment preferences, then strategy. Each level either
//! yields a complete node or fails; it never hands back a partially built one.

use super::IntegrationBinding;
use super::common::{non_empty, non_negative, positive};
use super::consts::{
    ACTION, AUTOMATIC_ROLL, BATCH_SIZE_PERCENTAGE, DEPLOYMENT_PREFERENCES, ENVIRONMENT_ID,
    GRACE_PERIOD, INTEGRATION_ELASTIC_BEANSTALK, SHOULD_DRAIN_INSTANCES, STRATEGY,
};
use crate::error::{IntegrationError, Result};
use crate::models::{
    BeanstalkStrategy, DeploymentPreferences, ElasticBeanstalkIntegration, Integration, Nullable,
};
use crate::schema::{ConfigBlock, FieldName};

/// Binding of the Elastic Beanstalk block
pub struct ElasticBeanstalk;

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct ElasticBeanstalkConfig {
    #[field(name = ENVIRONMENT_ID, required)]
    pub environment_id: Option<String>,
    #[field(name = DEPLOYMENT_PREFERENCES, required)]
    pub deployment_preferences: Option<DeploymentPreferencesConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct DeploymentPreferencesConfig {
    #[field(name = AUTOMATIC_ROLL, required)]
    pub automatic_roll: Option<bool>,
    #[field(name = BATCH_SIZE_PERCENTAGE)]
    pub batch_size_percentage: Option<i64>,
    #[field(name = GRACE_PERIOD)]
    pub grace_period: Option<i64>,
    #[field(name = STRATEGY, required)]
    pub strategy: Option<StrategyConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct StrategyConfig {
    #[field(name = ACTION, required)]
    pub action: Option<String>,
    #[field(name = SHOULD_DRAIN_INSTANCES)]
    pub should_drain_instances: Option<bool>,
}

impl IntegrationBinding for ElasticBeanstalk {
    const FIELD: FieldName = INTEGRATION_ELASTIC_BEANSTALK;

    type Config = ElasticBeanstalkConfig;
    type Backend = ElasticBeanstalkIntegration;

    fn expand(config: ElasticBeanstalkConfig) -> Result<ElasticBeanstalkIntegration> {
        let deployment_preferences = config
            .deployment_preferences
            .map(expand_deployment_preferences)
            .transpose()?;

        Ok(ElasticBeanstalkIntegration {
            environment_id: non_empty(config.environment_id),
            deployment_preferences,
        })
    }

    fn collapse(backend: &ElasticBeanstalkIntegration) -> ElasticBeanstalkConfig {
        ElasticBeanstalkConfig {
            environment_id: backend.environment_id.clone(),
            deployment_preferences: backend
                .deployment_preferences
                .as_ref()
                .map(collapse_deployment_preferences),
        }
    }

    fn slot(integration: &mut Integration) -> &mut Nullable<ElasticBeanstalkIntegration> {
        &mut integration.elastic_beanstalk
    }

    fn slot_ref(integration: &Integration) -> &Nullable<ElasticBeanstalkIntegration> {
        &integration.elastic_beanstalk
    }
}

/// Expand the deployment preferences record
///
/// `automatic_roll` and `strategy` are required. A batch size is kept only when
/// positive, a grace period only when not negative.
pub fn expand_deployment_preferences(
    config: DeploymentPreferencesConfig,
) -> Result<DeploymentPreferences> {
    let Some(automatic_roll) = config.automatic_roll else {
        return Err(IntegrationError::validation(
            "invalid deployment preferences attributes: set_automatic_roll missing",
        ));
    };

    let Some(strategy) = config.strategy else {
        return Err(IntegrationError::validation(
            "invalid deployment preferences attributes: strategy missing",
        ));
    };
    let strategy = expand_strategy(strategy)?;

    Ok(DeploymentPreferences {
        automatic_roll: Some(automatic_roll),
        batch_size_percentage: positive(config.batch_size_percentage),
        grace_period: non_negative(config.grace_period),
        strategy: Some(strategy),
    })
}

/// Expand the strategy record, which needs a non-empty action
pub fn expand_strategy(config: StrategyConfig) -> Result<BeanstalkStrategy> {
    let Some(action) = non_empty(config.action) else {
        return Err(IntegrationError::validation(
            "invalid strategy attributes: action missing",
        ));
    };

    Ok(BeanstalkStrategy {
        action: Some(action),
        should_drain_instances: config.should_drain_instances,
    })
}

fn collapse_deployment_preferences(preferences: &DeploymentPreferences) -> DeploymentPreferencesConfig {
    DeploymentPreferencesConfig {
        automatic_roll: preferences.automatic_roll,
        batch_size_percentage: preferences.batch_size_percentage,
        grace_period: preferences.grace_period,
        strategy: preferences.strategy.as_ref().map(|strategy| StrategyConfig {
            action: strategy.action.clone(),
            should_drain_instances: strategy.should_drain_instances,
        }),
    }
}
