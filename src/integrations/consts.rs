//! Configuration keys of every integration block.

use crate::schema::FieldName;

pub const PREFIX: &str = "integrations_";

// Shared
pub const MASTER_HOST: FieldName = FieldName::new("master_host");

pub const AUTOSCALE_IS_ENABLED: FieldName = FieldName::new("autoscale_is_enabled");
pub const AUTOSCALE_COOLDOWN: FieldName = FieldName::new("autoscale_cooldown");
pub const AUTOSCALE_HEADROOM: FieldName = FieldName::new("autoscale_headroom");
pub const AUTOSCALE_IS_AUTO_CONFIG: FieldName = FieldName::new("autoscale_is_auto_config");
pub const CPU_PER_UNIT: FieldName = FieldName::new("cpu_per_unit");
pub const MEMORY_PER_UNIT: FieldName = FieldName::new("memory_per_unit");
pub const NUM_OF_UNITS: FieldName = FieldName::new("num_of_units");

pub const AUTOSCALE_DOWN: FieldName = FieldName::new("autoscale_down");
pub const EVALUATION_PERIODS: FieldName = FieldName::new("evaluation_periods");

pub const API_SERVER: FieldName = FieldName::new("api_server");

pub const KEY: FieldName = FieldName::new("key");
pub const VALUE: FieldName = FieldName::new("value");

// Rancher
pub const INTEGRATION_RANCHER: FieldName = FieldName::new("integration_rancher");
pub const ACCESS_KEY: FieldName = FieldName::new("access_key");
pub const SECRET_KEY: FieldName = FieldName::new("secret_key");

// ECS
pub const SHOULD_SCALE_DOWN_NON_SERVICE_TASKS: FieldName =
    FieldName::new("autoscale_scale_down_non_service_tasks");
pub const INTEGRATION_ECS: FieldName = FieldName::new("integration_ecs");
pub const CLUSTER_NAME: FieldName = FieldName::new("cluster_name");
pub const AUTOSCALE_ATTRIBUTES: FieldName = FieldName::new("autoscale_attributes");

// Kubernetes
pub const INTEGRATION_KUBERNETES: FieldName = FieldName::new("integration_kubernetes");
pub const INTEGRATION_MODE: FieldName = FieldName::new("integration_mode");
pub const CLUSTER_IDENTIFIER: FieldName = FieldName::new("cluster_identifier");
pub const TOKEN: FieldName = FieldName::new("token");
pub const AUTOSCALE_LABELS: FieldName = FieldName::new("autoscale_labels");

// Nomad
pub const INTEGRATION_NOMAD: FieldName = FieldName::new("integration_nomad");
pub const MASTER_PORT: FieldName = FieldName::new("master_port");
pub const ACL_TOKEN: FieldName = FieldName::new("acl_token");
pub const AUTOSCALE_CONSTRAINTS: FieldName = FieldName::new("autoscale_constraints");

// Mesosphere
pub const INTEGRATION_MESOSPHERE: FieldName = FieldName::new("integration_mesosphere");

// Multai-Runtime
pub const INTEGRATION_MULTAI_RUNTIME: FieldName = FieldName::new("integration_multai_runtime");
pub const DEPLOYMENT_ID: FieldName = FieldName::new("deployment_id");

// CodeDeploy
pub const INTEGRATION_CODE_DEPLOY: FieldName = FieldName::new("integration_codedeploy");
pub const CLEANUP_ON_FAILURE: FieldName = FieldName::new("cleanup_on_failure");
pub const TERMINATE_INSTANCE_ON_FAILURE: FieldName =
    FieldName::new("terminate_instance_on_failure");
pub const DEPLOYMENT_GROUPS: FieldName = FieldName::new("deployment_groups");
pub const APPLICATION_NAME: FieldName = FieldName::new("application_name");
pub const DEPLOYMENT_GROUP_NAME: FieldName = FieldName::new("deployment_group_name");

// GitLab
pub const INTEGRATION_GITLAB: FieldName = FieldName::new("integration_gitlab");
pub const GITLAB_RUNNER: FieldName = FieldName::new("runner");
pub const GITLAB_RUNNER_IS_ENABLED: FieldName = FieldName::new("is_enabled");

// Route53
pub const INTEGRATION_ROUTE53: FieldName = FieldName::new("integration_route53");
pub const DOMAINS: FieldName = FieldName::new("domains");
pub const HOSTED_ZONE_ID: FieldName = FieldName::new("hosted_zone_id");
pub const RECORD_SETS: FieldName = FieldName::new("record_sets");
pub const USE_PUBLIC_IP: FieldName = FieldName::new("use_public_ip");
pub const NAME: FieldName = FieldName::new("name");

// Elastic Beanstalk
pub const INTEGRATION_ELASTIC_BEANSTALK: FieldName =
    FieldName::new("integration_elastic_beanstalk");
pub const ENVIRONMENT_ID: FieldName = FieldName::new("environment_id");
pub const DEPLOYMENT_PREFERENCES: FieldName = FieldName::new("deployment_preferences");
pub const AUTOMATIC_ROLL: FieldName = FieldName::new("automatic_roll");
pub const BATCH_SIZE_PERCENTAGE: FieldName = FieldName::new("batch_size_percentage");
pub const GRACE_PERIOD: FieldName = FieldName::new("grace_period");
pub const STRATEGY: FieldName = FieldName::new("strategy");
pub const ACTION: FieldName = FieldName::new("action");
pub const SHOULD_DRAIN_INSTANCES: FieldName = FieldName::new("should_drain_instances");
