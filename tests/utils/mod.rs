use elastigroup_integrations::{
    FieldRegistry, GroupWrapper, IntegrationsConfig, ResourceData, setup_fields,
};
use serde_json::{Value, json};

/// Registry with default settings, built fresh for each test
pub fn registry() -> FieldRegistry {
    setup_fields(&IntegrationsConfig::default()).expect("default registry builds")
}

/// Resource data from a JSON object
pub fn resource(value: Value) -> ResourceData {
    ResourceData::from_value(value).expect("resource data is an object")
}

/// Serialized integration node of a request
pub fn integration_json(wrapper: &GroupWrapper) -> Value {
    serde_json::to_value(&wrapper.group().integration).expect("integration serializes")
}

/// A complete Elastic Beanstalk block
pub fn beanstalk_block() -> Value {
    json!([{
        "environment_id": "e-abc",
        "deployment_preferences": [{
            "automatic_roll": true,
            "batch_size_percentage": 50,
            "grace_period": 300,
            "strategy": [{"action": "REPLACE_SERVER", "should_drain_instances": true}]
        }]
    }])
}

/// One populated block per integration
pub fn all_blocks() -> Value {
    json!({
        "integration_elastic_beanstalk": beanstalk_block(),
        "integration_rancher": [{
            "master_host": "https://rancher.example.com",
            "access_key": "access",
            "secret_key": "secret"
        }],
        "integration_ecs": [{
            "cluster_name": "prod",
            "autoscale_is_enabled": true,
            "autoscale_cooldown": 300,
            "autoscale_is_auto_config": false,
            "autoscale_scale_down_non_service_tasks": true,
            "autoscale_headroom": [{"cpu_per_unit": 1024, "memory_per_unit": 512, "num_of_units": 2}],
            "autoscale_down": [{"evaluation_periods": 5}],
            "autoscale_attributes": [{"key": "zone", "value": "a"}]
        }],
        "integration_kubernetes": [{
            "integration_mode": "pod",
            "cluster_identifier": "k8s-prod",
            "autoscale_is_enabled": true,
            "autoscale_labels": [{"key": "team", "value": "infra"}]
        }],
        "integration_nomad": [{
            "master_host": "nomad.internal",
            "master_port": 4646,
            "acl_token": "token",
            "autoscale_constraints": [{"key": "node.class", "value": "batch"}]
        }],
        "integration_mesosphere": [{"api_server": "https://dcos.example.com"}],
        "integration_multai_runtime": [{"deployment_id": "dp-1"}],
        "integration_codedeploy": [{
            "cleanup_on_failure": true,
            "terminate_instance_on_failure": false,
            "deployment_groups": [{"application_name": "web", "deployment_group_name": "blue"}]
        }],
        "integration_gitlab": [{"runner": [{"is_enabled": true}]}],
        "integration_route53": [{
            "domains": [{
                "hosted_zone_id": "Z123",
                "record_sets": [{"name": "www.example.com", "use_public_ip": true}]
            }]
        }]
    })
}
