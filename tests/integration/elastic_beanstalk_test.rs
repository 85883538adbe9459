use crate::utils::{beanstalk_block, integration_json, registry, resource};
use elastigroup_integrations::GroupWrapper;
use elastigroup_integrations::integrations::{ElasticBeanstalk, expand_value};
use serde_json::json;

#[test]
fn test_create_sends_full_environment() -> elastigroup_integrations::Result<()> {
    let registry = registry();
    let data = resource(json!({"integration_elastic_beanstalk": beanstalk_block()}));

    registry.validate_all(&data)?;
    let mut wrapper = GroupWrapper::new();
    registry.create_all(&mut wrapper, &data)?;

    assert_eq!(
        integration_json(&wrapper),
        json!({
            "elasticBeanstalk": {
                "environmentId": "e-abc",
                "deploymentPreferences": {
                    "automaticRoll": true,
                    "batchSizePercentage": 50,
                    "gracePeriod": 300,
                    "strategy": {"action": "REPLACE_SERVER", "shouldDrainInstances": true}
                }
            }
        })
    );
    Ok(())
}

#[test]
fn test_zero_batch_size_and_negative_grace_period_are_omitted() {
    let integration = expand_value::<ElasticBeanstalk>(&json!([{
        "environment_id": "e-abc",
        "deployment_preferences": [{
            "automatic_roll": false,
            "batch_size_percentage": 0,
            "grace_period": -1,
            "strategy": [{"action": "RESTART_SERVER"}]
        }]
    }]))
    .unwrap()
    .unwrap();

    assert_eq!(
        serde_json::to_value(&integration).unwrap(),
        json!({
            "environmentId": "e-abc",
            "deploymentPreferences": {
                "automaticRoll": false,
                "strategy": {"action": "RESTART_SERVER"}
            }
        })
    );
}

#[test]
fn test_zero_grace_period_is_kept() {
    let integration = expand_value::<ElasticBeanstalk>(&json!([{
        "deployment_preferences": [{
            "automatic_roll": true,
            "batch_size_percentage": 1,
            "grace_period": 0,
            "strategy": [{"action": "REPLACE_SERVER"}]
        }]
    }]))
    .unwrap()
    .unwrap();

    let preferences = integration.deployment_preferences.unwrap();
    assert_eq!(preferences.batch_size_percentage, Some(1));
    assert_eq!(preferences.grace_period, Some(0));
    assert_eq!(integration.environment_id, None);
}

#[test]
fn test_create_fails_without_automatic_roll() {
    let registry = registry();
    let data = resource(json!({
        "integration_elastic_beanstalk": [{
            "environment_id": "e-abc",
            "deployment_preferences": [{"strategy": [{"action": "REPLACE_SERVER"}]}]
        }]
    }));

    let mut wrapper = GroupWrapper::new();
    let err = registry.create_all(&mut wrapper, &data).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "invalid deployment preferences attributes: set_automatic_roll missing"
    );
    assert!(wrapper.group().integration.elastic_beanstalk.is_omitted());
}

#[test]
fn test_update_fails_with_empty_strategy() {
    let data = resource(json!({
        "integration_elastic_beanstalk": [{
            "environment_id": "e-abc",
            "deployment_preferences": [{"automatic_roll": true, "strategy": []}]
        }]
    }));

    let err = registry()
        .update_all(&mut GroupWrapper::new(), &data)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid deployment preferences attributes: strategy missing"
    );
}

#[test]
fn test_create_fails_without_action() {
    let data = resource(json!({
        "integration_elastic_beanstalk": [{
            "deployment_preferences": [{"automatic_roll": true, "strategy": [{"should_drain_instances": true}]}]
        }]
    }));

    let err = registry()
        .create_all(&mut GroupWrapper::new(), &data)
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid strategy attributes: action missing");
}

#[test]
fn test_empty_deployment_preferences_is_rejected_by_schema_only() {
    let registry = registry();
    let data = resource(json!({
        "integration_elastic_beanstalk": [{"environment_id": "e-abc", "deployment_preferences": []}]
    }));

    // Expansion alone treats the empty list as "no preferences"
    let mut wrapper = GroupWrapper::new();
    registry.create_all(&mut wrapper, &data).unwrap();
    assert_eq!(
        integration_json(&wrapper),
        json!({"elasticBeanstalk": {"environmentId": "e-abc"}})
    );

    // The structural check enforces the required block
    let err = registry.validate_all(&data).unwrap_err();
    assert_eq!(
        err.to_string(),
        "integration_elastic_beanstalk.0.deployment_preferences: required field is not set"
    );
}

#[test]
fn test_empty_block_leaves_slot_untouched_on_create() -> elastigroup_integrations::Result<()> {
    let data = resource(json!({"integration_elastic_beanstalk": []}));
    let mut wrapper = GroupWrapper::new();
    registry().create_all(&mut wrapper, &data)?;
    assert_eq!(integration_json(&wrapper), json!({}));
    Ok(())
}
