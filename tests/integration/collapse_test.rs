use crate::utils::{all_blocks, registry, resource};
use elastigroup_integrations::models::Group;
use elastigroup_integrations::{GroupWrapper, ResourceData};
use serde_json::json;

#[test]
fn test_read_restores_configuration_of_every_integration() -> elastigroup_integrations::Result<()> {
    let registry = registry();
    let mut wrapper = GroupWrapper::new();
    registry.create_all(&mut wrapper, &resource(all_blocks()))?;

    let mut data = ResourceData::new();
    registry.read_all(&wrapper, &mut data)?;
    assert_eq!(data.into_value(), all_blocks());
    Ok(())
}

#[test]
fn test_read_from_backend_response() -> elastigroup_integrations::Result<()> {
    let group: Group = serde_json::from_value(json!({
        "id": "sig-1234",
        "integration": {
            "elasticBeanstalk": {
                "environmentId": "e-abc",
                "deploymentPreferences": {
                    "automaticRoll": true,
                    "strategy": {"action": "REPLACE_SERVER"}
                }
            },
            "nomad": {
                "masterHost": "nomad.internal",
                "masterPort": 4646,
                "autoScale": {"constraints": [{"key": "${meta.type}", "value": "web"}]}
            },
            "rancher": null
        }
    }))?;

    let mut data = ResourceData::new();
    registry().read_all(&GroupWrapper::from_group(group), &mut data)?;

    assert_eq!(
        data.values()["integration_elastic_beanstalk"],
        json!([{
            "environment_id": "e-abc",
            "deployment_preferences": [{
                "automatic_roll": true,
                "strategy": [{"action": "REPLACE_SERVER"}]
            }]
        }])
    );
    assert_eq!(
        data.values()["integration_nomad"],
        json!([{
            "master_host": "nomad.internal",
            "master_port": 4646,
            "autoscale_constraints": [{"key": "meta.type", "value": "web"}]
        }])
    );
    assert_eq!(data.values()["integration_rancher"], json!([]));
    assert_eq!(data.values()["integration_route53"], json!([]));
    Ok(())
}

#[test]
fn test_read_then_update_sends_same_request() -> elastigroup_integrations::Result<()> {
    let registry = registry();
    let mut created = GroupWrapper::new();
    registry.create_all(&mut created, &resource(all_blocks()))?;

    let mut data = ResourceData::new();
    registry.read_all(&created, &mut data)?;
    registry.validate_all(&data)?;

    let mut updated = GroupWrapper::new();
    registry.update_all(&mut updated, &data)?;
    assert_eq!(updated, created);
    Ok(())
}
