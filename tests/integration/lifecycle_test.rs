use crate::utils::{all_blocks, integration_json, registry, resource};
use elastigroup_integrations::models::{Integration, Nullable};
use elastigroup_integrations::{GroupWrapper, ResourceData};
use serde_json::json;

#[test]
fn test_create_without_blocks_sends_nothing() -> elastigroup_integrations::Result<()> {
    let mut wrapper = GroupWrapper::new();
    registry().create_all(&mut wrapper, &ResourceData::new())?;
    assert_eq!(wrapper.group().integration, Integration::default());
    assert_eq!(integration_json(&wrapper), json!({}));
    Ok(())
}

#[test]
fn test_update_without_blocks_clears_every_integration() -> elastigroup_integrations::Result<()> {
    let mut wrapper = GroupWrapper::new();
    registry().update_all(&mut wrapper, &ResourceData::new())?;

    assert_eq!(
        integration_json(&wrapper),
        json!({
            "elasticBeanstalk": null,
            "rancher": null,
            "ecs": null,
            "kubernetes": null,
            "nomad": null,
            "mesosphere": null,
            "multai": null,
            "codeDeploy": null,
            "gitlab": null,
            "route53": null
        })
    );
    Ok(())
}

#[test]
fn test_update_replaces_previous_value() -> elastigroup_integrations::Result<()> {
    let registry = registry();
    let mut wrapper = GroupWrapper::new();
    registry.create_all(
        &mut wrapper,
        &resource(json!({"integration_multai_runtime": [{"deployment_id": "dp-1"}]})),
    )?;
    assert!(matches!(
        wrapper.group().integration.multai_runtime,
        Nullable::Value(_)
    ));

    registry.update_all(&mut wrapper, &resource(json!({"integration_multai_runtime": []})))?;
    assert_eq!(wrapper.group().integration.multai_runtime, Nullable::Null);
    Ok(())
}

#[test]
fn test_all_blocks_validate_and_create() -> elastigroup_integrations::Result<()> {
    let registry = registry();
    let data = resource(all_blocks());
    registry.validate_all(&data)?;

    let mut wrapper = GroupWrapper::new();
    registry.create_all(&mut wrapper, &data)?;
    let integration = integration_json(&wrapper);

    assert_eq!(integration["rancher"]["masterHost"], json!("https://rancher.example.com"));
    assert_eq!(integration["ecs"]["autoScale"]["headroom"]["cpuPerUnit"], json!(1024));
    assert_eq!(integration["kubernetes"]["autoScale"]["labels"][0]["key"], json!("team"));
    assert_eq!(integration["nomad"]["autoScale"]["constraints"][0]["key"], json!("${node.class}"));
    assert_eq!(integration["mesosphere"]["server"], json!("https://dcos.example.com"));
    assert_eq!(integration["multai"]["deploymentId"], json!("dp-1"));
    assert_eq!(integration["codeDeploy"]["deploymentGroups"][0]["deploymentGroupName"], json!("blue"));
    assert_eq!(integration["gitlab"]["runner"]["isEnabled"], json!(true));
    assert_eq!(integration["route53"]["domains"][0]["recordSets"][0]["usePublicIp"], json!(true));
    Ok(())
}

#[test]
fn test_validate_reports_every_structural_issue() {
    let data = resource(json!({
        "integration_ecs": [{"autoscale_cooldown": "soon", "autoscale_extra": 1}],
        "integration_gitlab": [{}, {}]
    }));

    let err = registry().validate_all(&data).unwrap_err();
    assert_eq!(
        err.to_string(),
        "integration_ecs.0.cluster_name: required field is not set; \
         integration_ecs.0.autoscale_cooldown: expected integer, found string; \
         integration_ecs.0.autoscale_extra: unsupported argument"
    );
}

#[test]
fn test_non_list_block_is_a_validation_error() {
    let data = resource(json!({"integration_rancher": "rancher.example.com"}));
    let err = registry()
        .create_all(&mut GroupWrapper::new(), &data)
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "invalid integration rancher attributes: expected a list of maps, found string"
    );
}
