use crate::utils::registry;
use elastigroup_integrations::integrations::{Gitlab, consts, register};
use elastigroup_integrations::registry::HookKind;
use elastigroup_integrations::{
    FieldDefinition, FieldRegistryBuilder, GenericField, IntegrationError, IntegrationsConfig,
    Namespace,
};

#[test]
fn test_lookup_every_integration() -> elastigroup_integrations::Result<()> {
    let registry = registry();
    assert_eq!(registry.len(), 10);
    assert_eq!(registry.namespace(), Namespace::ElastigroupIntegrations);

    let beanstalk = registry.lookup(consts::INTEGRATION_ELASTIC_BEANSTALK)?;
    let environment_id = beanstalk
        .schema()
        .child("environment_id")
        .expect("environment_id declared");
    assert!(environment_id.required);

    let strategy = beanstalk
        .schema()
        .child("deployment_preferences")
        .and_then(|preferences| preferences.child("strategy"))
        .expect("strategy declared");
    assert!(strategy.required);
    assert!(strategy.child("action").is_some_and(|action| action.required));
    assert!(strategy.child("should_drain_instances").is_some_and(|drain| !drain.required));

    for name in registry.names() {
        assert_eq!(registry.lookup(name)?.name(), name);
    }
    Ok(())
}

#[test]
fn test_lookup_unknown_field() {
    let err = registry().lookup("integration_docker_swarm").unwrap_err();
    assert!(matches!(err, IntegrationError::FieldNotFound { .. }));
    assert_eq!(
        err.to_string(),
        "field not found: elastigroup_integrations/integration_docker_swarm"
    );
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut builder =
        FieldRegistryBuilder::new(Namespace::ElastigroupIntegrations, IntegrationsConfig::default());
    register::<Gitlab>(&mut builder).unwrap();

    let clash = GenericField::new(
        Namespace::ElastigroupIntegrations,
        FieldDefinition::object(consts::INTEGRATION_GITLAB, Vec::new()),
    );
    let err = builder.register(clash).unwrap_err();
    assert_eq!(
        err.to_string(),
        "duplicate field registration: integration_gitlab"
    );
    assert_eq!(builder.seal().len(), 1);
}

#[test]
fn test_hook_kind_names() {
    let names: Vec<String> = [HookKind::Validate, HookKind::Read, HookKind::Create, HookKind::Update]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, vec!["validate", "read", "create", "update"]);
}

#[test]
fn test_global_registry_is_shared() -> elastigroup_integrations::Result<()> {
    let first = elastigroup_integrations::registry::global()?;
    let second = elastigroup_integrations::registry::global()?;
    assert!(std::ptr::eq(first, second));

    let err = elastigroup_integrations::registry::install(registry()).unwrap_err();
    assert!(matches!(err, IntegrationError::RegistryInitialized));
    Ok(())
}
