use elastigroup_integrations::integrations::{
    Ecs, ElasticBeanstalk, IntegrationBinding, Nomad, collapse_value, expand_value,
};
use proptest::option;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn insert<T: Into<Value>>(map: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value.into());
    }
}

/// Expanding the collapsed form of an expansion gives the expansion back
fn assert_stable<I>(block: &Value) -> Result<(), TestCaseError>
where
    I: IntegrationBinding,
    I::Backend: PartialEq + std::fmt::Debug,
{
    if let Ok(Some(expanded)) = expand_value::<I>(block) {
        let again = expand_value::<I>(&collapse_value::<I>(&expanded))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(again, Some(expanded));
    }
    Ok(())
}

proptest! {
    #[test]
    fn beanstalk_expansion_is_stable(
        environment_id in option::of("[a-z0-9-]{0,6}"),
        automatic_roll in option::of(any::<bool>()),
        batch_size_percentage in option::of(-5i64..105),
        grace_period in option::of(-5i64..600),
        action in option::of("[A-Z_]{0,6}"),
        should_drain_instances in option::of(any::<bool>()),
        with_strategy in any::<bool>(),
    ) {
        let mut strategy = Map::new();
        insert(&mut strategy, "action", action);
        insert(&mut strategy, "should_drain_instances", should_drain_instances);

        let mut preferences = Map::new();
        insert(&mut preferences, "automatic_roll", automatic_roll);
        insert(&mut preferences, "batch_size_percentage", batch_size_percentage);
        insert(&mut preferences, "grace_period", grace_period);
        if with_strategy {
            preferences.insert("strategy".to_string(), json!([strategy]));
        }

        let mut block = Map::new();
        insert(&mut block, "environment_id", environment_id);
        block.insert("deployment_preferences".to_string(), json!([preferences]));

        assert_stable::<ElasticBeanstalk>(&json!([block]))?;
    }

    #[test]
    fn ecs_expansion_is_stable(
        cluster_name in option::of("[a-z]{0,4}"),
        cooldown in option::of(-2i64..600),
        is_enabled in option::of(any::<bool>()),
        cpu_per_unit in option::of(-2i64..4096),
        evaluation_periods in option::of(-2i64..10),
        attributes in proptest::collection::vec(("[a-z]{0,3}", "[a-z]{0,3}"), 0..3),
    ) {
        let mut block = Map::new();
        insert(&mut block, "cluster_name", cluster_name);
        insert(&mut block, "autoscale_cooldown", cooldown);
        insert(&mut block, "autoscale_is_enabled", is_enabled);
        if let Some(cpu_per_unit) = cpu_per_unit {
            block.insert("autoscale_headroom".to_string(), json!([{"cpu_per_unit": cpu_per_unit}]));
        }
        if let Some(evaluation_periods) = evaluation_periods {
            block.insert("autoscale_down".to_string(), json!([{"evaluation_periods": evaluation_periods}]));
        }
        let attributes: Vec<Value> = attributes
            .into_iter()
            .map(|(key, value)| json!({"key": key, "value": value}))
            .collect();
        block.insert("autoscale_attributes".to_string(), Value::Array(attributes));

        assert_stable::<Ecs>(&json!([block]))?;
    }

    #[test]
    fn nomad_expansion_is_stable(
        master_port in option::of(-10i64..70000),
        constraints in proptest::collection::vec(("[a-z.${}]{0,6}", "[a-z]{0,3}"), 0..3),
    ) {
        let mut block = Map::new();
        block.insert("master_host".to_string(), json!("nomad.internal"));
        insert(&mut block, "master_port", master_port);
        let constraints: Vec<Value> = constraints
            .into_iter()
            .map(|(key, value)| json!({"key": key, "value": value}))
            .collect();
        block.insert("autoscale_constraints".to_string(), Value::Array(constraints));

        assert_stable::<Nomad>(&json!([block]))?;
    }
}
