//! Integration bindings
//!
//! Each integration owns one optional top-level configuration block. A binding
//! declares the typed configuration of that block, how it expands into the
//! backend object graph and how the graph collapses back into configuration.
//! [`register`] turns a binding into a registry field with all four hooks.

use serde_json::Value;

use crate::config::IntegrationsConfig;
use crate::error::Result;
use crate::models::{Integration, Nullable};
use crate::registry::{FieldRegistry, FieldRegistryBuilder, GenericField, Namespace};
use crate::resource::ResourceData;
use crate::schema::{ConfigBlock, FieldDefinition, FieldName, check_field, decode};

pub mod codedeploy;
pub mod common;
pub mod consts;
pub mod ecs;
pub mod elastic_beanstalk;
pub mod gitlab;
pub mod kubernetes;
pub mod mesosphere;
pub mod multai_runtime;
pub mod nomad;
pub mod rancher;
pub mod route53;

pub use codedeploy::CodeDeploy;
pub use ecs::Ecs;
pub use elastic_beanstalk::ElasticBeanstalk;
pub use gitlab::Gitlab;
pub use kubernetes::Kubernetes;
pub use mesosphere::Mesosphere;
pub use multai_runtime::MultaiRuntime;
pub use nomad::Nomad;
pub use rancher::Rancher;
pub use route53::Route53;

/// Binding between one configuration block and one backend integration slot
pub trait IntegrationBinding: 'static {
    /// Top-level configuration key
    const FIELD: FieldName;

    /// Typed configuration of the block
    type Config: ConfigBlock;

    /// Backend structure the block expands into
    type Backend;

    /// Build the backend structure, rejecting invalid configuration
    fn expand(config: Self::Config) -> Result<Self::Backend>;

    /// Rebuild configuration from backend state
    fn collapse(backend: &Self::Backend) -> Self::Config;

    /// Slot of the integration inside the request object
    fn slot(integration: &mut Integration) -> &mut Nullable<Self::Backend>;

    fn slot_ref(integration: &Integration) -> &Nullable<Self::Backend>;

    /// Checks run before any write, on top of the structural check
    fn validate(_config: &Self::Config) -> Result<()> {
        Ok(())
    }
}

/// Expand an untyped block value
///
/// `Ok(None)` when the value carries no record.
pub fn expand_value<I: IntegrationBinding>(value: &Value) -> Result<Option<I::Backend>> {
    decode::block::<I::Config>(value, I::FIELD)?
        .map(I::expand)
        .transpose()
}

/// Collapse a backend structure into its untyped block value
pub fn collapse_value<I: IntegrationBinding>(backend: &I::Backend) -> Value {
    decode::encode_block(&I::collapse(backend))
}

/// Top-level schema descriptor of an integration block
#[must_use]
pub fn schema<I: IntegrationBinding>() -> FieldDefinition {
    FieldDefinition::object(I::FIELD, I::Config::fields())
        .with_required(false)
        .with_max_items(1)
}

/// Register one integration with its hooks
pub fn register<I: IntegrationBinding>(builder: &mut FieldRegistryBuilder) -> Result<()> {
    let validate_schema = builder.config().validate_schema;

    let field = GenericField::new(Namespace::ElastigroupIntegrations, schema::<I>())
        .on_validate(move |data| {
            let Some(value) = data.get(I::FIELD) else {
                return Ok(());
            };
            if validate_schema {
                check_field(&schema::<I>(), Some(value)).into_result()?;
            }
            match decode::block::<I::Config>(value, I::FIELD)? {
                Some(config) => I::validate(&config),
                None => Ok(()),
            }
        })
        .on_read(|wrapper, data| {
            let value = match I::slot_ref(&wrapper.group().integration).as_value() {
                Some(backend) => collapse_value::<I>(backend),
                None => Value::Array(Vec::new()),
            };
            data.set(I::FIELD, value);
            Ok(())
        })
        .on_create(|wrapper, data| {
            let expanded = expanded::<I>(data)?;
            I::slot(&mut wrapper.group_mut().integration).attach(expanded);
            Ok(())
        })
        .on_update(|wrapper, data| {
            let expanded = expanded::<I>(data)?;
            I::slot(&mut wrapper.group_mut().integration).replace(expanded);
            Ok(())
        });

    builder.register(field)
}

fn expanded<I: IntegrationBinding>(data: &ResourceData) -> Result<Option<I::Backend>> {
    match data.get_ok(I::FIELD) {
        Some(value) => expand_value::<I>(value),
        None => Ok(None),
    }
}

/// Register every integration, in declaration order, and seal the registry
pub fn setup_fields(config: &IntegrationsConfig) -> Result<FieldRegistry> {
    let mut builder = FieldRegistryBuilder::new(Namespace::ElastigroupIntegrations, config.clone());

    register::<ElasticBeanstalk>(&mut builder)?;
    register::<Rancher>(&mut builder)?;
    register::<Ecs>(&mut builder)?;
    register::<Kubernetes>(&mut builder)?;
    register::<Nomad>(&mut builder)?;
    register::<Mesosphere>(&mut builder)?;
    register::<MultaiRuntime>(&mut builder)?;
    register::<CodeDeploy>(&mut builder)?;
    register::<Gitlab>(&mut builder)?;
    register::<Route53>(&mut builder)?;

    Ok(builder.seal())
}
