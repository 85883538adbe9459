//! Route53 integration

use super::IntegrationBinding;
use super::common::non_empty;
use super::consts::{DOMAINS, HOSTED_ZONE_ID, INTEGRATION_ROUTE53, NAME, RECORD_SETS, USE_PUBLIC_IP};
use crate::error::Result;
use crate::models::{Domain, Integration, Nullable, RecordSet, Route53Integration};
use crate::schema::{ConfigBlock, FieldName};

pub struct Route53;

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct Route53Config {
    #[field(name = DOMAINS, required)]
    pub domains: Vec<DomainConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct DomainConfig {
    #[field(name = HOSTED_ZONE_ID, required)]
    pub hosted_zone_id: Option<String>,
    #[field(name = RECORD_SETS, required, set)]
    pub record_sets: Vec<RecordSetConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct RecordSetConfig {
    #[field(name = USE_PUBLIC_IP)]
    pub use_public_ip: Option<bool>,
    #[field(name = NAME, required)]
    pub name: Option<String>,
}

impl IntegrationBinding for Route53 {
    const FIELD: FieldName = INTEGRATION_ROUTE53;

    type Config = Route53Config;
    type Backend = Route53Integration;

    fn expand(config: Route53Config) -> Result<Route53Integration> {
        Ok(Route53Integration {
            domains: config.domains.into_iter().map(expand_domain).collect(),
        })
    }

    fn collapse(backend: &Route53Integration) -> Route53Config {
        Route53Config {
            domains: backend.domains.iter().map(collapse_domain).collect(),
        }
    }

    fn slot(integration: &mut Integration) -> &mut Nullable<Route53Integration> {
        &mut integration.route53
    }

    fn slot_ref(integration: &Integration) -> &Nullable<Route53Integration> {
        &integration.route53
    }
}

fn expand_domain(domain: DomainConfig) -> Domain {
    Domain {
        hosted_zone_id: non_empty(domain.hosted_zone_id),
        record_sets: domain
            .record_sets
            .into_iter()
            .map(|record| RecordSet {
                use_public_ip: record.use_public_ip,
                name: non_empty(record.name),
            })
            .collect(),
    }
}

fn collapse_domain(domain: &Domain) -> DomainConfig {
    DomainConfig {
        hosted_zone_id: domain.hosted_zone_id.clone(),
        record_sets: domain
            .record_sets
            .iter()
            .map(|record| RecordSetConfig {
                use_public_ip: record.use_public_ip,
                name: record.name.clone(),
            })
            .collect(),
    }
}
