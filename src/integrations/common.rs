//! Building blocks shared by several integrations
//!
//! The container orchestrator integrations (ECS, Kubernetes, Nomad) describe
//! their auto-scaler with the same headroom, scale-down and key/value records.

use super::consts::{CPU_PER_UNIT, EVALUATION_PERIODS, KEY, MEMORY_PER_UNIT, NUM_OF_UNITS, VALUE};
use crate::models::{AutoScaleDown, AutoScaleHeadroom, AutoScaleKeyValue};
use crate::schema::ConfigBlock;

/// Keep a value only when it is strictly positive
#[must_use]
pub fn positive(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v > 0)
}

/// Keep a value only when it is zero or positive
#[must_use]
pub fn non_negative(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v >= 0)
}

/// Keep a string only when it is not blank
#[must_use]
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Spare capacity kept by the auto-scaler
#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct HeadroomConfig {
    #[field(name = CPU_PER_UNIT)]
    pub cpu_per_unit: Option<i64>,
    #[field(name = MEMORY_PER_UNIT)]
    pub memory_per_unit: Option<i64>,
    #[field(name = NUM_OF_UNITS)]
    pub num_of_units: Option<i64>,
}

impl HeadroomConfig {
    #[must_use]
    pub fn expand(self) -> AutoScaleHeadroom {
        AutoScaleHeadroom {
            cpu_per_unit: positive(self.cpu_per_unit),
            memory_per_unit: positive(self.memory_per_unit),
            num_of_units: positive(self.num_of_units),
        }
    }

    #[must_use]
    pub fn collapse(headroom: &AutoScaleHeadroom) -> Self {
        Self {
            cpu_per_unit: headroom.cpu_per_unit,
            memory_per_unit: headroom.memory_per_unit,
            num_of_units: headroom.num_of_units,
        }
    }
}

/// Scale-down behaviour of the auto-scaler
#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct DownConfig {
    #[field(name = EVALUATION_PERIODS)]
    pub evaluation_periods: Option<i64>,
}

impl DownConfig {
    #[must_use]
    pub fn expand(self) -> AutoScaleDown {
        AutoScaleDown {
            evaluation_periods: positive(self.evaluation_periods),
        }
    }

    #[must_use]
    pub fn collapse(down: &AutoScaleDown) -> Self {
        Self {
            evaluation_periods: down.evaluation_periods,
        }
    }
}

/// Attribute, label or constraint of the auto-scaler
#[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
pub struct KeyValueConfig {
    #[field(name = KEY, required)]
    pub key: Option<String>,
    #[field(name = VALUE, required)]
    pub value: Option<String>,
}

impl KeyValueConfig {
    #[must_use]
    pub fn expand(self) -> AutoScaleKeyValue {
        AutoScaleKeyValue {
            key: non_empty(self.key),
            value: non_empty(self.value),
        }
    }

    #[must_use]
    pub fn collapse(pair: &AutoScaleKeyValue) -> Self {
        Self {
            key: pair.key.clone(),
            value: pair.value.clone(),
        }
    }
}

/// Expand repeated key/value records
#[must_use]
pub fn expand_key_values(pairs: Vec<KeyValueConfig>) -> Vec<AutoScaleKeyValue> {
    pairs.into_iter().map(KeyValueConfig::expand).collect()
}

#[must_use]
pub fn collapse_key_values(pairs: &[AutoScaleKeyValue]) -> Vec<KeyValueConfig> {
    pairs.iter().map(KeyValueConfig::collapse).collect()
}
