//! Logging utilities
//!
//! This module provides standardized logging functions for hook runs.

use std::time::Duration;

use crate::error::IntegrationError;
use crate::registry::HookKind;
use crate::schema::FieldName;

/// Log a hook start with consistent format
///
/// # Arguments
/// * `hook` - Lifecycle event being run
/// * `field` - Field whose hook runs
pub fn log_hook_start(hook: HookKind, field: FieldName) {
    log::debug!("Running {hook} hook for {field}");
}

/// Log a hook completion with consistent format
///
/// # Arguments
/// * `hook` - Lifecycle event that ran
/// * `field` - Field whose hook ran
/// * `elapsed` - Time spent in the hook
pub fn log_hook_complete(hook: HookKind, field: FieldName, elapsed: Duration) {
    log::debug!("Completed {hook} hook for {field} in {elapsed:?}");
}

/// Log a hook failure with consistent format
pub fn log_hook_failed(hook: HookKind, field: FieldName, error: &IntegrationError) {
    if error.is_validation() {
        log::info!("{hook} hook for {field} rejected configuration: {error}");
    } else {
        log::warn!("{hook} hook for {field} failed: {error}");
    }
}
