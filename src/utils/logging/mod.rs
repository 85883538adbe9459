//! Logging utilities for hook execution
//!
//! This module provides standardized log lines for registry hook runs.

pub mod log;

// Re-export commonly used functions for convenience
pub use log::{log_hook_complete, log_hook_failed, log_hook_start};
