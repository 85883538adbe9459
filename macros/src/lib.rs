//! Procedural macros for the elastigroup-integrations crate
//!
//! This crate provides the `ConfigBlock` derive, which turns a plain struct of
//! optional scalars and nested blocks into a schema declaration, a boundary
//! decoder and its inverse encoder.

use proc_macro::TokenStream;

mod config_block;
mod utils;

// Tests
#[cfg(test)]
mod tests;

/// Derive macro for configuration blocks
///
/// Every field carries a `#[field(...)]` attribute whose `name` is a
/// `FieldName` constant. The Rust type decides the shape of the key:
///
/// * `Option<String>`, `Option<bool>`, `Option<i64>`, `Option<f64>`: scalar
/// * `Option<T>` where `T: ConfigBlock`: nested record (a list of at most one map)
/// * `Vec<T>` where `T: ConfigBlock`: repeated records
///
/// Supported options are `required`, `max_items = N`, `set` and
/// `description = "..."`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Default, PartialEq, ConfigBlock)]
/// pub struct StrategyConfig {
///     #[field(name = ACTION, required)]
///     pub action: Option<String>,
///
///     #[field(name = SHOULD_DRAIN_INSTANCES)]
///     pub should_drain_instances: Option<bool>,
/// }
/// ```
#[proc_macro_derive(ConfigBlock, attributes(field))]
pub fn derive_config_block(input: TokenStream) -> TokenStream {
    config_block::process_derive_config_block(input)
}
