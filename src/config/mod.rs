//! Crate configuration: endpoint URL and per-variant feature flags.
//!
//! The stockroom front end exists in several near-identical deployments that
//! differ only in which item columns the sheet carries and which UX guards
//! are active. Those differences are configuration here, not forked code.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EndpointConfig, FeatureFlags};
