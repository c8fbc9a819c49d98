//! Layered configuration resolution
//!
//! This module provides the single entry point for resolving configuration
//! values from the process environment, a local definitions file, and a
//! remote secret bundle, with proper priority ordering.

mod settings;
mod config_resolver;

pub use settings::{DeploymentMode, ResolverSettings};
pub use config_resolver::ConfigResolver;
