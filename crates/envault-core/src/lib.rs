//! Envault Core
//!
//! Layered configuration resolution for a running process. Values come
//! from three sources with fixed precedence:
//!
//! 1. Process environment variables
//! 2. A secret bundle fetched once from a remote, region-scoped secret
//!    store (remote deployment mode)
//! 3. Caller-supplied defaults
//!
//! In local deployment mode a `KEY=VALUE` definitions file from the
//! working directory is injected into the process environment instead of
//! fetching anything remote. Source loading runs at most once per
//! resolver; failures are permanent for the process and never leak into
//! the typed lookup path, which always returns a value.
//!
//! ```no_run
//! use envault_core::{ConfigResolver, ResolverSettings};
//!
//! let resolver = ConfigResolver::new(ResolverSettings::new());
//! let _ = resolver.load(); // optional: surface remote errors eagerly
//!
//! let port = resolver.get_int("PORT", 3000);
//! let debug = resolver.get_bool("DEBUG", false);
//! let rate = resolver.get_float("SAMPLE_RATE", 1.0);
//! let host = resolver.get_string("HOST", "localhost");
//! ```

pub mod bundle;
pub mod dotenv;
pub mod error;
pub mod logging;
pub mod pretty;
pub mod remote;
pub mod resolver;

// Re-export commonly used types
pub use bundle::SecretBundle;
pub use dotenv::LoadPolicy;
pub use error::{ConfigError, ConfigResult};
pub use logging::{ConsoleLogger, Logger, NoOpLogger, SharedLogger};
pub use remote::{HttpSecretFetcher, SecretFetcher, StaticSecretFetcher};
pub use resolver::{ConfigResolver, DeploymentMode, ResolverSettings};
