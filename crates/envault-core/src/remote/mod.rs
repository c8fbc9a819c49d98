//! Remote secret provider
//!
//! Fetches the current version of a single named secret from a
//! region-scoped secret store. The fetch happens at most once per process;
//! the resolver guards it with its initialization latch.

mod traits;
mod http;
mod static_store;

pub use traits::SecretFetcher;
pub use http::{HttpSecretFetcher, DEFAULT_ENDPOINT_TEMPLATE};
pub use static_store::StaticSecretFetcher;
