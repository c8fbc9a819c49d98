//! Core trait for remote secret store clients

use std::time::Duration;

use crate::error::ConfigResult;

/// Trait for remote secret store clients
///
/// Implementations:
/// - `HttpSecretFetcher`: region-scoped HTTP secret store
/// - `StaticSecretFetcher`: in-memory for testing
/// - Custom implementations (Vault, cloud SDKs, etc.)
pub trait SecretFetcher: Send + Sync {
    /// Human-readable name of this fetcher
    fn name(&self) -> &str;

    /// Fetch the current version of the named secret as its raw payload
    ///
    /// The payload is the undecoded secret string; decoding into a
    /// [`SecretBundle`] happens in the resolver. A non-empty payload is
    /// required. The round trip must not exceed `timeout`.
    ///
    /// [`SecretBundle`]: crate::bundle::SecretBundle
    fn fetch_current(
        &self,
        secret_id: &str,
        region: &str,
        timeout: Duration,
    ) -> ConfigResult<String>;
}
