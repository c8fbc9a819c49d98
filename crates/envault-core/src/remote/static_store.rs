//! In-memory secret fetcher

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use super::traits::SecretFetcher;
use crate::error::{ConfigError, ConfigResult};

/// In-memory secret fetcher for testing and ephemeral use
///
/// Holds raw payloads keyed by secret id and counts fetches, which makes
/// the resolver's exactly-once latch observable in tests.
///
/// # Thread Safety
///
/// Payloads live behind an `RwLock`; the fetch counter is atomic. Safe to
/// share across threads via `Arc`.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use envault_core::remote::{SecretFetcher, StaticSecretFetcher};
///
/// let fetcher = StaticSecretFetcher::with_payload("app/prod", r#"{"PORT": "9090"}"#);
/// let payload = fetcher.fetch_current("app/prod", "eu-west-1", Duration::from_secs(1)).unwrap();
/// assert_eq!(payload, r#"{"PORT": "9090"}"#);
/// assert_eq!(fetcher.fetch_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct StaticSecretFetcher {
    payloads: RwLock<HashMap<String, String>>,
    fetches: AtomicUsize,
}

impl StaticSecretFetcher {
    /// Create an empty fetcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher holding a single payload
    pub fn with_payload(secret_id: impl Into<String>, payload: impl Into<String>) -> Self {
        let fetcher = Self::new();
        fetcher.insert(secret_id, payload);
        fetcher
    }

    /// Register or replace a payload
    pub fn insert(&self, secret_id: impl Into<String>, payload: impl Into<String>) {
        let mut payloads = self.payloads.write().unwrap();
        payloads.insert(secret_id.into(), payload.into());
    }

    /// Number of fetches performed so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl SecretFetcher for StaticSecretFetcher {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_current(
        &self,
        secret_id: &str,
        _region: &str,
        _timeout: Duration,
    ) -> ConfigResult<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let payloads = self.payloads.read().unwrap();
        payloads
            .get(secret_id)
            .cloned()
            .ok_or_else(|| ConfigError::Fetch(format!("no payload registered for '{secret_id}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_fetcher_name() {
        let fetcher = StaticSecretFetcher::new();
        assert_eq!(fetcher.name(), "static");
    }

    #[test]
    fn test_static_fetcher_returns_payload() {
        let fetcher = StaticSecretFetcher::with_payload("id", "payload");
        let result = fetcher.fetch_current("id", "region", Duration::from_secs(1));
        assert_eq!(result.unwrap(), "payload");
    }

    #[test]
    fn test_static_fetcher_unknown_id_is_a_fetch_error() {
        let fetcher = StaticSecretFetcher::new();
        let err = fetcher
            .fetch_current("missing", "region", Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Fetch(_)));
    }

    #[test]
    fn test_static_fetcher_counts_fetches() {
        let fetcher = StaticSecretFetcher::with_payload("id", "{}");
        assert_eq!(fetcher.fetch_count(), 0);

        for _ in 0..3 {
            let _ = fetcher.fetch_current("id", "region", Duration::from_secs(1));
        }
        assert_eq!(fetcher.fetch_count(), 3);
    }
}
