//! HTTP client for the remote secret store

use std::time::Duration;

use serde::Deserialize;

use super::traits::SecretFetcher;
use crate::error::{ConfigError, ConfigResult};

/// Default endpoint template; `{region}` is substituted per request
pub const DEFAULT_ENDPOINT_TEMPLATE: &str = "https://secrets.{region}.envault.dev";

/// Response envelope returned by the secret store
#[derive(Debug, Deserialize)]
struct SecretValueResponse {
    #[serde(default)]
    secret_string: Option<String>,
}

/// Secret store client over HTTP
///
/// Issues one GET per fetch against
/// `{endpoint}/v1/secrets/{id}/versions/current`, where the endpoint is the
/// template with `{region}` substituted. The response is a JSON envelope
/// whose `secret_string` field carries the raw payload.
#[derive(Debug, Clone)]
pub struct HttpSecretFetcher {
    endpoint_template: String,
}

impl Default for HttpSecretFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSecretFetcher {
    /// Create a fetcher against the default endpoint template
    pub fn new() -> Self {
        Self {
            endpoint_template: DEFAULT_ENDPOINT_TEMPLATE.to_string(),
        }
    }

    /// Create a fetcher with a custom endpoint template
    ///
    /// The template may contain `{region}`, replaced per request.
    pub fn with_endpoint_template(template: impl Into<String>) -> Self {
        Self {
            endpoint_template: template.into(),
        }
    }

    fn secret_url(&self, secret_id: &str, region: &str) -> String {
        let base = self.endpoint_template.replace("{region}", region);
        format!(
            "{}/v1/secrets/{}/versions/current",
            base.trim_end_matches('/'),
            secret_id
        )
    }
}

impl SecretFetcher for HttpSecretFetcher {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch_current(
        &self,
        secret_id: &str,
        region: &str,
        timeout: Duration,
    ) -> ConfigResult<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::Fetch(format!("building secret store client: {e}")))?;

        let url = self.secret_url(secret_id, region);
        let response = client
            .get(&url)
            .send()
            .map_err(|e| ConfigError::Fetch(format!("requesting secret '{secret_id}': {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConfigError::Fetch(format!(
                "secret store returned {status} for '{secret_id}'"
            )));
        }

        let envelope: SecretValueResponse = response
            .json()
            .map_err(|e| ConfigError::Fetch(format!("reading secret response for '{secret_id}': {e}")))?;

        match envelope.secret_string {
            Some(payload) if !payload.is_empty() => Ok(payload),
            _ => Err(ConfigError::Fetch(format!(
                "empty secret payload for '{secret_id}'"
            ))),
        }
    }
}
