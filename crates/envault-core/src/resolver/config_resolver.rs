//! The configuration resolver
//!
//! One `ConfigResolver` owns all resolution state; nothing is stored in
//! package-level globals. On first use it runs a single source-loading pass
//! selected by the deployment mode: local mode reads the definitions file
//! into the process environment, remote mode fetches and decodes one secret
//! bundle. Every lookup then reads the process environment first, falls
//! back to the cached bundle, and finally to the caller-supplied default.
//!
//! Source priority for lookups:
//! 1. Process environment (non-empty values only)
//! 2. Secret bundle (values coerced to strings, then parsed)
//! 3. Caller-supplied default

use std::env;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::settings::{DeploymentMode, ResolverSettings};
use crate::bundle::SecretBundle;
use crate::dotenv;
use crate::error::{ConfigError, ConfigResult};
use crate::logging::{ConsoleLogger, SharedLogger};
use crate::remote::{HttpSecretFetcher, SecretFetcher};
use crate::{log_error, log_info, log_warn};

/// Layered configuration resolver
///
/// Construct one at process startup and pass it by reference to call
/// sites. Initialization runs at most once per resolver: the first caller
/// to hit a latch executes the loading logic, concurrent callers block
/// until it finishes, and everyone observes the same outcome. A failed
/// remote load is permanent; it is never retried, and lookups keep
/// working off the process environment and defaults.
///
/// # Example
///
/// ```no_run
/// use envault_core::{ConfigResolver, ResolverSettings};
///
/// let resolver = ConfigResolver::new(ResolverSettings::new());
///
/// // Surface remote-fetch failures eagerly instead of degrading silently.
/// if let Err(e) = resolver.load() {
///     eprintln!("configuration incomplete: {e}");
/// }
///
/// let port = resolver.get_int("PORT", 3000);
/// let verbose = resolver.get_bool("VERBOSE", false);
/// ```
pub struct ConfigResolver {
    settings: ResolverSettings,
    fetcher: Arc<dyn SecretFetcher>,
    logger: SharedLogger,
    /// Latch for the local definitions load; the unit value marks completion
    local_latch: OnceCell<()>,
    /// Latch for the remote fetch; stores the first outcome for replay.
    /// `Ok(None)` means remote loading was a no-op (no secret configured).
    remote_latch: OnceCell<Result<Option<SecretBundle>, ConfigError>>,
}

impl ConfigResolver {
    /// Create a resolver using the HTTP secret fetcher
    pub fn new(settings: ResolverSettings) -> Self {
        Self::with_fetcher(settings, Arc::new(HttpSecretFetcher::new()))
    }

    /// Create a resolver with a custom secret fetcher
    pub fn with_fetcher(settings: ResolverSettings, fetcher: Arc<dyn SecretFetcher>) -> Self {
        Self {
            settings,
            fetcher,
            logger: Arc::new(ConsoleLogger::new()),
            local_latch: OnceCell::new(),
            remote_latch: OnceCell::new(),
        }
    }

    /// Replace the logger
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// The strategy initialization uses, from the explicit override or the
    /// mode variable
    pub fn mode(&self) -> DeploymentMode {
        if let Some(mode) = self.settings.mode {
            return mode;
        }
        let signal = env::var(&self.settings.mode_var).ok();
        DeploymentMode::from_signal(signal.as_deref())
    }

    /// Explicit initialization entrypoint
    ///
    /// Idempotent and safe to call from any number of threads: the selected
    /// strategy runs at most once per resolver and every caller observes
    /// the first outcome. Call this eagerly at startup to surface
    /// `Configuration`/`Fetch`/`Decode` errors instead of letting lookups
    /// degrade silently. An empty or unconfigured secret name in remote
    /// mode is a no-op success, not an error.
    pub fn load(&self) -> ConfigResult<()> {
        match self.mode() {
            DeploymentMode::Local => {
                self.local_latch.get_or_init(|| self.load_local());
                Ok(())
            }
            DeploymentMode::Remote => self
                .remote_latch
                .get_or_init(|| self.load_remote())
                .clone()
                .map(|_| ()),
        }
    }

    /// The decoded secret bundle, if remote initialization has completed
    /// successfully
    pub fn bundle(&self) -> Option<&SecretBundle> {
        self.remote_latch.get()?.as_ref().ok()?.as_ref()
    }

    /// Get a string value; empty values are treated as absent
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.get_with(key, default.to_string(), |raw| Some(raw.to_string()))
    }

    /// Get a boolean value
    ///
    /// Accepts the canonical tokens `1/t/true/yes/on` and
    /// `0/f/false/no/off`, case-insensitive.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_with(key, default, parse_bool)
    }

    /// Get a base-10 signed integer value
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_with(key, default, |raw| raw.trim().parse::<i64>().ok())
    }

    /// Get a floating-point value (decimal or exponential notation)
    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.get_with(key, default, |raw| raw.trim().parse::<f64>().ok())
    }

    /// The uniform read path behind every typed accessor
    ///
    /// A source value that fails to parse falls through to the next source;
    /// a lookup never returns an error.
    fn get_with<T>(&self, key: &str, default: T, parse: impl Fn(&str) -> Option<T>) -> T {
        // Initialization errors are surfaced by load() only.
        let _ = self.load();

        if let Ok(value) = env::var(key) {
            if !value.is_empty() {
                if let Some(parsed) = parse(&value) {
                    return parsed;
                }
            }
        }

        if let Some(bundle) = self.bundle() {
            if let Some(raw) = bundle.get_coerced(key) {
                if let Some(parsed) = parse(&raw) {
                    return parsed;
                }
            }
        }

        default
    }

    fn load_local(&self) {
        let path = &self.settings.definitions_file;
        match dotenv::load_into_env(path, self.settings.load_policy) {
            Ok(count) => {
                log_info!(
                    self.logger,
                    "loaded {} definitions from {}",
                    count,
                    path.display()
                );
            }
            // Non-fatal: lookups proceed with the existing environment.
            Err(e) => {
                log_warn!(
                    self.logger,
                    "definitions file {} not loaded: {}",
                    path.display(),
                    e
                );
            }
        }
    }

    fn load_remote(&self) -> Result<Option<SecretBundle>, ConfigError> {
        let result = self.fetch_bundle();
        if let Err(e) = &result {
            log_error!(self.logger, "remote secret load failed permanently: {}", e);
        }
        result
    }

    fn fetch_bundle(&self) -> Result<Option<SecretBundle>, ConfigError> {
        let secret_name = self
            .setting_or_env(self.settings.secret_name.as_deref(), &self.settings.secret_name_var)
            .filter(|s| !s.is_empty());
        let Some(secret_name) = secret_name else {
            log_info!(self.logger, "no secret name configured, skipping remote load");
            return Ok(None);
        };

        let region = self
            .setting_or_env(self.settings.region.as_deref(), &self.settings.region_var)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| {
                ConfigError::Configuration(format!(
                    "region required to load secret '{secret_name}'"
                ))
            })?;

        log_info!(
            self.logger,
            "loading secret '{}' from region '{}' via {}",
            secret_name,
            region,
            self.fetcher.name()
        );
        let payload =
            self.fetcher
                .fetch_current(&secret_name, &region, self.settings.fetch_timeout)?;
        // On decode failure no bundle is stored, so lookups fall through to
        // defaults instead of seeing partial data.
        let bundle = SecretBundle::from_json_str(&payload)?;
        log_info!(self.logger, "secret bundle loaded with {} entries", bundle.len());
        Ok(Some(bundle))
    }

    fn setting_or_env(&self, explicit: Option<&str>, var: &str) -> Option<String> {
        match explicit {
            Some(value) => Some(value.to_string()),
            None => env::var(var).ok(),
        }
    }
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("settings", &self.settings)
            .field("fetcher", &self.fetcher.name())
            .field("remote_loaded", &self.remote_latch.get().is_some())
            .finish()
    }
}

/// Parse the canonical truthy/falsy tokens, case-insensitive
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "yes" | "on" => Some(true),
        "0" | "f" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
