//! Resolver settings and deployment mode selection

use std::path::PathBuf;
use std::time::Duration;

use crate::dotenv::LoadPolicy;

/// Deployment mode selecting which source strategy initialization uses
///
/// The strategies are strictly exclusive: a resolver loads the local
/// definitions file or fetches the remote bundle, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    /// Load the local definitions file into the process environment
    Local,
    /// Fetch the secret bundle from the remote store
    Remote,
}

impl DeploymentMode {
    /// Parse the deployment-mode signal
    ///
    /// Unset, empty, or `"local"` (case-insensitive) selects the local
    /// strategy; any other value selects the remote strategy.
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal {
            Some(s) if !s.trim().is_empty() && !s.trim().eq_ignore_ascii_case("local") => {
                DeploymentMode::Remote
            }
            _ => DeploymentMode::Local,
        }
    }
}

/// Settings for [`ConfigResolver`]
///
/// Defaults match the conventional knobs: `DEPLOYMENT_MODE`, `SECRET_NAME`,
/// `REGION`, a `.env` definitions file in the working directory, and a 10
/// second fetch deadline. Explicit `mode`/`secret_name`/`region` overrides
/// skip the environment read entirely, which avoids re-entrant lookups and
/// keeps tests independent of shared process state.
///
/// [`ConfigResolver`]: super::ConfigResolver
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Environment variable carrying the deployment-mode signal
    pub mode_var: String,
    /// Environment variable naming the secret to fetch
    pub secret_name_var: String,
    /// Environment variable naming the secret store region
    pub region_var: String,
    /// Explicit mode override; when set, `mode_var` is never read
    pub mode: Option<DeploymentMode>,
    /// Explicit secret name override
    pub secret_name: Option<String>,
    /// Explicit region override
    pub region: Option<String>,
    /// Path of the local definitions file
    pub definitions_file: PathBuf,
    /// Policy for keys already present in the process environment
    pub load_policy: LoadPolicy,
    /// Deadline for the remote fetch round trip
    pub fetch_timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            mode_var: "DEPLOYMENT_MODE".to_string(),
            secret_name_var: "SECRET_NAME".to_string(),
            region_var: "REGION".to_string(),
            mode: None,
            secret_name: None,
            region: None,
            definitions_file: PathBuf::from(".env"),
            load_policy: LoadPolicy::default(),
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

impl ResolverSettings {
    /// Create settings with the conventional defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a deployment mode instead of reading the mode variable
    pub fn with_mode(mut self, mode: DeploymentMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the secret name explicitly instead of reading the name variable
    pub fn with_secret_name(mut self, name: impl Into<String>) -> Self {
        self.secret_name = Some(name.into());
        self
    }

    /// Set the region explicitly instead of reading the region variable
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Use a different definitions file path
    pub fn with_definitions_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.definitions_file = path.into();
        self
    }

    /// Use a different policy for already-set environment variables
    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    /// Bound the remote fetch with a different deadline
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Read the deployment-mode signal from a different variable
    pub fn with_mode_var(mut self, var: impl Into<String>) -> Self {
        self.mode_var = var.into();
        self
    }
}
