//! Error taxonomy for configuration loading

use thiserror::Error;

/// Errors that can occur while loading configuration sources
///
/// All variants carry owned strings so the error is `Clone` and the
/// initialization latch can replay the first outcome to every caller.
///
/// These errors are only surfaced by [`ConfigResolver::load`]; the typed
/// lookup path swallows them and degrades to the caller-supplied default.
///
/// [`ConfigResolver::load`]: crate::resolver::ConfigResolver::load
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting is missing (e.g. region absent while a secret
    /// name is configured)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The remote call failed or returned an empty payload
    #[error("fetch error: {0}")]
    Fetch(String),

    /// The secret payload is not a valid JSON object
    #[error("decode error: {0}")]
    Decode(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::Configuration("region required".to_string());
        assert_eq!(err.to_string(), "configuration error: region required");

        let err = ConfigError::Fetch("connection refused".to_string());
        assert_eq!(err.to_string(), "fetch error: connection refused");

        let err = ConfigError::Decode("not an object".to_string());
        assert_eq!(err.to_string(), "decode error: not an object");
    }

    #[test]
    fn test_error_clone_equality() {
        let err = ConfigError::Fetch("timed out".to_string());
        assert_eq!(err.clone(), err);
    }
}
