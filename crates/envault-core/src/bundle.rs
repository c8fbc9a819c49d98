//! Secret bundle decoded from the remote store payload

use serde_json::{Map, Value};

use crate::error::{ConfigError, ConfigResult};

/// Immutable key/value mapping decoded from a remote secret payload
///
/// The bundle is built once during initialization and never mutated
/// afterwards, so readers need no locking: they observe either "no bundle"
/// or a fully populated one.
///
/// # Example
///
/// ```
/// use envault_core::SecretBundle;
///
/// let bundle = SecretBundle::from_json_str(r#"{"PORT": 9090, "HOST": "db"}"#).unwrap();
/// assert_eq!(bundle.get_coerced("PORT"), Some("9090".to_string()));
/// assert_eq!(bundle.get_coerced("HOST"), Some("db".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecretBundle {
    entries: Map<String, Value>,
}

impl SecretBundle {
    /// Decode a secret payload into a bundle
    ///
    /// The payload must be a JSON object; any other JSON value (array,
    /// scalar) is a decode error.
    pub fn from_json_str(payload: &str) -> ConfigResult<Self> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| ConfigError::Decode(format!("secret payload is not valid JSON: {e}")))?;
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(ConfigError::Decode(format!(
                "secret payload must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Raw decoded value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Coerce an entry to its string representation
    ///
    /// Strings are returned verbatim; numbers and booleans use their JSON
    /// rendering. `null` is treated as absent so lookups fall through to
    /// the caller-supplied default instead of parsing the token "null".
    pub fn get_coerced(&self, key: &str) -> Option<String> {
        match self.entries.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Whether the bundle contains a key
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries in the bundle
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the bundle's keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_decodes_object() {
        let bundle = SecretBundle::from_json_str(r#"{"A": "1", "B": "2"}"#).unwrap();
        assert_eq!(bundle.len(), 2);
        assert!(bundle.contains("A"));
        assert!(!bundle.contains("C"));
        assert_eq!(bundle.get("A"), Some(&Value::String("1".to_string())));
    }

    #[test]
    fn test_bundle_rejects_invalid_json() {
        let err = SecretBundle::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)));
    }

    #[test]
    fn test_bundle_rejects_non_object_payloads() {
        for payload in [r#"[1, 2]"#, r#""scalar""#, "42", "null"] {
            let err = SecretBundle::from_json_str(payload).unwrap_err();
            assert!(matches!(err, ConfigError::Decode(_)), "payload: {payload}");
        }
    }

    #[test]
    fn test_coercion_of_scalar_types() {
        let bundle = SecretBundle::from_json_str(
            r#"{"s": "text", "n": 9090, "f": 1.5, "b": true, "nil": null}"#,
        )
        .unwrap();

        assert_eq!(bundle.get_coerced("s"), Some("text".to_string()));
        assert_eq!(bundle.get_coerced("n"), Some("9090".to_string()));
        assert_eq!(bundle.get_coerced("f"), Some("1.5".to_string()));
        assert_eq!(bundle.get_coerced("b"), Some("true".to_string()));
        assert_eq!(bundle.get_coerced("nil"), None);
        assert_eq!(bundle.get_coerced("missing"), None);
    }

    #[test]
    fn test_empty_object_is_a_valid_bundle() {
        let bundle = SecretBundle::from_json_str("{}").unwrap();
        assert!(bundle.is_empty());
        assert_eq!(bundle.keys().count(), 0);
    }
}
