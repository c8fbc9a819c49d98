//! Debug display helper
//!
//! Trivial by design: formats a decoded value as indented JSON for
//! inspection. No resolution logic lives here.

use serde_json::Value;

/// Render a value as indented JSON
///
/// Formatting failure degrades to the `Debug` rendering rather than
/// erroring.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
}

/// Print a value as indented JSON to stdout
pub fn pretty_print(value: &Value) {
    println!("{}", pretty_json(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_indents_objects() {
        let value = json!({"PORT": 8080, "HOST": "db"});
        let rendered = pretty_json(&value);
        assert!(rendered.contains("\n"));
        assert!(rendered.contains("\"PORT\": 8080"));
    }

    #[test]
    fn test_pretty_json_scalars() {
        assert_eq!(pretty_json(&json!("text")), "\"text\"");
        assert_eq!(pretty_json(&json!(true)), "true");
    }
}
