//! Local definitions loader
//!
//! Reads `KEY=VALUE` pairs from a definitions file in the working directory
//! and injects them into the process environment. Loading is best-effort:
//! a missing or unreadable file is reported to the caller for logging but
//! never stops lookups, which keep working off whatever environment exists.

use std::env;
use std::io;
use std::path::Path;

/// Policy for keys that already exist in the process environment
///
/// "load" semantics keep existing variables; "overload" semantics let the
/// file win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Never overwrite a variable already set in the process environment
    #[default]
    Preserve,
    /// File values replace existing process environment variables
    Overwrite,
}

/// Parse a definitions file and inject its pairs into the process environment
///
/// Blank lines and `#` comments are skipped. Values may be wrapped in single
/// or double quotes, which are stripped. Lines without a `=` are ignored.
///
/// Returns the number of variables injected.
pub fn load_into_env(path: &Path, policy: LoadPolicy) -> io::Result<usize> {
    let content = std::fs::read_to_string(path)?;
    let mut injected = 0;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let value = value.trim().trim_matches('"').trim_matches('\'');

        if policy == LoadPolicy::Preserve && env::var_os(key).is_some() {
            continue;
        }
        env::set_var(key, value);
        injected += 1;
    }

    Ok(injected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn definitions_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_injects_pairs() {
        let file = definitions_file(
            "# comment line\n\
             DOTENV_TEST_HOST=localhost\n\
             \n\
             DOTENV_TEST_QUOTED=\"quoted value\"\n\
             DOTENV_TEST_SINGLE='single'\n\
             not a definition\n",
        );

        let injected = load_into_env(file.path(), LoadPolicy::Preserve).unwrap();
        assert_eq!(injected, 3);
        assert_eq!(env::var("DOTENV_TEST_HOST").unwrap(), "localhost");
        assert_eq!(env::var("DOTENV_TEST_QUOTED").unwrap(), "quoted value");
        assert_eq!(env::var("DOTENV_TEST_SINGLE").unwrap(), "single");

        env::remove_var("DOTENV_TEST_HOST");
        env::remove_var("DOTENV_TEST_QUOTED");
        env::remove_var("DOTENV_TEST_SINGLE");
    }

    #[test]
    fn test_preserve_keeps_existing_variables() {
        env::set_var("DOTENV_TEST_PRESERVED", "from_process");
        let file = definitions_file("DOTENV_TEST_PRESERVED=from_file\n");

        let injected = load_into_env(file.path(), LoadPolicy::Preserve).unwrap();
        assert_eq!(injected, 0);
        assert_eq!(env::var("DOTENV_TEST_PRESERVED").unwrap(), "from_process");

        env::remove_var("DOTENV_TEST_PRESERVED");
    }

    #[test]
    fn test_overwrite_lets_file_win() {
        env::set_var("DOTENV_TEST_OVERWRITTEN", "from_process");
        let file = definitions_file("DOTENV_TEST_OVERWRITTEN=from_file\n");

        let injected = load_into_env(file.path(), LoadPolicy::Overwrite).unwrap();
        assert_eq!(injected, 1);
        assert_eq!(env::var("DOTENV_TEST_OVERWRITTEN").unwrap(), "from_file");

        env::remove_var("DOTENV_TEST_OVERWRITTEN");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = load_into_env(Path::new("definitely/not/here/.env"), LoadPolicy::Preserve);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_keys_are_skipped() {
        let file = definitions_file("=no_key\nDOTENV_TEST_VALID=ok\n");

        let injected = load_into_env(file.path(), LoadPolicy::Preserve).unwrap();
        assert_eq!(injected, 1);
        assert_eq!(env::var("DOTENV_TEST_VALID").unwrap(), "ok");

        env::remove_var("DOTENV_TEST_VALID");
    }
}
