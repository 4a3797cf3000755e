//! Environment variable expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config key in the error message.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("blogs", "content.dir").unwrap(), "blogs");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_UNSET");
        }
        assert_eq!(
            expand_env("${FOLIO_EXPAND_UNSET:-posts}/2024", "content.dir").unwrap(),
            "posts/2024"
        );
    }

    #[test]
    fn test_set_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_EXPAND_SET", "/srv/blog");
        }
        assert_eq!(
            expand_env("${FOLIO_EXPAND_SET}", "content.dir").unwrap(),
            "/srv/blog"
        );
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_SET");
        }
    }

    #[test]
    fn test_missing_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_MISSING");
        }
        let err = expand_env("${FOLIO_EXPAND_MISSING}", "content.manifest").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable error in content.manifest: ${FOLIO_EXPAND_MISSING} not set"
        );
    }
}
