//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

/// Expand environment variables and a leading `~` in a path string.
pub(crate) fn expand_path(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::full(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(expand_env("fa", "site.lang").unwrap(), "fa");
    }

    #[test]
    fn test_default_used_when_unset() {
        let value = expand_env("${PW_CONFIG_TEST_UNSET_LANG:-fa}", "site.lang").unwrap();

        assert_eq!(value, "fa");
    }

    #[test]
    fn test_unset_variable_is_error() {
        let err = expand_env("${PW_CONFIG_TEST_UNSET_TITLE}", "site.title").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "site.title"));
        assert!(err.to_string().contains("PW_CONFIG_TEST_UNSET_TITLE"));
    }

    #[test]
    fn test_path_default_used_when_unset() {
        let value =
            expand_path("${PW_CONFIG_TEST_UNSET_NAV:-nav.json}", "navigation.file").unwrap();

        assert_eq!(value, "nav.json");
    }
}
