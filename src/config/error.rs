//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

use super::validate::Issue;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("unsupported config format for `{0}` (expected .yml, .yaml, .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("config validation failed:\n{}", format_issues(.0))]
    Validation(Vec<Issue>),
}

fn format_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("notes.yml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("notes.yml"));

        let validation_err = ConfigError::Validation(vec![
            Issue::new("configuration.pageTitle", "must not be empty"),
            Issue::new("plugins.filters", "must list at least one plugin"),
        ]);
        let display = format!("{validation_err}");
        assert!(display.contains("  - configuration.pageTitle: must not be empty"));
        assert!(display.contains("  - plugins.filters: must list at least one plugin"));
    }
}
