//! On-disk formats a pipeline config can be written in

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::ConfigError;

/// Serialization format, chosen by file extension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("yml") | Some("yaml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Preferred file extension
    pub fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yml",
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
        }
    }

    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, ConfigError> {
        let value = match self {
            ConfigFormat::Yaml => serde_yaml::from_str(text)?,
            ConfigFormat::Json => serde_json::from_str(text)?,
            ConfigFormat::Toml => toml::from_str(text)?,
        };
        Ok(value)
    }

    pub fn render<T: Serialize>(self, value: &T) -> Result<String, ConfigError> {
        let text = match self {
            ConfigFormat::Yaml => serde_yaml::to_string(value)?,
            ConfigFormat::Json => {
                let mut text = serde_json::to_string_pretty(value)?;
                text.push('\n');
                text
            }
            ConfigFormat::Toml => toml::to_string_pretty(value)?,
        };
        Ok(text)
    }
}

impl FromStr for ConfigFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yml" | "yaml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            other => Err(format!(
                "unknown format `{}`. Available: yaml, json, toml",
                other
            )),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            ConfigFormat::from_path("site/notes.yml").unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path("notes.YAML").unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path("notes.json").unwrap(),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path("notes.toml").unwrap(),
            ConfigFormat::Toml
        );
        assert!(matches!(
            ConfigFormat::from_path("quartz.config.ts"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(ConfigFormat::from_path("notes").is_err());
    }

    #[test]
    fn test_extension_maps_back() {
        for format in [ConfigFormat::Yaml, ConfigFormat::Json, ConfigFormat::Toml] {
            let name = format!("notes.{}", format.extension());
            assert_eq!(ConfigFormat::from_path(&name).unwrap(), format);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("JSON".parse::<ConfigFormat>().unwrap(), ConfigFormat::Json);
        assert!("ini".parse::<ConfigFormat>().is_err());
    }
}
