//! Configuration module
//!
//! A pipeline config is a single document with two records:
//! `configuration` (site metadata and theme) and `plugins` (the ordered
//! transformer, filter and emitter lists).

mod error;
mod format;
mod site;
pub mod validate;

pub use error::ConfigError;
pub use format::ConfigFormat;
pub use site::{Analytics, DateType, SiteConfig};
pub use validate::{validate, Issue, Report};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::plugins::PluginSet;

/// The whole pipeline configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    pub configuration: SiteConfig,
    pub plugins: PluginSet,
}

impl PipelineConfig {
    /// Load configuration from a file, picking the format from its extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        tracing::debug!("Loading {} config from {:?}", format, path);
        Self::from_str(&content, format)
    }

    /// Load and reject configs with validation errors
    ///
    /// Returns the config along with any warnings.
    pub fn load_validated<P: AsRef<Path>>(path: P) -> Result<(Self, Vec<Issue>), ConfigError> {
        let config = Self::load(path)?;
        let warnings = config.validate().into_result()?;
        Ok((config, warnings))
    }

    /// Parse configuration from text in the given format
    pub fn from_str(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        format.parse(content)
    }

    /// Serialize configuration in the given format
    pub fn to_string(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        format.render(self)
    }

    /// Write configuration to a file, picking the format from its extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = self.to_string(format)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io(parent.to_path_buf(), e))?;
        }
        fs::write(path, content).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        tracing::debug!("Wrote {} config to {:?}", format, path);
        Ok(())
    }

    pub fn validate(&self) -> Report {
        validate::validate(self)
    }
}
