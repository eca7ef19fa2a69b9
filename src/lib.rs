//! notes-cfg: typed configuration for a notes site pipeline
//!
//! This crate models the configuration a static site generator reads at
//! build time: site metadata, the theme with its light and dark palettes,
//! and the ordered transformer, filter and emitter plugin lists. It loads
//! and saves that document in YAML, JSON or TOML, validates it, and ships
//! the known revisions of the site's config as presets.

pub mod commands;
pub mod config;
pub mod diff;
pub mod helpers;
pub mod plugins;
pub mod presets;
pub mod theme;

pub use config::{ConfigError, ConfigFormat, PipelineConfig};
pub use presets::Preset;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A config document opened from disk
#[derive(Debug, Clone)]
pub struct Project {
    /// The loaded configuration
    pub config: PipelineConfig,
    /// Path the configuration was read from
    pub config_path: PathBuf,
    /// Directory containing the config file
    pub base_dir: PathBuf,
}

impl Project {
    /// Open a config file
    pub fn open<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref().to_path_buf();
        let config = PipelineConfig::load(&config_path)
            .with_context(|| format!("Failed to load {:?}", config_path))?;

        let base_dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            config,
            config_path,
            base_dir,
        })
    }

    /// Validate the configuration, failing on errors
    pub fn check(&self) -> Result<config::Report> {
        commands::check::run(self)
    }

    /// Content files that survive the ignore patterns
    pub fn content_files<P: AsRef<Path>>(&self, content_dir: P) -> Result<Vec<PathBuf>> {
        commands::list::content_files(self, content_dir.as_ref())
    }
}
