//! CLI command implementations

pub mod check;
pub mod css;
pub mod diff;
pub mod init;
pub mod list;
pub mod presets;
pub mod show;
pub mod watch;

use anyhow::Result;

use crate::{PipelineConfig, Preset};

/// Resolve a command argument to a config
///
/// `preset:<name>` selects a built-in preset, anything else is a file path.
pub fn resolve_config(source: &str) -> Result<PipelineConfig> {
    if let Some(name) = source.strip_prefix("preset:") {
        let preset: Preset = name.parse().map_err(anyhow::Error::msg)?;
        return Ok(preset.config());
    }
    Ok(crate::Project::open(source)?.config)
}
