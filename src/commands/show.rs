//! Print a normalized config

use anyhow::Result;

use crate::{ConfigFormat, PipelineConfig};

/// Render a config in the requested format
pub fn render(config: &PipelineConfig, format: ConfigFormat) -> Result<String> {
    Ok(config.to_string(format)?)
}

/// Print a config to stdout
pub fn run(config: &PipelineConfig, format: ConfigFormat) -> Result<()> {
    print!("{}", render(config, format)?);
    Ok(())
}
