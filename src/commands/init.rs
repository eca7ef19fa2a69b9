//! Write a preset config to disk

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{ConfigFormat, Preset};

/// File stem used when the target is a directory
pub const DEFAULT_CONFIG_STEM: &str = "notes";

/// File name used when the target is a directory, e.g. `notes.yml`
pub fn default_config_name() -> String {
    format!("{}.{}", DEFAULT_CONFIG_STEM, ConfigFormat::default().extension())
}

/// Resolve where the config file goes
fn config_path(target: &Path) -> PathBuf {
    if target.is_dir() || target.extension().is_none() {
        target.join(default_config_name())
    } else {
        target.to_path_buf()
    }
}

/// Write `preset` to `target`, which may be a file path or a directory
///
/// Returns the path written to.
pub fn init_config(target: &Path, preset: Preset, force: bool) -> Result<PathBuf> {
    let path = config_path(target);
    let format = ConfigFormat::from_path(&path)?;

    if path.exists() && !force {
        anyhow::bail!("File already exists: {:?} (use --force to overwrite)", path);
    }

    let mut content = String::new();
    if format != ConfigFormat::Json {
        let now = chrono::Local::now();
        content.push_str(&format!(
            "# Notes site pipeline configuration\n# Generated from the `{}` preset on {}\n\n",
            preset,
            now.format("%Y-%m-%d")
        ));
    }
    content.push_str(&preset.config().to_string(format)?);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;

    tracing::info!("Wrote `{}` preset to {:?}", preset, path);
    Ok(path)
}
