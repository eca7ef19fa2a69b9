//! Re-validate a config whenever it changes

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::PipelineConfig;

/// Load and validate once, logging the outcome instead of failing
fn revalidate(path: &Path) {
    match PipelineConfig::load(path) {
        Ok(config) => {
            let report = config.validate();
            if report.is_ok() {
                println!(
                    "✅ {} is valid ({} warning(s))",
                    path.display(),
                    report.warnings.len()
                );
            } else {
                println!("❌ {} has {} error(s)", path.display(), report.errors.len());
                for error in &report.errors {
                    println!("   {}", error);
                }
            }
        }
        Err(e) => println!("❌ Failed to load {}: {}", path.display(), e),
    }
}

/// Whether any of the changed paths is the config file itself
fn touches_config<'a>(config: &Path, changed: impl IntoIterator<Item = &'a Path>) -> bool {
    changed.into_iter().any(|p| p == config)
}

/// Absolute path of the config and the directory to watch for it
fn watch_target(path: &Path) -> Result<(PathBuf, PathBuf)> {
    let path = path.canonicalize()?;
    let dir = match path.parent() {
        Some(dir) => dir.to_path_buf(),
        None => anyhow::bail!("Config file has no parent directory: {:?}", path),
    };
    Ok((path, dir))
}

fn watch_blocking(path: PathBuf) -> Result<()> {
    let (path, dir) = watch_target(&path)?;
    let (tx, rx) = std::sync::mpsc::channel();

    // Editors often write a file several times per save.
    // Atomic saves replace the inode, so watch the directory instead of the file.
    let mut debouncer = new_debouncer(Duration::from_millis(300), tx)?;
    debouncer
        .watcher()
        .watch(&dir, RecursiveMode::NonRecursive)?;
    tracing::debug!("Watching: {:?}", dir);

    revalidate(&path);
    tracing::info!("Watching {:?} for changes. Press Ctrl+C to stop.", path);

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                if !touches_config(&path, events.iter().map(|e| e.path.as_path())) {
                    continue;
                }
                println!("\n📝 File changed: {}", path.display());
                revalidate(&path);
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Watch a config file and re-validate it on every change
pub async fn watch(path: &Path) -> Result<()> {
    if !path.is_file() {
        anyhow::bail!("Config file not found: {:?}", path);
    }
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || watch_blocking(path)).await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_watch_target_is_parent_dir() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("notes.yml");
        std::fs::write(&file, "").unwrap();

        let (path, dir) = watch_target(&file).unwrap();
        assert_eq!(dir, tmp.path().canonicalize().unwrap());
        assert_eq!(path, dir.join("notes.yml"));
    }

    #[test]
    fn test_only_config_events_count() {
        let dir = Path::new("/site");
        let config = dir.join("notes.yml");

        // A temp file written before the rename over the config
        let tmp = dir.join(".notes.yml.swp");
        assert!(!touches_config(&config, [tmp.as_path()]));
        assert!(touches_config(&config, [tmp.as_path(), config.as_path()]));
        assert!(!touches_config(&config, std::iter::empty()));
    }
}
