//! List content files that survive the ignore patterns

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::helpers::IgnoreMatcher;
use crate::Project;

/// Collect content files, resolving a relative `content_dir` against the config's directory
pub fn content_files(project: &Project, content_dir: &Path) -> Result<Vec<PathBuf>> {
    let content_dir = if content_dir.is_absolute() {
        content_dir.to_path_buf()
    } else {
        project.base_dir.join(content_dir)
    };

    if !content_dir.is_dir() {
        anyhow::bail!("Content directory not found: {:?}", content_dir);
    }

    let matcher = IgnoreMatcher::from_config(&project.config.configuration)?;
    matcher.content_files(&content_dir)
}

/// Print the kept content files
pub fn run(project: &Project, content_dir: &Path) -> Result<()> {
    let files = content_files(project, content_dir)?;
    println!("Content files ({}):", files.len());
    for file in files {
        println!("  {}", file.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Preset;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_content_files_relative_to_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("notes.yml");
        Preset::Catppuccin.config().save(&config_path).unwrap();

        for file in ["content/index.md", "content/private/todo.md", "content/templates/t.md"] {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }

        let project = Project::open(&config_path).unwrap();
        let files = project.content_files("content").unwrap();
        assert_eq!(files, vec![PathBuf::from("index.md")]);

        assert!(project.content_files("missing").is_err());
    }
}
