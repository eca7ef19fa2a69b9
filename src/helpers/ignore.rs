//! Matching content paths against `ignorePatterns`

use anyhow::Result;
use glob::{MatchOptions, Pattern, PatternError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::SiteConfig;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Compiled ignore patterns
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    patterns: Vec<Pattern>,
}

impl IgnoreMatcher {
    /// Compile a list of glob patterns
    pub fn new<'a, I>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Pattern::new(p.trim_end_matches('/')))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Compile the patterns of a site config
    pub fn from_config(config: &SiteConfig) -> Result<Self, PatternError> {
        Self::new(&config.ignore_patterns)
    }

    /// Whether a path relative to the content root is excluded
    ///
    /// A path is excluded when a pattern matches it or any of its parent
    /// directories, so `private` drops everything below `private/`.
    pub fn is_ignored<P: AsRef<Path>>(&self, relative: P) -> bool {
        let mut prefix = PathBuf::new();
        for component in relative.as_ref().components() {
            prefix.push(component);
            if self
                .patterns
                .iter()
                .any(|p| p.matches_path_with(&prefix, MATCH_OPTIONS))
            {
                return true;
            }
        }
        false
    }

    /// Walk a content directory and return the files that are kept
    ///
    /// Paths are relative to `root` and sorted. Ignored directories are not
    /// descended into.
    pub fn content_files<P: AsRef<Path>>(&self, root: P) -> Result<Vec<PathBuf>> {
        let root = root.as_ref();
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| match entry.path().strip_prefix(root) {
                Ok(relative) => relative.as_os_str().is_empty() || !self.is_ignored(relative),
                Err(_) => true,
            });

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.path().strip_prefix(root)?.to_path_buf());
            }
        }

        tracing::debug!("Found {} content files in {:?}", files.len(), root);
        Ok(files)
    }
}
