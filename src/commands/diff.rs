//! Compare two configs

use anyhow::Result;

use super::resolve_config;
use crate::diff::{self, Change};

/// Diff two config sources (file paths or `preset:<name>`)
pub fn changes(left: &str, right: &str) -> Result<Vec<Change>> {
    let left = resolve_config(left)?;
    let right = resolve_config(right)?;
    Ok(diff::diff(&left, &right)?)
}

/// Print the differences between two configs
pub fn run(left: &str, right: &str) -> Result<()> {
    let changes = changes(left, right)?;
    if changes.is_empty() {
        println!("No differences");
        return Ok(());
    }

    println!("{} difference(s):", changes.len());
    for change in &changes {
        println!("  {}", change);
    }
    Ok(())
}
