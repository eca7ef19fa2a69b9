//! Structural comparison of two pipeline configs

use serde_json::Value;
use std::fmt;

use crate::config::{ConfigError, PipelineConfig};

/// One differing leaf between two configs
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    /// Dotted path, with `[n]` for list positions
    pub path: String,
    /// Value on the left side, `None` if absent there
    pub left: Option<Value>,
    /// Value on the right side, `None` if absent there
    pub right: Option<Value>,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show(value: &Option<Value>) -> String {
            match value {
                Some(v) => v.to_string(),
                None => "<absent>".to_string(),
            }
        }
        write!(f, "{}: {} -> {}", self.path, show(&self.left), show(&self.right))
    }
}

/// Compare two configs field by field
///
/// Lists of records (plugin lists) are compared position by position, so a
/// reordering shows up as changes. Lists of plain values (ignore patterns,
/// date priorities) are compared as a whole.
pub fn diff(left: &PipelineConfig, right: &PipelineConfig) -> Result<Vec<Change>, ConfigError> {
    let left = serde_json::to_value(left)?;
    let right = serde_json::to_value(right)?;

    let mut changes = Vec::new();
    walk("", Some(&left), Some(&right), &mut changes);
    Ok(changes)
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn is_record_list(items: &[Value]) -> bool {
    items.iter().any(|v| v.is_object())
}

fn walk(path: &str, left: Option<&Value>, right: Option<&Value>, out: &mut Vec<Change>) {
    match (left, right) {
        (Some(Value::Object(l)), Some(Value::Object(r))) => {
            for (key, lv) in l {
                walk(&join(path, key), Some(lv), r.get(key), out);
            }
            for (key, rv) in r {
                if !l.contains_key(key) {
                    walk(&join(path, key), None, Some(rv), out);
                }
            }
        }
        (Some(Value::Array(l)), Some(Value::Array(r))) if is_record_list(l) || is_record_list(r) => {
            for idx in 0..l.len().max(r.len()) {
                walk(&format!("{}[{}]", path, idx), l.get(idx), r.get(idx), out);
            }
        }
        (l, r) if l != r => out.push(Change {
            path: path.to_string(),
            left: l.cloned(),
            right: r.cloned(),
        }),
        _ => {}
    }
}
