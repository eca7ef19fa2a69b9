//! Filter plugins

use serde::{Deserialize, Serialize};

use super::{Plugin, PluginError, PluginInvocation, Stage};

/// A filter step, dropping content items from the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PluginInvocation", into = "PluginInvocation")]
pub enum Filter {
    /// Drop notes marked `draft: true`
    RemoveDrafts,
    /// Keep only notes marked `publish: true`
    ExplicitPublish,
}

impl Plugin for Filter {
    const STAGE: Stage = Stage::Filter;

    fn name(&self) -> &'static str {
        match self {
            Filter::RemoveDrafts => "RemoveDrafts",
            Filter::ExplicitPublish => "ExplicitPublish",
        }
    }
}

impl TryFrom<PluginInvocation> for Filter {
    type Error = PluginError;

    fn try_from(inv: PluginInvocation) -> Result<Self, Self::Error> {
        let plugin = match inv.name.as_str() {
            "RemoveDrafts" => Filter::RemoveDrafts,
            "ExplicitPublish" => Filter::ExplicitPublish,
            _ => return Err(inv.unknown(Self::STAGE)),
        };
        inv.no_options(Self::STAGE)?;
        Ok(plugin)
    }
}

impl From<Filter> for PluginInvocation {
    fn from(plugin: Filter) -> Self {
        PluginInvocation::bare(plugin.name())
    }
}
