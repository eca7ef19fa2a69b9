//! Emitter plugins

use serde::{Deserialize, Serialize};

use super::{Plugin, PluginError, PluginInvocation, Stage};

/// Content index, sitemap and RSS output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentIndexOptions {
    pub enable_site_map: bool,
    #[serde(rename = "enableRSS")]
    pub enable_rss: bool,
    /// Maximum number of items in the feed
    pub rss_limit: usize,
    pub rss_full_html: bool,
    pub include_empty_files: bool,
}

impl Default for ContentIndexOptions {
    fn default() -> Self {
        Self {
            enable_site_map: true,
            enable_rss: true,
            rss_limit: 10,
            rss_full_html: false,
            include_empty_files: true,
        }
    }
}

/// An emitter step, writing output artifacts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PluginInvocation", into = "PluginInvocation")]
pub enum Emitter {
    AliasRedirects,
    ComponentResources,
    ContentPage,
    FolderPage,
    TagPage,
    ContentIndex(ContentIndexOptions),
    Assets,
    Static,
    NotFoundPage,
    #[allow(clippy::upper_case_acronyms)]
    CNAME,
}

impl Emitter {
    /// Whether the emitter writes files that embed absolute site URLs
    pub fn needs_base_url(&self) -> bool {
        match self {
            Emitter::ContentIndex(opts) => opts.enable_site_map || opts.enable_rss,
            Emitter::CNAME => true,
            _ => false,
        }
    }
}

impl Plugin for Emitter {
    const STAGE: Stage = Stage::Emitter;

    fn name(&self) -> &'static str {
        match self {
            Emitter::AliasRedirects => "AliasRedirects",
            Emitter::ComponentResources => "ComponentResources",
            Emitter::ContentPage => "ContentPage",
            Emitter::FolderPage => "FolderPage",
            Emitter::TagPage => "TagPage",
            Emitter::ContentIndex(_) => "ContentIndex",
            Emitter::Assets => "Assets",
            Emitter::Static => "Static",
            Emitter::NotFoundPage => "NotFoundPage",
            Emitter::CNAME => "CNAME",
        }
    }
}

impl TryFrom<PluginInvocation> for Emitter {
    type Error = PluginError;

    fn try_from(inv: PluginInvocation) -> Result<Self, Self::Error> {
        let stage = Self::STAGE;
        let plugin = match inv.name.as_str() {
            "ContentIndex" => return Ok(Emitter::ContentIndex(inv.options(stage)?)),
            "AliasRedirects" => Emitter::AliasRedirects,
            "ComponentResources" => Emitter::ComponentResources,
            "ContentPage" => Emitter::ContentPage,
            "FolderPage" => Emitter::FolderPage,
            "TagPage" => Emitter::TagPage,
            "Assets" => Emitter::Assets,
            "Static" => Emitter::Static,
            "NotFoundPage" => Emitter::NotFoundPage,
            "CNAME" => Emitter::CNAME,
            _ => return Err(inv.unknown(stage)),
        };
        inv.no_options(stage)?;
        Ok(plugin)
    }
}

impl From<Emitter> for PluginInvocation {
    fn from(plugin: Emitter) -> Self {
        match &plugin {
            Emitter::ContentIndex(opts) => PluginInvocation::with_options(plugin.name(), opts),
            _ => PluginInvocation::bare(plugin.name()),
        }
    }
}
