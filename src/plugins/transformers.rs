//! Transformer plugins and their option records

use serde::{Deserialize, Serialize};

use super::{Plugin, PluginError, PluginInvocation, Stage};

/// Frontmatter syntax
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontMatterLanguage {
    #[default]
    Yaml,
    Toml,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FrontMatterOptions {
    pub delimiters: String,
    pub language: FrontMatterLanguage,
}

impl Default for FrontMatterOptions {
    fn default() -> Self {
        Self {
            delimiters: "---".to_string(),
            language: FrontMatterLanguage::Yaml,
        }
    }
}

/// Where a note's created/modified dates may come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateSource {
    Frontmatter,
    Git,
    Filesystem,
}

impl DateSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DateSource::Frontmatter => "frontmatter",
            DateSource::Git => "git",
            DateSource::Filesystem => "filesystem",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatedModifiedDateOptions {
    /// Sources tried in order; the first that yields a date wins
    pub priority: Vec<DateSource>,
}

impl Default for CreatedModifiedDateOptions {
    fn default() -> Self {
        Self {
            priority: vec![DateSource::Frontmatter, DateSource::Filesystem],
        }
    }
}

/// Highlighter theme names for each display mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HighlightTheme {
    pub light: String,
    pub dark: String,
}

impl Default for HighlightTheme {
    fn default() -> Self {
        Self {
            light: "github-light".to_string(),
            dark: "github-dark".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SyntaxHighlightingOptions {
    pub theme: HighlightTheme,
    /// Keep the highlighter theme's own background color
    pub keep_background: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ObsidianFlavoredMarkdownOptions {
    pub comments: bool,
    pub highlight: bool,
    pub wikilinks: bool,
    pub callouts: bool,
    pub mermaid: bool,
    pub parse_tags: bool,
    pub parse_arrows: bool,
    pub parse_block_references: bool,
    pub enable_in_html_embed: bool,
    #[serde(rename = "enableYouTubeEmbed")]
    pub enable_youtube_embed: bool,
    pub enable_video_embed: bool,
    pub enable_checkbox: bool,
}

impl Default for ObsidianFlavoredMarkdownOptions {
    fn default() -> Self {
        Self {
            comments: true,
            highlight: true,
            wikilinks: true,
            callouts: true,
            mermaid: true,
            parse_tags: true,
            parse_arrows: true,
            parse_block_references: true,
            enable_in_html_embed: false,
            enable_youtube_embed: true,
            enable_video_embed: true,
            enable_checkbox: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GitHubFlavoredMarkdownOptions {
    pub enable_smarty_pants: bool,
    pub link_headings: bool,
}

impl Default for GitHubFlavoredMarkdownOptions {
    fn default() -> Self {
        Self {
            enable_smarty_pants: true,
            link_headings: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TableOfContentsOptions {
    /// Deepest heading level included, 1-6
    pub max_depth: u8,
    pub min_entries: u32,
    pub show_by_default: bool,
    pub collapse_by_default: bool,
}

impl Default for TableOfContentsOptions {
    fn default() -> Self {
        Self {
            max_depth: 3,
            min_entries: 1,
            show_by_default: true,
            collapse_by_default: false,
        }
    }
}

/// How wiki-style links are resolved to pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkResolution {
    #[default]
    Absolute,
    Relative,
    Shortest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CrawlLinksOptions {
    pub markdown_link_resolution: LinkResolution,
    pub pretty_links: bool,
    pub open_links_in_new_tab: bool,
    pub lazy_load: bool,
    pub external_link_icon: bool,
}

impl Default for CrawlLinksOptions {
    fn default() -> Self {
        Self {
            markdown_link_resolution: LinkResolution::Absolute,
            pretty_links: true,
            open_links_in_new_tab: false,
            lazy_load: false,
            external_link_icon: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DescriptionOptions {
    pub description_length: usize,
    pub replace_external_links: bool,
}

impl Default for DescriptionOptions {
    fn default() -> Self {
        Self {
            description_length: 150,
            replace_external_links: true,
        }
    }
}

/// Math renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderEngine {
    #[default]
    Katex,
    Mathjax,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LatexOptions {
    pub render_engine: RenderEngine,
}

/// A transformer step, applied to parsed content before emission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PluginInvocation", into = "PluginInvocation")]
pub enum Transformer {
    FrontMatter(FrontMatterOptions),
    CreatedModifiedDate(CreatedModifiedDateOptions),
    SyntaxHighlighting(SyntaxHighlightingOptions),
    ObsidianFlavoredMarkdown(ObsidianFlavoredMarkdownOptions),
    GitHubFlavoredMarkdown(GitHubFlavoredMarkdownOptions),
    TableOfContents(TableOfContentsOptions),
    CrawlLinks(CrawlLinksOptions),
    Description(DescriptionOptions),
    Latex(LatexOptions),
    HardLineBreaks,
    OxHugoFlavoredMarkdown,
}

impl Plugin for Transformer {
    const STAGE: Stage = Stage::Transformer;

    fn name(&self) -> &'static str {
        match self {
            Transformer::FrontMatter(_) => "FrontMatter",
            Transformer::CreatedModifiedDate(_) => "CreatedModifiedDate",
            Transformer::SyntaxHighlighting(_) => "SyntaxHighlighting",
            Transformer::ObsidianFlavoredMarkdown(_) => "ObsidianFlavoredMarkdown",
            Transformer::GitHubFlavoredMarkdown(_) => "GitHubFlavoredMarkdown",
            Transformer::TableOfContents(_) => "TableOfContents",
            Transformer::CrawlLinks(_) => "CrawlLinks",
            Transformer::Description(_) => "Description",
            Transformer::Latex(_) => "Latex",
            Transformer::HardLineBreaks => "HardLineBreaks",
            Transformer::OxHugoFlavoredMarkdown => "OxHugoFlavoredMarkdown",
        }
    }
}

impl TryFrom<PluginInvocation> for Transformer {
    type Error = PluginError;

    fn try_from(inv: PluginInvocation) -> Result<Self, Self::Error> {
        let stage = Self::STAGE;
        let plugin = match inv.name.as_str() {
            "FrontMatter" => Transformer::FrontMatter(inv.options(stage)?),
            "CreatedModifiedDate" => Transformer::CreatedModifiedDate(inv.options(stage)?),
            "SyntaxHighlighting" => Transformer::SyntaxHighlighting(inv.options(stage)?),
            "ObsidianFlavoredMarkdown" => {
                Transformer::ObsidianFlavoredMarkdown(inv.options(stage)?)
            }
            "GitHubFlavoredMarkdown" => Transformer::GitHubFlavoredMarkdown(inv.options(stage)?),
            "TableOfContents" => Transformer::TableOfContents(inv.options(stage)?),
            "CrawlLinks" => Transformer::CrawlLinks(inv.options(stage)?),
            "Description" => Transformer::Description(inv.options(stage)?),
            "Latex" => Transformer::Latex(inv.options(stage)?),
            "HardLineBreaks" => {
                inv.no_options(stage)?;
                Transformer::HardLineBreaks
            }
            "OxHugoFlavoredMarkdown" => {
                inv.no_options(stage)?;
                Transformer::OxHugoFlavoredMarkdown
            }
            _ => return Err(inv.unknown(stage)),
        };
        Ok(plugin)
    }
}

impl From<Transformer> for PluginInvocation {
    fn from(plugin: Transformer) -> Self {
        let name = plugin.name();
        match &plugin {
            Transformer::FrontMatter(opts) => PluginInvocation::with_options(name, opts),
            Transformer::CreatedModifiedDate(opts) => PluginInvocation::with_options(name, opts),
            Transformer::SyntaxHighlighting(opts) => PluginInvocation::with_options(name, opts),
            Transformer::ObsidianFlavoredMarkdown(opts) => {
                PluginInvocation::with_options(name, opts)
            }
            Transformer::GitHubFlavoredMarkdown(opts) => {
                PluginInvocation::with_options(name, opts)
            }
            Transformer::TableOfContents(opts) => PluginInvocation::with_options(name, opts),
            Transformer::CrawlLinks(opts) => PluginInvocation::with_options(name, opts),
            Transformer::Description(opts) => PluginInvocation::with_options(name, opts),
            Transformer::Latex(opts) => PluginInvocation::with_options(name, opts),
            Transformer::HardLineBreaks | Transformer::OxHugoFlavoredMarkdown => {
                PluginInvocation::bare(name)
            }
        }
    }
}
