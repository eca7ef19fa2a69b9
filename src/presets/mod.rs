//! Built-in configurations
//!
//! The three presets are successive revisions of the same notes site. They
//! share metadata, fonts, the light palette and the plugin lists, and differ
//! only in date handling, the dark palette and highlighter backgrounds.

mod palettes;

pub use palettes::{
    catppuccin_latte, catppuccin_mocha_frappe, gruvbox_material_hard_dark, tango_dark,
};

use indexmap::IndexSet;
use std::fmt;
use std::str::FromStr;

use crate::config::{Analytics, DateType, PipelineConfig, SiteConfig};
use crate::plugins::{
    ContentIndexOptions, CrawlLinksOptions, CreatedModifiedDateOptions, DateSource,
    DescriptionOptions, Emitter, Filter, FrontMatterOptions, GitHubFlavoredMarkdownOptions,
    LatexOptions, LinkResolution, ObsidianFlavoredMarkdownOptions, PluginSet, RenderEngine,
    SyntaxHighlightingOptions, TableOfContentsOptions, Transformer,
};
use crate::theme::{Colors, FontOrigin, Palette, Theme, Typography};

/// A built-in configuration variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Catppuccin Mocha/Frappé dark mode, dates by creation
    Catppuccin,
    /// Gruvbox Material hard dark mode, dates by modification with git first
    Gruvbox,
    /// Tango dark mode, highlighter keeps its own background
    Tango,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Catppuccin, Preset::Gruvbox, Preset::Tango];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Catppuccin => "catppuccin",
            Preset::Gruvbox => "gruvbox",
            Preset::Tango => "tango",
        }
    }

    /// Human-readable name of the dark palette
    pub fn dark_palette_name(self) -> &'static str {
        match self {
            Preset::Catppuccin => "Catppuccin Mocha/Frappé",
            Preset::Gruvbox => "Gruvbox Material Hard Dark",
            Preset::Tango => "Tango Dark",
        }
    }

    fn default_date_type(self) -> DateType {
        match self {
            Preset::Catppuccin => DateType::Created,
            Preset::Gruvbox | Preset::Tango => DateType::Modified,
        }
    }

    fn date_priority(self) -> Vec<DateSource> {
        match self {
            Preset::Catppuccin => vec![DateSource::Frontmatter, DateSource::Filesystem],
            Preset::Gruvbox | Preset::Tango => vec![
                DateSource::Git,
                DateSource::Frontmatter,
                DateSource::Filesystem,
            ],
        }
    }

    fn dark_palette(self) -> Palette {
        match self {
            Preset::Catppuccin => catppuccin_mocha_frappe(),
            Preset::Gruvbox => gruvbox_material_hard_dark(),
            Preset::Tango => tango_dark(),
        }
    }

    fn keep_background(self) -> bool {
        matches!(self, Preset::Tango)
    }

    /// Build the full configuration for this preset
    pub fn config(self) -> PipelineConfig {
        PipelineConfig {
            configuration: self.site(),
            plugins: self.plugins(),
        }
    }

    fn site(self) -> SiteConfig {
        let ignore_patterns: IndexSet<String> = ["private", "templates", ".obsidian"]
            .iter()
            .map(|p| p.to_string())
            .collect();

        SiteConfig {
            page_title: "Emin's Notes".to_string(),
            page_title_suffix: String::new(),
            enable_spa: true,
            enable_popovers: true,
            analytics: Some(Analytics::Plausible { host: None }),
            locale: "en-US".to_string(),
            base_url: Some("notes.xeome.dev".to_string()),
            ignore_patterns,
            default_date_type: self.default_date_type(),
            theme: Theme {
                font_origin: FontOrigin::GoogleFonts,
                cdn_caching: true,
                typography: Typography {
                    header: "Archivo".to_string(),
                    body: "Noto Sans".to_string(),
                    code: "JetBrains Mono".to_string(),
                },
                colors: Colors {
                    light_mode: catppuccin_latte(),
                    dark_mode: self.dark_palette(),
                },
            },
        }
    }

    fn plugins(self) -> PluginSet {
        PluginSet {
            transformers: vec![
                Transformer::FrontMatter(FrontMatterOptions::default()),
                Transformer::CreatedModifiedDate(CreatedModifiedDateOptions {
                    priority: self.date_priority(),
                }),
                Transformer::SyntaxHighlighting(SyntaxHighlightingOptions {
                    keep_background: self.keep_background(),
                    ..Default::default()
                }),
                Transformer::ObsidianFlavoredMarkdown(ObsidianFlavoredMarkdownOptions {
                    enable_in_html_embed: false,
                    ..Default::default()
                }),
                Transformer::GitHubFlavoredMarkdown(GitHubFlavoredMarkdownOptions::default()),
                Transformer::TableOfContents(TableOfContentsOptions::default()),
                Transformer::CrawlLinks(CrawlLinksOptions {
                    markdown_link_resolution: LinkResolution::Shortest,
                    ..Default::default()
                }),
                Transformer::Description(DescriptionOptions::default()),
                Transformer::Latex(LatexOptions {
                    render_engine: RenderEngine::Katex,
                }),
            ],
            filters: vec![Filter::RemoveDrafts],
            emitters: vec![
                Emitter::AliasRedirects,
                Emitter::ComponentResources,
                Emitter::ContentPage,
                Emitter::FolderPage,
                Emitter::TagPage,
                Emitter::ContentIndex(ContentIndexOptions {
                    enable_site_map: true,
                    enable_rss: true,
                    ..Default::default()
                }),
                Emitter::Assets,
                Emitter::Static,
                Emitter::NotFoundPage,
            ],
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<_> = Preset::ALL.iter().map(|p| p.name()).collect();
                format!("unknown preset `{}`. Available: {}", s, names.join(", "))
            })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
