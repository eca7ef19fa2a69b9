//! Plugin pipeline declarations
//!
//! A pipeline is three ordered lists of plugin invocations. On disk each
//! invocation is a `name` plus an optional `options` record; in memory every
//! stage has its own typed enum so option records are checked at load time.
//! List order is the order the site generator runs the plugins in, and it is
//! kept exactly as written.

mod emitters;
mod filters;
mod transformers;

pub use emitters::{ContentIndexOptions, Emitter};
pub use filters::Filter;
pub use transformers::{
    CrawlLinksOptions, CreatedModifiedDateOptions, DateSource, DescriptionOptions,
    FrontMatterLanguage, FrontMatterOptions, GitHubFlavoredMarkdownOptions, HighlightTheme,
    LatexOptions, LinkResolution, ObsidianFlavoredMarkdownOptions, RenderEngine,
    SyntaxHighlightingOptions, TableOfContentsOptions, Transformer,
};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Pipeline stage a plugin belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Transformer,
    Filter,
    Emitter,
}

impl Stage {
    /// Key of the stage's list in the `plugins` record
    pub fn list_key(self) -> &'static str {
        match self {
            Stage::Transformer => "transformers",
            Stage::Filter => "filters",
            Stage::Emitter => "emitters",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Transformer => "transformer",
            Stage::Filter => "filter",
            Stage::Emitter => "emitter",
        };
        f.write_str(name)
    }
}

/// Errors raised while turning an invocation into a typed plugin
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("unknown {stage} plugin `{name}`")]
    Unknown { stage: Stage, name: String },

    #[error("invalid options for {stage} plugin `{name}`: {source}")]
    Options {
        stage: Stage,
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{stage} plugin `{name}` takes no options")]
    NoOptions { stage: Stage, name: String },
}

/// A plugin call as it appears in a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginInvocation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

impl PluginInvocation {
    /// An invocation without options
    pub fn bare(name: &str) -> Self {
        Self {
            name: name.to_string(),
            options: None,
        }
    }

    /// An invocation carrying a typed options record
    pub fn with_options<T: Serialize>(name: &str, options: &T) -> Self {
        Self {
            name: name.to_string(),
            options: Some(
                serde_json::to_value(options)
                    .expect("option records are plain structs with string keys and always serialize"),
            ),
        }
    }

    /// Decode the options record, falling back to defaults when absent
    pub(crate) fn options<T>(&self, stage: Stage) -> Result<T, PluginError>
    where
        T: DeserializeOwned + Default,
    {
        match &self.options {
            None | Some(serde_json::Value::Null) => Ok(T::default()),
            Some(value) => {
                serde_json::from_value(value.clone()).map_err(|source| PluginError::Options {
                    stage,
                    name: self.name.clone(),
                    source,
                })
            }
        }
    }

    /// Reject options on a plugin that has none
    pub(crate) fn no_options(&self, stage: Stage) -> Result<(), PluginError> {
        match &self.options {
            None | Some(serde_json::Value::Null) => Ok(()),
            Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(()),
            Some(_) => Err(PluginError::NoOptions {
                stage,
                name: self.name.clone(),
            }),
        }
    }

    pub(crate) fn unknown(&self, stage: Stage) -> PluginError {
        PluginError::Unknown {
            stage,
            name: self.name.clone(),
        }
    }
}

/// Common view over the typed plugin enums
pub trait Plugin {
    const STAGE: Stage;

    /// Constructor name of the plugin
    fn name(&self) -> &'static str;
}

/// The three ordered plugin lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginSet {
    pub transformers: Vec<Transformer>,
    pub filters: Vec<Filter>,
    pub emitters: Vec<Emitter>,
}

impl PluginSet {
    /// Names of every plugin, grouped by stage, in pipeline order
    pub fn names(&self) -> Vec<(Stage, &'static str)> {
        let mut names = Vec::new();
        names.extend(self.transformers.iter().map(|p| (Stage::Transformer, p.name())));
        names.extend(self.filters.iter().map(|p| (Stage::Filter, p.name())));
        names.extend(self.emitters.iter().map(|p| (Stage::Emitter, p.name())));
        names
    }

    /// Number of plugins in a stage
    pub fn len(&self, stage: Stage) -> usize {
        match stage {
            Stage::Transformer => self.transformers.len(),
            Stage::Filter => self.filters.len(),
            Stage::Emitter => self.emitters.len(),
        }
    }

    /// Options of the `CreatedModifiedDate` transformer, if present
    pub fn date_options(&self) -> Option<&CreatedModifiedDateOptions> {
        self.transformers.iter().find_map(|t| match t {
            Transformer::CreatedModifiedDate(opts) => Some(opts),
            _ => None,
        })
    }

    /// Options of the `SyntaxHighlighting` transformer, if present
    pub fn highlighting_options(&self) -> Option<&SyntaxHighlightingOptions> {
        self.transformers.iter().find_map(|t| match t {
            Transformer::SyntaxHighlighting(opts) => Some(opts),
            _ => None,
        })
    }

    /// Options of the `ContentIndex` emitter, if present
    pub fn content_index_options(&self) -> Option<&ContentIndexOptions> {
        self.emitters.iter().find_map(|e| match e {
            Emitter::ContentIndex(opts) => Some(opts),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIPELINE: &str = r#"
transformers:
  - name: FrontMatter
  - name: CreatedModifiedDate
    options:
      priority: [git, frontmatter, filesystem]
  - name: Latex
    options:
      renderEngine: mathjax
filters:
  - name: RemoveDrafts
emitters:
  - name: ContentPage
  - name: ContentIndex
    options:
      enableSiteMap: true
      enableRSS: false
"#;

    #[test]
    fn test_parse_pipeline() {
        let set: PluginSet = serde_yaml::from_str(PIPELINE).unwrap();
        assert_eq!(
            set.names(),
            vec![
                (Stage::Transformer, "FrontMatter"),
                (Stage::Transformer, "CreatedModifiedDate"),
                (Stage::Transformer, "Latex"),
                (Stage::Filter, "RemoveDrafts"),
                (Stage::Emitter, "ContentPage"),
                (Stage::Emitter, "ContentIndex"),
            ]
        );
        assert_eq!(
            set.date_options().unwrap().priority,
            vec![DateSource::Git, DateSource::Frontmatter, DateSource::Filesystem]
        );
        let index = set.content_index_options().unwrap();
        assert!(index.enable_site_map);
        assert!(!index.enable_rss);
        assert_eq!(index.rss_limit, 10);
        assert!(set.highlighting_options().is_none());
    }

    #[test]
    fn test_reversed_lists_load_reversed() {
        let set: PluginSet = serde_yaml::from_str(PIPELINE).unwrap();
        let mut reversed = set.clone();
        reversed.transformers.reverse();
        reversed.emitters.reverse();

        let yaml = serde_yaml::to_string(&reversed).unwrap();
        let reloaded: PluginSet = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(reloaded, reversed);
        assert_ne!(reloaded, set);
        assert_eq!(reloaded.transformers[0].name(), "Latex");
        assert_eq!(reloaded.emitters[0].name(), "ContentIndex");
    }

    #[test]
    fn test_unknown_plugin() {
        let yaml = "transformers:\n  - name: Mermaid\n";
        let err = serde_yaml::from_str::<PluginSet>(yaml).unwrap_err();
        assert!(err.to_string().contains("unknown transformer plugin `Mermaid`"));
    }

    #[test]
    fn test_plugin_in_wrong_stage() {
        let yaml = "filters:\n  - name: ContentPage\n";
        let err = serde_yaml::from_str::<PluginSet>(yaml).unwrap_err();
        assert!(err.to_string().contains("unknown filter plugin `ContentPage`"));
    }

    #[test]
    fn test_unknown_option() {
        let yaml = "transformers:\n  - name: Latex\n    options:\n      engine: katex\n";
        let err = serde_yaml::from_str::<PluginSet>(yaml).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid options for transformer plugin `Latex`"));
        assert!(message.contains("engine"));
    }

    #[test]
    fn test_options_on_bare_plugin() {
        let yaml = "emitters:\n  - name: Assets\n    options:\n      copy: true\n";
        let err = serde_yaml::from_str::<PluginSet>(yaml).unwrap_err();
        assert!(err.to_string().contains("emitter plugin `Assets` takes no options"));

        let yaml = "emitters:\n  - name: Assets\n    options: {}\n";
        assert!(serde_yaml::from_str::<PluginSet>(yaml).is_ok());
    }

    #[test]
    fn test_with_options_always_carries_options() {
        let opts = TableOfContentsOptions {
            max_depth: 4,
            ..Default::default()
        };
        let inv = PluginInvocation::with_options("TableOfContents", &opts);
        let value = inv.options.as_ref().unwrap();
        assert_eq!(value["maxDepth"], 4);

        let decoded: TableOfContentsOptions = inv.options(Stage::Transformer).unwrap();
        assert_eq!(decoded, opts);
    }

    #[test]
    fn test_bare_plugins_serialize_without_options() {
        let set = PluginSet {
            transformers: vec![Transformer::HardLineBreaks],
            filters: vec![Filter::RemoveDrafts],
            emitters: vec![Emitter::Static],
        };
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"{"transformers":[{"name":"HardLineBreaks"}],"filters":[{"name":"RemoveDrafts"}],"emitters":[{"name":"Static"}]}"#
        );
    }
}
