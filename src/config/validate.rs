//! Semantic checks that serde alone cannot express

use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use super::{ConfigError, DateType, PipelineConfig};
use crate::plugins::{DateSource, Emitter, Plugin, Stage, Transformer};
use crate::theme::ColorRole;

lazy_static! {
    static ref LOCALE_RE: Regex = Regex::new(r"^[a-z]{2,3}(-[A-Z]{2})?$").unwrap();
}

/// A single finding, located by a dotted path into the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Outcome of validating a config
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Problems that make the config unusable
    pub errors: Vec<Issue>,
    /// Suspicious but loadable settings
    pub warnings: Vec<Issue>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(Issue::new(path, message));
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Issue::new(path, message));
    }

    /// Turn errors into a [`ConfigError::Validation`], passing warnings through
    pub fn into_result(self) -> Result<Vec<Issue>, ConfigError> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(ConfigError::Validation(self.errors))
        }
    }
}

/// Run every check against a config
pub fn validate(config: &PipelineConfig) -> Report {
    let mut report = Report::default();
    check_site(config, &mut report);
    check_plugins(config, &mut report);

    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }
    report
}

fn check_site(config: &PipelineConfig, report: &mut Report) {
    let site = &config.configuration;

    if site.page_title.trim().is_empty() {
        report.error("configuration.pageTitle", "must not be empty");
    }

    if !LOCALE_RE.is_match(&site.locale) {
        report.error(
            "configuration.locale",
            format!("`{}` is not a locale like `en-US`", site.locale),
        );
    }

    match site.base_url.as_deref() {
        Some(url) => check_base_url(url, report),
        None => {
            if let Some(emitter) = config.plugins.emitters.iter().find(|e| e.needs_base_url()) {
                report.warn(
                    "configuration.baseUrl",
                    format!(
                        "not set, but the {} emitter writes absolute URLs",
                        emitter.name()
                    ),
                );
            }
        }
    }

    for (idx, pattern) in site.ignore_patterns.iter().enumerate() {
        if let Err(e) = glob::Pattern::new(pattern) {
            report.error(
                format!("configuration.ignorePatterns[{}]", idx),
                format!("invalid glob `{}`: {}", pattern, e),
            );
        }
    }

    let typography = &site.theme.typography;
    for (key, font) in [
        ("header", &typography.header),
        ("body", &typography.body),
        ("code", &typography.code),
    ] {
        if font.trim().is_empty() {
            report.error(
                format!("configuration.theme.typography.{}", key),
                "font name must not be empty",
            );
        }
    }

    // Highlights are painted over text
    for (mode, palette) in [
        ("lightMode", &site.theme.colors.light_mode),
        ("darkMode", &site.theme.colors.dark_mode),
    ] {
        for role in [ColorRole::Highlight, ColorRole::TextHighlight] {
            let color = palette.get(role);
            if !color.has_alpha() {
                report.warn(
                    format!("configuration.theme.colors.{}.{}", mode, role.key()),
                    format!("`{}` is opaque and will hide the text it highlights", color),
                );
            }
        }
    }
}

fn check_base_url(url: &str, report: &mut Report) {
    let path = "configuration.baseUrl";
    if url.is_empty() {
        report.error(path, "must not be empty when set");
    } else if url.contains("://") {
        report.error(path, format!("`{}` must not include a scheme", url));
    } else if url.ends_with('/') {
        report.error(path, format!("`{}` must not end with a slash", url));
    } else if url.chars().any(char::is_whitespace) {
        report.error(path, format!("`{}` must not contain whitespace", url));
    }
}

fn check_plugins(config: &PipelineConfig, report: &mut Report) {
    let plugins = &config.plugins;

    for stage in [Stage::Transformer, Stage::Filter, Stage::Emitter] {
        if plugins.len(stage) == 0 {
            report.error(
                format!("plugins.{}", stage.list_key()),
                "must list at least one plugin",
            );
        }
    }

    check_duplicates(&plugins.transformers, report);
    check_duplicates(&plugins.filters, report);
    check_duplicates(&plugins.emitters, report);

    for (idx, transformer) in plugins.transformers.iter().enumerate() {
        let path = format!("plugins.transformers[{}]", idx);
        match transformer {
            Transformer::FrontMatter(_) if idx != 0 => {
                report.warn(
                    path,
                    "FrontMatter runs after other transformers, which then cannot see frontmatter fields",
                );
            }
            Transformer::CreatedModifiedDate(opts) => {
                if opts.priority.is_empty() {
                    report.error(format!("{}.options.priority", path), "must not be empty");
                }
                let mut seen = IndexSet::new();
                for source in &opts.priority {
                    if !seen.insert(*source) {
                        report.error(
                            format!("{}.options.priority", path),
                            format!("`{}` is listed more than once", source.as_str()),
                        );
                    }
                }
                if config.configuration.default_date_type == DateType::Created
                    && opts.priority.contains(&DateSource::Git)
                {
                    report.warn(
                        format!("{}.options.priority", path),
                        "git only records when a note was last committed, but pages show the created date",
                    );
                }
                if config.configuration.default_date_type == DateType::Published
                    && !opts.priority.contains(&DateSource::Frontmatter)
                {
                    report.warn(
                        format!("{}.options.priority", path),
                        "published dates only come from frontmatter, which is not in the priority list",
                    );
                }
            }
            Transformer::TableOfContents(opts) if !(1..=6).contains(&opts.max_depth) => {
                report.error(
                    format!("{}.options.maxDepth", path),
                    format!("{} is outside the heading range 1-6", opts.max_depth),
                );
            }
            Transformer::Description(opts) if opts.description_length == 0 => {
                report.error(
                    format!("{}.options.descriptionLength", path),
                    "must be greater than zero",
                );
            }
            _ => {}
        }
    }

    if !plugins.emitters.is_empty() && !plugins.emitters.contains(&Emitter::ContentPage) {
        report.warn(
            "plugins.emitters",
            "no ContentPage emitter, so no note pages will be written",
        );
    }
}

fn check_duplicates<P: Plugin>(list: &[P], report: &mut Report) {
    let mut seen = IndexSet::new();
    for (idx, plugin) in list.iter().enumerate() {
        if !seen.insert(plugin.name()) {
            report.warn(
                format!("plugins.{}[{}]", P::STAGE.list_key(), idx),
                format!("{} is listed more than once", plugin.name()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::{
        CreatedModifiedDateOptions, DescriptionOptions, Filter, FrontMatterOptions,
        TableOfContentsOptions,
    };
    use crate::presets::Preset;
    use crate::theme::Color;

    fn base() -> PipelineConfig {
        Preset::Catppuccin.config()
    }

    fn paths(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|i| i.path.as_str()).collect()
    }

    #[test]
    fn test_presets_are_clean() {
        for preset in Preset::ALL {
            let report = validate(&preset.config());
            assert!(report.errors.is_empty(), "{:?}", report.errors);
            assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        }
    }

    #[test]
    fn test_empty_title() {
        let mut config = base();
        config.configuration.page_title = "   ".to_string();
        let report = validate(&config);
        assert_eq!(paths(&report.errors), vec!["configuration.pageTitle"]);
    }

    #[test]
    fn test_base_url_shape() {
        for bad in ["https://notes.xeome.dev", "notes.xeome.dev/", "notes xeome", ""] {
            let mut config = base();
            config.configuration.base_url = Some(bad.to_string());
            let report = validate(&config);
            assert_eq!(paths(&report.errors), vec!["configuration.baseUrl"], "{}", bad);
        }

        let mut config = base();
        config.configuration.base_url = Some("example.org/notes".to_string());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_missing_base_url_warns() {
        let mut config = base();
        config.configuration.base_url = None;
        let report = validate(&config);
        assert!(report.is_ok());
        assert_eq!(paths(&report.warnings), vec!["configuration.baseUrl"]);
        assert!(report.warnings[0].message.contains("ContentIndex"));
    }

    #[test]
    fn test_bad_locale_and_glob() {
        let mut config = base();
        config.configuration.locale = "english".to_string();
        config.configuration.ignore_patterns.insert("drafts/[".to_string());
        let report = validate(&config);
        assert_eq!(
            paths(&report.errors),
            vec!["configuration.locale", "configuration.ignorePatterns[3]"]
        );
    }

    #[test]
    fn test_opaque_highlight_warns() {
        let mut config = base();
        config.configuration.theme.colors.dark_mode.text_highlight =
            Color::parse("#b3aa02").unwrap();
        config.configuration.theme.colors.light_mode.highlight =
            Color::parse("rgb(143, 159, 169)").unwrap();

        let report = validate(&config);
        assert!(report.is_ok());
        assert_eq!(
            paths(&report.warnings),
            vec![
                "configuration.theme.colors.lightMode.highlight",
                "configuration.theme.colors.darkMode.textHighlight"
            ]
        );
    }

    #[test]
    fn test_empty_stage() {
        let mut config = base();
        config.plugins.filters.clear();
        let err = validate(&config).into_result().unwrap_err();
        assert!(err.to_string().contains("plugins.filters: must list at least one plugin"));
    }

    #[test]
    fn test_date_priority_checks() {
        let mut config = base();
        config.plugins.transformers[1] =
            Transformer::CreatedModifiedDate(CreatedModifiedDateOptions { priority: vec![] });
        let report = validate(&config);
        assert_eq!(
            paths(&report.errors),
            vec!["plugins.transformers[1].options.priority"]
        );

        config.plugins.transformers[1] =
            Transformer::CreatedModifiedDate(CreatedModifiedDateOptions {
                priority: vec![DateSource::Git, DateSource::Git],
            });
        let report = validate(&config);
        assert!(report.errors[0].message.contains("`git` is listed more than once"));

        config.configuration.default_date_type = DateType::Published;
        config.plugins.transformers[1] =
            Transformer::CreatedModifiedDate(CreatedModifiedDateOptions {
                priority: vec![DateSource::Git, DateSource::Filesystem],
            });
        let report = validate(&config);
        assert!(report.is_ok());
        assert_eq!(
            paths(&report.warnings),
            vec!["plugins.transformers[1].options.priority"]
        );
    }

    #[test]
    fn test_git_priority_with_created_dates_warns() {
        let mut config = base();
        assert_eq!(config.configuration.default_date_type, DateType::Created);
        config.plugins.transformers[1] =
            Transformer::CreatedModifiedDate(CreatedModifiedDateOptions {
                priority: vec![DateSource::Git, DateSource::Frontmatter, DateSource::Filesystem],
            });

        let report = validate(&config);
        assert!(report.is_ok());
        assert_eq!(
            paths(&report.warnings),
            vec!["plugins.transformers[1].options.priority"]
        );
        assert!(report.warnings[0].message.contains("created date"));

        config.configuration.default_date_type = DateType::Modified;
        assert!(validate(&config).warnings.is_empty());
    }

    #[test]
    fn test_option_ranges() {
        let mut config = base();
        config.plugins.transformers[5] = Transformer::TableOfContents(TableOfContentsOptions {
            max_depth: 7,
            ..Default::default()
        });
        config.plugins.transformers[7] = Transformer::Description(DescriptionOptions {
            description_length: 0,
            ..Default::default()
        });
        let report = validate(&config);
        assert_eq!(
            paths(&report.errors),
            vec![
                "plugins.transformers[5].options.maxDepth",
                "plugins.transformers[7].options.descriptionLength"
            ]
        );
    }

    #[test]
    fn test_ordering_and_duplicate_warnings() {
        let mut config = base();
        config.plugins.transformers.remove(0);
        config
            .plugins
            .transformers
            .push(Transformer::FrontMatter(FrontMatterOptions::default()));
        config.plugins.filters.push(Filter::RemoveDrafts);
        config.plugins.emitters.retain(|e| *e != Emitter::ContentPage);

        let report = validate(&config);
        assert!(report.is_ok());
        assert_eq!(
            paths(&report.warnings),
            vec!["plugins.filters[1]", "plugins.transformers[8]", "plugins.emitters"]
        );
    }
}
