//! Site configuration (the `configuration` record)

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::theme::Theme;

/// Which date a page shows by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateType {
    #[default]
    Created,
    Modified,
    Published,
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateType::Created => "created",
            DateType::Modified => "modified",
            DateType::Published => "published",
        };
        f.write_str(name)
    }
}

/// Analytics provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum Analytics {
    Plausible {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        host: Option<String>,
    },
    Google {
        #[serde(rename = "tagId")]
        tag_id: String,
    },
    Umami {
        #[serde(rename = "websiteId")]
        website_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        host: Option<String>,
    },
    #[serde(rename = "goatcounter")]
    GoatCounter {
        #[serde(rename = "websiteId")]
        website_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        host: Option<String>,
        #[serde(
            rename = "scriptSrc",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        script_src: Option<String>,
    },
    Cabin {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        host: Option<String>,
    },
}

impl Analytics {
    /// Provider name as written in config files
    pub fn provider(&self) -> &'static str {
        match self {
            Analytics::Plausible { .. } => "plausible",
            Analytics::Google { .. } => "google",
            Analytics::Umami { .. } => "umami",
            Analytics::GoatCounter { .. } => "goatcounter",
            Analytics::Cabin { .. } => "cabin",
        }
    }

    /// Host the tracking script is loaded from
    pub fn host(&self) -> Option<&str> {
        match self {
            Analytics::Plausible { host } => {
                Some(host.as_deref().unwrap_or("https://plausible.io"))
            }
            Analytics::Google { .. } => Some("https://www.googletagmanager.com"),
            Analytics::Umami { host, .. } => {
                Some(host.as_deref().unwrap_or("https://analytics.umami.is"))
            }
            Analytics::GoatCounter { host, .. } => host.as_deref(),
            Analytics::Cabin { host } => Some(host.as_deref().unwrap_or("https://scripts.withcabin.com")),
        }
    }
}

/// Site-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    // Site
    pub page_title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page_title_suffix: String,
    #[serde(rename = "enableSPA", default = "default_true")]
    pub enable_spa: bool,
    #[serde(default = "default_true")]
    pub enable_popovers: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
    #[serde(default = "default_locale")]
    pub locale: String,

    // URL
    /// Host and optional path, without scheme or trailing slash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    // Content
    #[serde(default)]
    pub ignore_patterns: IndexSet<String>,
    #[serde(default)]
    pub default_date_type: DateType,

    // Appearance
    pub theme: Theme,
}

fn default_true() -> bool {
    true
}

fn default_locale() -> String {
    "en-US".to_string()
}

impl SiteConfig {
    /// Provider name of the configured analytics, if any
    pub fn analytics_provider(&self) -> Option<&'static str> {
        self.analytics.as_ref().map(Analytics::provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = r##"
pageTitle: My Notes
analytics:
  provider: plausible
baseUrl: notes.example.org
ignorePatterns: [private, templates, private]
defaultDateType: modified
theme:
  typography:
    header: Archivo
    body: Noto Sans
    code: JetBrains Mono
  colors:
    lightMode: &palette
      light: "#faf8f8"
      lightgray: "#e5e5e5"
      gray: "#b8b8b8"
      darkgray: "#4e4e4e"
      dark: "#2b2b2b"
      secondary: "#284b63"
      tertiary: "#84a59d"
      highlight: "rgba(143, 159, 169, 0.15)"
      textHighlight: "#fff23688"
    darkMode: *palette
"##;

    #[test]
    fn test_parse_site_config() {
        let config: SiteConfig = serde_yaml::from_str(SITE).unwrap();
        assert_eq!(config.page_title, "My Notes");
        assert!(config.enable_spa);
        assert!(config.enable_popovers);
        assert_eq!(config.analytics_provider(), Some("plausible"));
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.base_url.as_deref(), Some("notes.example.org"));
        assert_eq!(config.default_date_type, DateType::Modified);
        assert!(config.theme.cdn_caching);
    }

    #[test]
    fn test_ignore_patterns_are_a_set() {
        let config: SiteConfig = serde_yaml::from_str(SITE).unwrap();
        let patterns: Vec<_> = config.ignore_patterns.iter().map(String::as_str).collect();
        assert_eq!(patterns, vec!["private", "templates"]);
    }

    #[test]
    fn test_analytics_providers() {
        let analytics: Analytics =
            serde_json::from_str(r#"{"provider": "umami", "websiteId": "abc"}"#).unwrap();
        assert_eq!(analytics.provider(), "umami");
        assert_eq!(analytics.host(), Some("https://analytics.umami.is"));

        let analytics: Analytics = serde_json::from_str(
            r#"{"provider": "plausible", "host": "https://stats.example.org"}"#,
        )
        .unwrap();
        assert_eq!(analytics.host(), Some("https://stats.example.org"));

        assert!(serde_json::from_str::<Analytics>(r#"{"provider": "matomo"}"#).is_err());
        assert!(serde_json::from_str::<Analytics>(r#"{"provider": "google"}"#).is_err());
    }

    #[test]
    fn test_enable_spa_key() {
        let config: SiteConfig = serde_yaml::from_str(SITE).unwrap();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["enableSPA"], serde_json::json!(true));
        assert!(value.get("analytics").is_some());
        assert!(value.get("pageTitleSuffix").is_none());
    }
}
