//! URL helper functions derived from `baseUrl`

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%');

/// Root URL of the site, or `None` when no `baseUrl` is set
///
/// # Examples
/// ```ignore
/// site_url(&config) // -> Some("https://notes.xeome.dev")
/// ```
pub fn site_url(config: &SiteConfig) -> Option<String> {
    let base = config.base_url.as_deref()?.trim_end_matches('/');
    if base.is_empty() {
        return None;
    }
    Some(format!("https://{}", base))
}

/// Path prefix the site is served under
///
/// # Examples
/// ```ignore
/// url_for(&config, "/tags/rust") // -> "/notes/tags/rust" for baseUrl "example.org/notes"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config
        .base_url
        .as_deref()
        .and_then(|base| base.split_once('/'))
        .map(|(_, root)| root.trim_matches('/'))
        .unwrap_or("");
    let path = encode_path(path.trim_start_matches('/'));

    match (root.is_empty(), path.is_empty()) {
        (true, _) => format!("/{}", path),
        (false, true) => format!("/{}/", root),
        (false, false) => format!("/{}/{}", root, path),
    }
}

/// Absolute URL for a path on the site
pub fn absolute_url(config: &SiteConfig, path: &str) -> Option<String> {
    let base = config.base_url.as_deref()?.trim_end_matches('/');
    let host = base.split('/').next().unwrap_or(base);
    if host.is_empty() {
        return None;
    }
    Some(format!("https://{}{}", host, url_for(config, path)))
}

/// Location of the generated sitemap
pub fn sitemap_url(config: &SiteConfig) -> Option<String> {
    absolute_url(config, "sitemap.xml")
}

/// Location of the generated RSS feed
pub fn rss_url(config: &SiteConfig) -> Option<String> {
    absolute_url(config, "index.xml")
}

/// Percent-encode each segment of a path, keeping the separators
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::Preset;

    fn test_config(base_url: Option<&str>) -> SiteConfig {
        let mut config = Preset::Catppuccin.config().configuration;
        config.base_url = base_url.map(String::from);
        config
    }

    #[test]
    fn test_site_url() {
        let config = test_config(Some("notes.xeome.dev"));
        assert_eq!(site_url(&config).unwrap(), "https://notes.xeome.dev");
        assert!(site_url(&test_config(None)).is_none());
    }

    #[test]
    fn test_url_for() {
        let config = test_config(Some("notes.xeome.dev"));
        assert_eq!(url_for(&config, "/tags/rust"), "/tags/rust");
        assert_eq!(url_for(&config, ""), "/");

        let config = test_config(Some("example.org/notes"));
        assert_eq!(url_for(&config, "/tags/rust"), "/notes/tags/rust");
        assert_eq!(url_for(&config, "/"), "/notes/");
    }

    #[test]
    fn test_absolute_url() {
        let config = test_config(Some("example.org/notes"));
        assert_eq!(
            absolute_url(&config, "my note").unwrap(),
            "https://example.org/notes/my%20note"
        );
        assert!(absolute_url(&test_config(None), "x").is_none());
    }

    #[test]
    fn test_feed_urls() {
        let config = test_config(Some("notes.xeome.dev"));
        assert_eq!(
            sitemap_url(&config).unwrap(),
            "https://notes.xeome.dev/sitemap.xml"
        );
        assert_eq!(rss_url(&config).unwrap(), "https://notes.xeome.dev/index.xml");
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("tags/c#"), "tags/c%23");
        assert_eq!(encode_path("a/b c/d"), "a/b%20c/d");
    }
}
