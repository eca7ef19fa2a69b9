//! Validate a config file

use anyhow::Result;

use crate::config::{Report, SiteConfig};
use crate::helpers;
use crate::plugins::Stage;
use crate::Project;

/// Validate the project's config and print a summary
pub fn run(project: &Project) -> Result<Report> {
    let config = &project.config;
    let report = config.validate();

    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for error in &report.errors {
        println!("error: {}", error);
    }

    if !report.is_ok() {
        anyhow::bail!(
            "{:?} has {} error(s)",
            project.config_path,
            report.errors.len()
        );
    }

    let site = &config.configuration;
    println!("{} ({:?})", site.page_title, project.config_path);
    if let Some(url) = helpers::site_url(site) {
        println!("  url:        {}", url);
    }
    if let Some(analytics) = analytics_summary(site) {
        println!("  analytics:  {}", analytics);
    }
    println!(
        "  plugins:    {} transformers, {} filters, {} emitters",
        config.plugins.len(Stage::Transformer),
        config.plugins.len(Stage::Filter),
        config.plugins.len(Stage::Emitter)
    );
    if let Some(index) = config.plugins.content_index_options() {
        if index.enable_site_map {
            if let Some(url) = helpers::sitemap_url(site) {
                println!("  sitemap:    {}", url);
            }
        }
        if index.enable_rss {
            if let Some(url) = helpers::rss_url(site) {
                println!("  rss:        {}", url);
            }
        }
    }
    println!("  warnings:   {}", report.warnings.len());

    tracing::info!("{:?} is valid", project.config_path);
    Ok(report)
}

/// Provider and script host, e.g. `plausible (https://plausible.io)`
fn analytics_summary(site: &SiteConfig) -> Option<String> {
    let analytics = site.analytics.as_ref()?;
    Some(match analytics.host() {
        Some(host) => format!("{} ({})", analytics.provider(), host),
        None => analytics.provider().to_string(),
    })
}
