//! Print the theme's CSS variables

use anyhow::Result;

use crate::theme::css;
use crate::PipelineConfig;

/// Render the stylesheet fragment, optionally preceded by the font import
pub fn render(config: &PipelineConfig, fonts: bool) -> String {
    let theme = &config.configuration.theme;
    let mut out = String::new();

    if fonts {
        match css::google_font_href(theme) {
            Some(href) => out.push_str(&format!("@import url(\"{}\");\n\n", href)),
            None => tracing::info!("Fonts are served locally, skipping the font import"),
        }
    }
    out.push_str(&css::render_variables(theme));
    out
}

pub fn run(config: &PipelineConfig, fonts: bool) -> Result<()> {
    print!("{}", render(config, fonts));
    Ok(())
}
