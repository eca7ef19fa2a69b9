//! List the built-in presets

use anyhow::Result;

use crate::Preset;

/// One line per preset with the settings that tell them apart
pub fn describe(preset: Preset) -> String {
    let config = preset.config();
    let priority = config
        .plugins
        .date_options()
        .map(|opts| {
            opts.priority
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    let keep_background = config
        .plugins
        .highlighting_options()
        .map(|opts| opts.keep_background)
        .unwrap_or(false);

    format!(
        "{:<11} dates: {} [{}], dark: {}, keepBackground: {}",
        preset.name(),
        config.configuration.default_date_type,
        priority,
        preset.dark_palette_name(),
        keep_background
    )
}

pub fn run() -> Result<()> {
    println!("Presets ({}):", Preset::ALL.len());
    for preset in Preset::ALL {
        println!("  {}", describe(preset));
    }
    Ok(())
}
