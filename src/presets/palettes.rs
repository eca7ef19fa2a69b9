//! Named palettes used by the built-in presets
//!
//! Values are listed in role order: light, lightgray, gray, darkgray, dark,
//! secondary, tertiary, highlight, textHighlight.

use crate::theme::{Color, Palette};

const HIGHLIGHT: &str = "rgba(143, 159, 169, 0.15)";

fn palette(values: [&'static str; 9]) -> Palette {
    let [light, lightgray, gray, darkgray, dark, secondary, tertiary, highlight, text_highlight] =
        values.map(Color::from_static);
    Palette {
        light,
        lightgray,
        gray,
        darkgray,
        dark,
        secondary,
        tertiary,
        highlight,
        text_highlight,
    }
}

/// Catppuccin Latte
pub fn catppuccin_latte() -> Palette {
    palette([
        "#eff1f5", // Base
        "#ccd0da", // Surface0
        "#8c8fa1", // Overlay1
        "#6c6f85", // Subtext0
        "#4c4f69", // Text
        "#1e66f5", // Blue
        "#7287fd", // Lavender
        HIGHLIGHT,
        "#fff23688",
    ])
}

/// Catppuccin Mocha backgrounds with Frappé text and accents
pub fn catppuccin_mocha_frappe() -> Palette {
    palette([
        "#11111b", // Mocha Crust
        "#313244", // Mocha Surface0
        "#7f849c", // Mocha Overlay1
        "#a6adc8", // Mocha Subtext0
        "#c6d0f5", // Frappé Text
        "#8caaee", // Frappé Blue
        "#babbf1", // Frappé Lavender
        HIGHLIGHT,
        "#b3aa0288",
    ])
}

/// Gruvbox Material, hard dark background
pub fn gruvbox_material_hard_dark() -> Palette {
    palette([
        "#1d2021", // bg0
        "#3c3836", // bg3
        "#7c6f64", // grey0
        "#a89984", // grey2
        "#d4be98", // fg0
        "#7daea3", // blue
        "#89b482", // aqua
        HIGHLIGHT,
        "#d8a65788", // yellow
    ])
}

/// Tango dark
pub fn tango_dark() -> Palette {
    palette([
        "#2e3436", // Aluminium 6
        "#555753", // Aluminium 5
        "#888a85", // Aluminium 4
        "#babdb6", // Aluminium 3
        "#eeeeec", // Aluminium 1
        "#729fcf", // Sky Blue 1
        "#ad7fa8", // Plum 1
        HIGHLIGHT,
        "#c4a00088", // Butter 3
    ])
}
