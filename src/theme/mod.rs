//! Theme configuration: fonts and color palettes

mod color;
pub mod css;
mod palette;

pub use color::{Color, ColorKind};
pub use palette::{ColorRole, Colors, Palette};

use serde::{Deserialize, Serialize};

/// Where fonts are loaded from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontOrigin {
    #[default]
    GoogleFonts,
    Local,
}

/// Header, body and code font families
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    pub header: String,
    pub body: String,
    pub code: String,
}

/// Site theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default)]
    pub font_origin: FontOrigin,
    #[serde(default = "default_cdn_caching")]
    pub cdn_caching: bool,
    pub typography: Typography,
    pub colors: Colors,
}

fn default_cdn_caching() -> bool {
    true
}

impl Theme {
    /// Palette for the requested mode
    pub fn palette(&self, dark: bool) -> &Palette {
        if dark {
            &self.colors.dark_mode
        } else {
            &self.colors.light_mode
        }
    }
}
