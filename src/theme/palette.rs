//! Light and dark color palettes

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Color;

/// Semantic color role shared by every palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Light,
    Lightgray,
    Gray,
    Darkgray,
    Dark,
    Secondary,
    Tertiary,
    Highlight,
    TextHighlight,
}

impl ColorRole {
    /// All roles, in declaration order
    pub const ALL: [ColorRole; 9] = [
        ColorRole::Light,
        ColorRole::Lightgray,
        ColorRole::Gray,
        ColorRole::Darkgray,
        ColorRole::Dark,
        ColorRole::Secondary,
        ColorRole::Tertiary,
        ColorRole::Highlight,
        ColorRole::TextHighlight,
    ];

    /// Key used in config files and as the CSS variable name
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::Light => "light",
            ColorRole::Lightgray => "lightgray",
            ColorRole::Gray => "gray",
            ColorRole::Darkgray => "darkgray",
            ColorRole::Dark => "dark",
            ColorRole::Secondary => "secondary",
            ColorRole::Tertiary => "tertiary",
            ColorRole::Highlight => "highlight",
            ColorRole::TextHighlight => "textHighlight",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A full set of colors for one mode
///
/// Every role is a required field and unknown keys are rejected, so a
/// loaded palette always has exactly the nine roles of [`ColorRole::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Palette {
    pub light: Color,
    pub lightgray: Color,
    pub gray: Color,
    pub darkgray: Color,
    pub dark: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub highlight: Color,
    pub text_highlight: Color,
}

impl Palette {
    /// Look up the color for a role
    pub fn get(&self, role: ColorRole) -> &Color {
        match role {
            ColorRole::Light => &self.light,
            ColorRole::Lightgray => &self.lightgray,
            ColorRole::Gray => &self.gray,
            ColorRole::Darkgray => &self.darkgray,
            ColorRole::Dark => &self.dark,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Tertiary => &self.tertiary,
            ColorRole::Highlight => &self.highlight,
            ColorRole::TextHighlight => &self.text_highlight,
        }
    }

    /// Iterate over `(role, color)` pairs in role order
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &Color)> + '_ {
        ColorRole::ALL.iter().map(move |&role| (role, self.get(role)))
    }
}

/// Palettes for both display modes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub light_mode: Palette,
    pub dark_mode: Palette,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATTE: &str = r##"
light: "#eff1f5"
lightgray: "#ccd0da"
gray: "#8c8fa1"
darkgray: "#6c6f85"
dark: "#4c4f69"
secondary: "#1e66f5"
tertiary: "#7287fd"
highlight: "rgba(143, 159, 169, 0.15)"
textHighlight: "#fff23688"
"##;

    #[test]
    fn test_palette_has_nine_roles() {
        let palette: Palette = serde_yaml::from_str(LATTE).unwrap();
        let roles: Vec<_> = palette.iter().map(|(role, _)| role.key()).collect();
        assert_eq!(
            roles,
            vec![
                "light",
                "lightgray",
                "gray",
                "darkgray",
                "dark",
                "secondary",
                "tertiary",
                "highlight",
                "textHighlight"
            ]
        );
        assert_eq!(palette.get(ColorRole::Secondary).as_str(), "#1e66f5");
    }

    #[test]
    fn test_missing_role_is_rejected() {
        let yaml = LATTE.replace("gray: \"#8c8fa1\"\n", "");
        let err = serde_yaml::from_str::<Palette>(&yaml).unwrap_err();
        assert!(err.to_string().contains("missing field `gray`"));
    }

    #[test]
    fn test_extra_role_is_rejected() {
        let yaml = format!("{}accent: \"#000000\"\n", LATTE);
        let err = serde_yaml::from_str::<Palette>(&yaml).unwrap_err();
        assert!(err.to_string().contains("accent"));
    }

    #[test]
    fn test_serialized_keys_follow_role_order() {
        let palette: Palette = serde_yaml::from_str(LATTE).unwrap();
        let value = serde_json::to_value(&palette).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        let expected: Vec<_> = ColorRole::ALL.iter().map(|r| r.key().to_string()).collect();
        assert_eq!(keys, expected);
    }
}
