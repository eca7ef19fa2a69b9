//! CSS color values used by theme palettes

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    static ref HEX_RE: Regex = Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap();
    static ref RGB_RE: Regex = Regex::new(
        r"^(rgba?)\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$"
    )
    .unwrap();
}

/// The notation a color was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    /// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)`
    Rgba,
}

/// A validated CSS color string
///
/// The original spelling is kept so a loaded palette is written back
/// exactly as the author typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    raw: String,
    kind: ColorKind,
}

impl Color {
    /// Parse a color string
    ///
    /// # Examples
    /// ```
    /// use notes_cfg::theme::Color;
    ///
    /// assert!(Color::parse("#eff1f5").is_ok());
    /// assert!(Color::parse("rgba(143, 159, 169, 0.15)").is_ok());
    /// assert!(Color::parse("tomato").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, String> {
        if value.trim() != value {
            return Err(format!(
                "invalid color `{}`: surrounding whitespace is not allowed",
                value
            ));
        }

        if HEX_RE.is_match(value) {
            return Ok(Self {
                raw: value.to_string(),
                kind: ColorKind::Hex,
            });
        }

        let caps = RGB_RE
            .captures(value)
            .ok_or_else(|| format!("invalid color `{}`: expected #hex, rgb() or rgba()", value))?;

        for idx in 2..=4 {
            let channel: u32 = caps[idx]
                .parse()
                .map_err(|_| format!("invalid color `{}`: bad channel", value))?;
            if channel > 255 {
                return Err(format!(
                    "invalid color `{}`: channel {} is out of range 0-255",
                    value, channel
                ));
            }
        }

        let is_rgba = &caps[1] == "rgba";
        match (is_rgba, caps.get(5)) {
            (true, Some(alpha)) => {
                let alpha: f64 = alpha
                    .as_str()
                    .parse()
                    .map_err(|_| format!("invalid color `{}`: bad alpha", value))?;
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(format!(
                        "invalid color `{}`: alpha {} is out of range 0-1",
                        value, alpha
                    ));
                }
                Ok(Self {
                    raw: value.to_string(),
                    kind: ColorKind::Rgba,
                })
            }
            (false, None) => Ok(Self {
                raw: value.to_string(),
                kind: ColorKind::Rgb,
            }),
            (true, None) => Err(format!("invalid color `{}`: rgba() needs an alpha", value)),
            (false, Some(_)) => Err(format!(
                "invalid color `{}`: rgb() takes three channels",
                value
            )),
        }
    }

    /// Build a color from a literal known to be valid
    ///
    /// # Panics
    /// Panics if `value` is not a valid color.
    pub(crate) fn from_static(value: &'static str) -> Self {
        match Color::parse(value) {
            Ok(color) => color,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> ColorKind {
        self.kind
    }

    /// Whether the color carries an alpha channel
    pub fn has_alpha(&self) -> bool {
        match self.kind {
            ColorKind::Rgba => true,
            ColorKind::Rgb => false,
            // #rgba or #rrggbbaa
            ColorKind::Hex => matches!(self.raw.len(), 5 | 9),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.raw
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
