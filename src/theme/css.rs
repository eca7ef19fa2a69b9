//! Render a theme into the stylesheet fragments the site pulls in

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::Write;

use super::{FontOrigin, Palette, Theme, Typography};

const DEFAULT_SANS_SERIF: &str = r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif"#;
const DEFAULT_MONO: &str = "ui-monospace, SFMono-Regular, SF Mono, Menlo, monospace";

/// Characters left untouched in a font family name (space is handled separately)
const FONT_NAME: &AsciiSet = &NON_ALPHANUMERIC.remove(b' ').remove(b'-').remove(b'_');

/// Encode a font family for the Google Fonts css2 API
fn encode_font_name(name: &str) -> String {
    utf8_percent_encode(name.trim(), FONT_NAME)
        .to_string()
        .replace(' ', "+")
}

/// Build the Google Fonts stylesheet URL for the typography
///
/// Returns `None` when fonts are served locally.
pub fn google_font_href(theme: &Theme) -> Option<String> {
    if theme.font_origin != FontOrigin::GoogleFonts {
        return None;
    }
    Some(font_href(&theme.typography))
}

fn font_href(typography: &Typography) -> String {
    format!(
        "https://fonts.googleapis.com/css2?family={}:wght@400;700&family={}:ital,wght@0,400;0,600;1,400;1,600&family={}:wght@400;600&display=swap",
        encode_font_name(&typography.header),
        encode_font_name(&typography.body),
        encode_font_name(&typography.code),
    )
}

fn write_palette(out: &mut String, palette: &Palette) {
    for (role, color) in palette.iter() {
        let _ = writeln!(out, "  --{}: {};", role.key(), color);
    }
}

/// Render the CSS custom properties for both palettes and the font stacks
pub fn render_variables(theme: &Theme) -> String {
    let mut out = String::new();

    out.push_str(":root {\n");
    write_palette(&mut out, &theme.colors.light_mode);
    let _ = writeln!(
        out,
        "  --headerFont: \"{}\", {};",
        theme.typography.header, DEFAULT_SANS_SERIF
    );
    let _ = writeln!(
        out,
        "  --bodyFont: \"{}\", {};",
        theme.typography.body, DEFAULT_SANS_SERIF
    );
    let _ = writeln!(
        out,
        "  --codeFont: \"{}\", {};",
        theme.typography.code, DEFAULT_MONO
    );
    out.push_str("}\n\n");

    out.push_str(":root[saved-theme=\"dark\"] {\n");
    write_palette(&mut out, &theme.colors.dark_mode);
    out.push_str("}\n");

    out
}
