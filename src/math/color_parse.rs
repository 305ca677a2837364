use csscolorparser::Color;

use super::hex::parse_hex_rgb;
use super::hsl::Rgb;

/// Parse a background color as supplied by the CMS.
/// Handles: 3-digit hex, 6+-digit hex (with or without `#`), rgb()/rgba().
/// Returns None for absent, empty, keyword or otherwise unrecognized input.
///
/// `rgb()` channels are not clamped: `rgb(999, 0, 0)` yields r = 999.
pub fn parse_color(value: Option<&str>) -> Option<Rgb> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rgb) = parse_hex_rgb(trimmed) {
        return Some(rgb);
    }

    parse_rgb_function(trimmed)
}

/// `rgb(r, g, b)` or `rgba(r, g, b, a)` with integer channels; alpha is ignored.
fn parse_rgb_function(value: &str) -> Option<Rgb> {
    let lower = value.to_ascii_lowercase();
    let body = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let channel = |s: &str| -> Option<u16> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse().ok()
    };

    Some(Rgb::new(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
    ))
}

/// Convert any CSS color value to 6-digit hex (or 8-digit with alpha).
/// Handles: oklch, hsl, rgb, hex, named colors.
/// Returns None for: transparent, inherit, currentColor, unrecognized.
///
/// Used to normalize brand colors in content files so that keyword and
/// hsl() values reach [`parse_color`] in a form it understands.
pub fn normalize_css_color(value: &str) -> Option<String> {
    let trimmed = value.trim();

    match trimmed.to_lowercase().as_str() {
        "" | "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => return None,
        _ => {}
    }

    // Direct hex passthrough (normalize 3->6, 4->8 digit)
    if let Some(raw) = trimmed.strip_prefix('#') {
        if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        return match raw.len() {
            3 | 4 => {
                let expanded: String = raw.chars().flat_map(|c| [c, c]).collect();
                Some(format!("#{}", expanded.to_lowercase()))
            }
            6 | 8 => Some(format!("#{}", raw.to_lowercase())),
            _ => None,
        };
    }

    match trimmed.parse::<Color>() {
        Ok(color) => {
            let [r, g, b, a] = color.to_rgba8();
            if a < 255 {
                Some(format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a))
            } else {
                Some(format!("#{:02x}{:02x}{:02x}", r, g, b))
            }
        }
        Err(_) => None,
    }
}
