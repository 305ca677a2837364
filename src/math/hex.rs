use super::hsl::Rgb;

/// Parse a hex color body (with or without `#`) to RGB channels.
/// 3 digits: each digit doubled. 6 or more digits: first 6 used, the rest
/// (e.g. an alpha byte) ignored. Every character must be a hex digit.
/// Returns None on malformed input.
pub fn parse_hex_rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let digit = |i: usize| -> Option<u16> {
                let d = u16::from_str_radix(&hex[i..i + 1], 16).ok()?;
                Some(d * 17)
            };
            Some(Rgb::new(digit(0)?, digit(1)?, digit(2)?))
        }
        n if n >= 6 => {
            let byte = |i: usize| u16::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// Format RGB as lowercase `#rrggbb`. Channels above 255 saturate.
pub fn to_hex_string(rgb: Rgb) -> String {
    let c = |v: u16| v.min(255);
    format!("#{:02x}{:02x}{:02x}", c(rgb.r), c(rgb.g), c(rgb.b))
}
