use super::hsl::Rgb;

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u16) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.x.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * srgb_to_linear(rgb.r) + 0.7152 * srgb_to_linear(rgb.g) + 0.0722 * srgb_to_linear(rgb.b)
}

/// Calculate WCAG contrast ratio between two luminances.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Determine pass/fail for all WCAG thresholds.
pub fn check_wcag_thresholds(ratio: f64, is_large_text: bool) -> WcagResult {
    if is_large_text {
        WcagResult {
            pass_aa: ratio >= 3.0,
            pass_aa_large: ratio >= 3.0,
            pass_aaa: ratio >= 4.5,
            pass_aaa_large: ratio >= 4.5,
        }
    } else {
        WcagResult {
            pass_aa: ratio >= 4.5,
            pass_aa_large: ratio >= 3.0,
            pass_aaa: ratio >= 7.0,
            pass_aaa_large: ratio >= 4.5,
        }
    }
}

pub struct WcagResult {
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
}
