use super::color_parse::parse_color;
use super::hex::to_hex_string;
use super::wcag::{check_wcag_thresholds, contrast_ratio, relative_luminance};
use crate::types::ContrastCheck;

/// Check contrast for a single text/background pair.
/// Returns None when either color fails to parse.
pub fn check_contrast(text: &str, bg: &str, is_large_text: bool) -> Option<ContrastCheck> {
    let text_rgb = parse_color(Some(text))?;
    let bg_rgb = parse_color(Some(bg))?;

    let ratio_raw = contrast_ratio(relative_luminance(text_rgb), relative_luminance(bg_rgb));
    let ratio = (ratio_raw * 100.0).round() / 100.0;
    let wcag = check_wcag_thresholds(ratio_raw, is_large_text);

    Some(ContrastCheck {
        text_hex: to_hex_string(text_rgb),
        bg_hex: to_hex_string(bg_rgb),
        is_large_text,
        ratio,
        pass_aa: wcag.pass_aa,
        pass_aa_large: wcag.pass_aa_large,
        pass_aaa: wcag.pass_aaa,
        pass_aaa_large: wcag.pass_aaa_large,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_on_white_passes_all() {
        let result = check_contrast("#000000", "#ffffff", false).unwrap();
        assert!(result.pass_aa);
        assert!(result.pass_aaa);
        assert!((result.ratio - 21.0).abs() < 0.1);
    }

    #[test]
    fn ratio_rounded_to_2_decimals() {
        let result = check_contrast("#767676", "#ffffff", false).unwrap();
        let rounded = (result.ratio * 100.0).round() / 100.0;
        assert!((result.ratio - rounded).abs() < 0.001);
    }

    #[test]
    fn hex_is_normalized() {
        let result = check_contrast("fff", "rgb(10, 10, 10)", false).unwrap();
        assert_eq!(result.text_hex, "#ffffff");
        assert_eq!(result.bg_hex, "#0a0a0a");
    }

    #[test]
    fn low_contrast_fails_aa() {
        let result = check_contrast("#cccccc", "#ffffff", false).unwrap();
        assert!(!result.pass_aa);
        assert!(!result.pass_aa_large);
    }

    #[test]
    fn large_text_uses_large_threshold() {
        // ~3.5:1 fails AA normal but passes AA large
        let normal = check_contrast("#949494", "#ffffff", false).unwrap();
        let large = check_contrast("#949494", "#ffffff", true).unwrap();
        assert!(!normal.pass_aa);
        assert!(large.pass_aa);
        assert!(large.is_large_text);
    }

    #[test]
    fn unparseable_pair_is_none() {
        assert!(check_contrast("red", "#ffffff", false).is_none());
        assert!(check_contrast("#000", "", false).is_none());
    }
}
