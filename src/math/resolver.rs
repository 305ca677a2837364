use tracing::debug;

use super::color_parse::parse_color;
use super::hsl::{hsl_to_rgb, rgb_to_hsl, Hsl, Rgb};
use super::wcag::{contrast_ratio, relative_luminance};
use crate::types::ContrastColors;

/// WCAG AA for normal-size text.
pub const MIN_CONTRAST: f64 = 4.5;
/// Backgrounds brighter than this get dark text. Sits above the WCAG
/// crossover (~0.18), tuned for the site palette.
pub const LIGHT_LUMINANCE_THRESHOLD: f64 = 0.4;
pub const MAX_ITERATIONS: u32 = 10;

/// surface-950
pub const DARK_NEUTRAL: &str = "#0a0a0a";
pub const WHITE: &str = "white";

const DEFAULT_TEXT: &str = "hsl(0, 0%, 95%)";
const DEFAULT_OVERLAY: &str = "rgba(255, 255, 255, 0.1)";

const LIGHT_FALLBACK_TEXT: &str = "hsl(0, 0%, 5%)";
const LIGHT_FALLBACK_OVERLAY: &str = "rgba(0, 0, 0, 0.1)";
const DARK_FALLBACK_TEXT: &str = "hsl(0, 0%, 98%)";
const DARK_FALLBACK_OVERLAY: &str = "rgba(255, 255, 255, 0.15)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastMode {
    Light,
    Dark,
}

impl ContrastMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ContrastMode::Light => "light",
            ContrastMode::Dark => "dark",
        }
    }
}

/// Light if the background's relative luminance is strictly above the threshold.
pub fn classify(bg: Rgb) -> ContrastMode {
    if relative_luminance(bg) > LIGHT_LUMINANCE_THRESHOLD {
        ContrastMode::Light
    } else {
        ContrastMode::Dark
    }
}

/// Final state of the text color search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchOutcome {
    pub hsl: Hsl,
    pub ratio: f64,
    pub iterations: u32,
}

impl SearchOutcome {
    pub fn satisfied(&self) -> bool {
        self.ratio >= MIN_CONTRAST
    }
}

/// Walk a same-hue text color away from the background until it reaches
/// [`MIN_CONTRAST`] or the iteration budget runs out.
///
/// Every candidate is held at whole-number h/s/l, the precision it is
/// emitted in, so the ratio measured here is the ratio of the output string.
pub(crate) fn search_text_color(bg: Rgb, mode: ContrastMode) -> SearchOutcome {
    let bg_hsl = rgb_to_hsl(bg);
    let bg_luminance = relative_luminance(bg);

    let h = bg_hsl.h.round().rem_euclid(360.0);
    let mut s = (bg_hsl.s * 0.7).min(60.0).round();
    let mut l = match mode {
        ContrastMode::Light => 15.0,
        ContrastMode::Dark => 90.0,
    };

    let measure = |s: f64, l: f64| -> f64 {
        let text = hsl_to_rgb(Hsl::new(h, s, l));
        contrast_ratio(bg_luminance, relative_luminance(text))
    };

    let mut ratio = measure(s, l);
    let mut iterations = 0;

    while ratio < MIN_CONTRAST && iterations < MAX_ITERATIONS {
        s = (s - 10.0).max(0.0);
        l = match mode {
            ContrastMode::Light => (l - 3.0).max(5.0),
            ContrastMode::Dark => (l + 2.0).min(98.0),
        };
        ratio = measure(s, l);
        iterations += 1;
    }

    SearchOutcome {
        hsl: Hsl::new(h, s, l),
        ratio,
        iterations,
    }
}

fn format_hsl(hsl: Hsl) -> String {
    format!(
        "hsl({}, {}%, {}%)",
        hsl.h.round() as i32,
        hsl.s.round() as i32,
        hsl.l.round() as i32
    )
}

fn format_overlay(hsl: Hsl, mode: ContrastMode) -> String {
    let lightness = match mode {
        ContrastMode::Light => 10,
        ContrastMode::Dark => 95,
    };
    format!(
        "hsla({}, {}%, {}%, 0.15)",
        hsl.h.round() as i32,
        hsl.s.round() as i32,
        lightness
    )
}

fn default_colors() -> ContrastColors {
    ContrastColors {
        text_color: DEFAULT_TEXT.to_string(),
        mode: ContrastMode::Dark.as_str().to_string(),
        overlay_color: DEFAULT_OVERLAY.to_string(),
    }
}

/// Derive a readable text color and a matching overlay tint for a
/// CMS-supplied background. Never fails: missing or unparseable input yields
/// the dark-mode default.
pub fn get_contrast_colors(bg_color: Option<&str>) -> ContrastColors {
    let Some(bg) = parse_color(bg_color) else {
        debug!(input = ?bg_color, "unparseable background, using dark default");
        return default_colors();
    };

    let mode = classify(bg);
    let outcome = search_text_color(bg, mode);

    if !outcome.satisfied() {
        debug!(
            input = ?bg_color,
            ratio = outcome.ratio,
            iterations = outcome.iterations,
            "contrast search exhausted, using fixed fallback"
        );
        let (text, overlay) = match mode {
            ContrastMode::Light => (LIGHT_FALLBACK_TEXT, LIGHT_FALLBACK_OVERLAY),
            ContrastMode::Dark => (DARK_FALLBACK_TEXT, DARK_FALLBACK_OVERLAY),
        };
        return ContrastColors {
            text_color: text.to_string(),
            mode: mode.as_str().to_string(),
            overlay_color: overlay.to_string(),
        };
    }

    ContrastColors {
        text_color: format_hsl(outcome.hsl),
        mode: mode.as_str().to_string(),
        overlay_color: format_overlay(outcome.hsl, mode),
    }
}

/// Binary pick between white and the dark neutral, for callers that don't
/// need a hue-matched color.
pub fn get_contrast_color(bg_color: Option<&str>) -> &'static str {
    match parse_color(bg_color).map(classify) {
        Some(ContrastMode::Light) => DARK_NEUTRAL,
        Some(ContrastMode::Dark) | None => WHITE,
    }
}
