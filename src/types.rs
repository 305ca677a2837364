use napi_derive::napi;

/// Return value of `getContrastColors`
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastColors {
    /// `hsl(h, s%, l%)`, or one of the fixed fallbacks
    pub text_color: String,
    /// "light" | "dark"
    pub mode: String,
    /// Translucent tint for card chrome drawn over the background
    pub overlay_color: String,
}

/// WCAG verdict for a single text/background pair
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ContrastCheck {
    pub text_hex: String,
    pub bg_hex: String,
    pub is_large_text: bool,
    /// Rounded to 2 decimals
    pub ratio: f64,
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
}

/// One heading-delimited chunk of CMS rich text
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct RichTextSection {
    /// Plain text of the heading that opens the section
    pub heading: String,
    /// Stable slug derived from the heading, usable as an anchor id
    pub anchor: String,
    /// Serialized HTML of everything between this heading and the next
    pub html: String,
}

/// CMS rich text split at top-level headings
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct RichTextDocument {
    /// Content before the first heading
    pub intro_html: String,
    pub sections: Vec<RichTextSection>,
    /// Whitespace-collapsed plain text of the whole fragment
    pub plain_text: String,
    pub word_count: u32,
    pub reading_minutes: u32,
}

/// Brand-colored card with its resolved text/overlay colors
#[napi(object)]
#[derive(Debug, Clone)]
pub struct CardColors {
    pub slug: String,
    pub brand_color: Option<String>,
    pub colors: ContrastColors,
}
