use std::collections::HashMap;

use super::visitor::RichTextVisitor;
use crate::types::RichTextSection;

/// Splits a fragment into sections at top-level headings of one level.
/// Headings of other levels stay in the body of the current section.
pub struct SectionCollector {
    level: u8,
    intro_html: String,
    sections: Vec<RichTextSection>,
    anchor_counts: HashMap<String, u32>,
}

impl SectionCollector {
    pub fn new(level: u8) -> Self {
        Self {
            level,
            intro_html: String::new(),
            sections: Vec::new(),
            anchor_counts: HashMap::new(),
        }
    }

    pub fn into_parts(self) -> (String, Vec<RichTextSection>) {
        (self.intro_html, self.sections)
    }

    fn push_html(&mut self, html: &str) {
        match self.sections.last_mut() {
            Some(section) => section.html.push_str(html),
            None => self.intro_html.push_str(html),
        }
    }

    /// Repeated headings get `-2`, `-3`... so anchors stay unique per document.
    fn unique_anchor(&mut self, heading: &str) -> String {
        let base = slugify(heading);
        let count = self.anchor_counts.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{base}-{count}")
        }
    }
}

impl RichTextVisitor for SectionCollector {
    fn on_heading(&mut self, level: u8, text: &str, html: &str) {
        if level != self.level {
            self.push_html(html);
            return;
        }
        let anchor = self.unique_anchor(text);
        self.sections.push(RichTextSection {
            heading: text.to_string(),
            anchor,
            html: String::new(),
        });
    }

    fn on_block(&mut self, _tag: &str, _text: &str, html: &str) {
        self.push_html(html);
    }

    fn on_text(&mut self, _text: &str, html: &str) {
        self.push_html(html);
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes.
/// Empty headings slug to "section".
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}
