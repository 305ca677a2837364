pub mod lists;
pub mod plain_text;
pub mod sections;
pub mod visitor;
pub mod walker;

use lists::ListCollector;
use plain_text::{reading_minutes, truncate_at_word, word_count, PlainTextCollector};
use sections::SectionCollector;
use visitor::RichTextVisitor;

use crate::types::RichTextDocument;

pub const DEFAULT_SECTION_LEVEL: u8 = 2;

/// Split CMS rich text into an intro and heading-delimited sections, plus its
/// plain text and reading time, in a single walk.
///
/// Only headings at the top level of the fragment start a section; a heading
/// nested inside another element travels with that element.
pub fn split_rich_text(html: &str, level: u8) -> RichTextDocument {
    let mut sections = SectionCollector::new(level.clamp(1, 6));
    let mut text = PlainTextCollector::default();

    walker::walk_fragment(
        html,
        &mut [
            &mut sections as &mut dyn RichTextVisitor,
            &mut text as &mut dyn RichTextVisitor,
        ],
    );

    let (intro_html, sections) = sections.into_parts();
    let plain_text = text.into_text();
    let words = word_count(&plain_text);

    RichTextDocument {
        intro_html,
        sections,
        plain_text,
        word_count: words,
        reading_minutes: reading_minutes(words),
    }
}

/// Text of the direct items of every top-level `<ul>`/`<ol>`.
pub fn extract_list_items(html: &str) -> Vec<String> {
    let mut lists = ListCollector::default();
    walker::walk_fragment(html, &mut [&mut lists as &mut dyn RichTextVisitor]);
    lists.into_items()
}

/// Tags stripped, entities decoded, whitespace collapsed.
pub fn to_plain_text(html: &str) -> String {
    let mut text = PlainTextCollector::default();
    walker::walk_fragment(html, &mut [&mut text as &mut dyn RichTextVisitor]);
    text.into_text()
}

/// Plain-text teaser for cards and meta descriptions.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    truncate_at_word(&to_plain_text(html), max_chars)
}
