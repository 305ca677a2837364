use super::visitor::RichTextVisitor;

pub const WORDS_PER_MINUTE: u32 = 200;

/// Accumulates the readable text of every top-level node.
#[derive(Default)]
pub struct PlainTextCollector {
    parts: Vec<String>,
}

impl PlainTextCollector {
    pub fn into_text(self) -> String {
        self.parts.join(" ")
    }

    fn push(&mut self, text: &str) {
        if !text.is_empty() {
            self.parts.push(text.to_string());
        }
    }
}

impl RichTextVisitor for PlainTextCollector {
    fn on_heading(&mut self, _level: u8, text: &str, _html: &str) {
        self.push(text);
    }

    fn on_block(&mut self, _tag: &str, text: &str, _html: &str) {
        self.push(text);
    }

    fn on_text(&mut self, text: &str, _html: &str) {
        self.push(text);
    }
}

pub fn word_count(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

/// Rounded up; any non-empty text reads in at least a minute.
pub fn reading_minutes(words: u32) -> u32 {
    words.div_ceil(WORDS_PER_MINUTE)
}

/// Shorten plain text to at most `max_chars` characters plus an ellipsis,
/// cutting at the last word boundary that fits.
pub fn truncate_at_word(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let head = &text[..cut];
    let next_is_break = text[cut..].starts_with(char::is_whitespace);

    let kept = if next_is_break {
        head
    } else {
        match head.rfind(char::is_whitespace) {
            Some(i) => &head[..i],
            None => head,
        }
    };

    let kept = kept.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '.'));
    format!("{kept}…")
}
