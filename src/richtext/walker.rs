use scraper::{ElementRef, Html, Node};

use super::visitor::RichTextVisitor;

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "ol", "p",
    "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Parse a rich-text fragment and emit events for its top-level nodes to all
/// registered visitors.
///
/// Unbalanced tags are repaired by the HTML parser before any boundary is
/// detected.
pub fn walk_fragment(html: &str, visitors: &mut [&mut dyn RichTextVisitor]) {
    let fragment = Html::parse_fragment(html);
    let root = fragment.root_element();

    for child in root.children() {
        match child.value() {
            Node::Text(text) => {
                let raw: &str = text;
                if raw.trim().is_empty() {
                    continue;
                }
                let collapsed = collapse_whitespace(raw);
                let escaped = escape_text(raw);
                for v in visitors.iter_mut() {
                    v.on_text(&collapsed, &escaped);
                }
            }
            Node::Element(_) => {
                let Some(element) = ElementRef::wrap(child) else {
                    continue;
                };
                emit_element(element, visitors);
            }
            _ => {}
        }
    }

    for v in visitors.iter_mut() {
        v.on_fragment_end();
    }
}

fn emit_element(element: ElementRef<'_>, visitors: &mut [&mut dyn RichTextVisitor]) {
    let tag = element.value().name();
    let text = element_text(element, false);
    let html = element.html();

    if let Some(level) = heading_level(tag) {
        for v in visitors.iter_mut() {
            v.on_heading(level, &text, &html);
        }
        return;
    }

    for v in visitors.iter_mut() {
        v.on_block(tag, &text, &html);
    }

    if tag == "ul" || tag == "ol" {
        let items: Vec<String> = element
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|li| li.value().name() == "li")
            .map(|li| element_text(li, true))
            .filter(|item| !item.is_empty())
            .collect();
        for v in visitors.iter_mut() {
            v.on_list(tag == "ol", &items);
        }
    }
}

/// `h1`..`h6` -> 1..6
pub fn heading_level(tag: &str) -> Option<u8> {
    let digit = tag.strip_prefix('h')?;
    match digit.parse::<u8>() {
        Ok(level @ 1..=6) if digit.len() == 1 => Some(level),
        _ => None,
    }
}

/// Whitespace-collapsed text of an element. Block-level descendants are
/// separated by a space so `<li>a</li><li>b</li>` reads "a b".
fn element_text(element: ElementRef<'_>, skip_nested_lists: bool) -> String {
    let mut raw = String::new();
    collect_text(element, skip_nested_lists, &mut raw);
    collapse_whitespace(&raw)
}

fn collect_text(element: ElementRef<'_>, skip_nested_lists: bool, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if skip_nested_lists && (name == "ul" || name == "ol") {
                    continue;
                }
                let is_block = BLOCK_TAGS.contains(&name);
                if is_block {
                    out.push(' ');
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, skip_nested_lists, out);
                }
                if is_block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
