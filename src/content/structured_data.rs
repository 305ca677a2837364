use serde_json::{json, Value};

use super::records::FaqEntry;
use crate::richtext::to_plain_text;

/// schema.org `FAQPage` JSON-LD. Answers are flattened to plain text.
pub fn faq_page(entries: &[FaqEntry]) -> Value {
    let main_entity: Vec<Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": to_plain_text(&entry.answer_html),
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": main_entity,
    })
}
