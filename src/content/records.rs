use serde::{Deserialize, Serialize};

use super::key::ContentKey;
use crate::math::color_parse::normalize_css_color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub headline: String,
    pub subheadline: String,
    pub primary_cta: CallToAction,
    pub secondary_cta: Option<CallToAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub body_html: Option<String>,
    pub brand_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub question: String,
    /// Rich text
    pub answer_html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub author: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub quote: String,
    pub brand_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub slug: String,
    pub client: String,
    pub title: String,
    pub summary: String,
    pub brand_color: Option<String>,
    pub body_html: Option<String>,
}

/// A parsed content file. The variant is fixed by the [`ContentKey`] it was
/// loaded for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContentBlock {
    Home(HomeContent),
    Services(Vec<ServiceEntry>),
    Faq(Vec<FaqEntry>),
    Testimonials(Vec<Testimonial>),
    CaseStudies(Vec<CaseStudy>),
}

impl ContentBlock {
    pub fn parse(key: ContentKey, source: &str) -> Result<Self, serde_json::Error> {
        Ok(match key {
            ContentKey::Home => ContentBlock::Home(serde_json::from_str(source)?),
            ContentKey::Services => ContentBlock::Services(serde_json::from_str(source)?),
            ContentKey::Faq => ContentBlock::Faq(serde_json::from_str(source)?),
            ContentKey::Testimonials => ContentBlock::Testimonials(serde_json::from_str(source)?),
            ContentKey::CaseStudies => ContentBlock::CaseStudies(serde_json::from_str(source)?),
        })
    }

    /// Every brand color field in the block, for normalization.
    fn brand_colors_mut(&mut self) -> Vec<&mut Option<String>> {
        match self {
            ContentBlock::Home(_) | ContentBlock::Faq(_) => Vec::new(),
            ContentBlock::Services(items) => items.iter_mut().map(|s| &mut s.brand_color).collect(),
            ContentBlock::Testimonials(items) => {
                items.iter_mut().map(|t| &mut t.brand_color).collect()
            }
            ContentBlock::CaseStudies(items) => {
                items.iter_mut().map(|c| &mut c.brand_color).collect()
            }
        }
    }

    /// Rewrite brand colors to lowercase hex. Values that are not CSS colors
    /// are dropped and returned so the caller can report them.
    pub fn normalize_brand_colors(&mut self) -> Vec<String> {
        let mut rejected = Vec::new();
        for slot in self.brand_colors_mut() {
            let Some(raw) = slot.take() else {
                continue;
            };
            match normalize_css_color(&raw) {
                Some(hex) => *slot = Some(hex),
                None => rejected.push(raw),
            }
        }
        rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_by_key() {
        let block = ContentBlock::parse(
            ContentKey::Faq,
            r#"[{"question": "How long?", "answerHtml": "<p>Six weeks.</p>"}]"#,
        )
        .unwrap();
        assert_eq!(
            block,
            ContentBlock::Faq(vec![FaqEntry {
                question: "How long?".to_string(),
                answer_html: "<p>Six weeks.</p>".to_string(),
            }])
        );
    }

    #[test]
    fn wrong_shape_for_key_fails() {
        assert!(ContentBlock::parse(ContentKey::Home, "[]").is_err());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let block = ContentBlock::parse(
            ContentKey::Testimonials,
            r#"[{"author": "Ada", "quote": "Great work."}]"#,
        )
        .unwrap();
        let ContentBlock::Testimonials(items) = block else {
            panic!("expected testimonials");
        };
        assert_eq!(items[0].role, None);
        assert_eq!(items[0].brand_color, None);
    }

    #[test]
    fn brand_colors_normalized() {
        let mut block = ContentBlock::parse(
            ContentKey::CaseStudies,
            r##"[
                {"slug": "a", "client": "A", "title": "t", "summary": "s", "brandColor": "Navy"},
                {"slug": "b", "client": "B", "title": "t", "summary": "s", "brandColor": "#ABC"},
                {"slug": "c", "client": "C", "title": "t", "summary": "s", "brandColor": "brand-blue"},
                {"slug": "d", "client": "D", "title": "t", "summary": "s"}
            ]"##,
        )
        .unwrap();
        let rejected = block.normalize_brand_colors();
        assert_eq!(rejected, vec!["brand-blue".to_string()]);

        let ContentBlock::CaseStudies(items) = block else {
            panic!("expected case studies");
        };
        let colors: Vec<_> = items.iter().map(|c| c.brand_color.as_deref()).collect();
        assert_eq!(colors, vec![Some("#000080"), Some("#aabbcc"), None, None]);
    }

    #[test]
    fn serializes_untagged_camel_case() {
        let block = ContentBlock::Faq(vec![FaqEntry {
            question: "Q".to_string(),
            answer_html: "<p>A</p>".to_string(),
        }]);
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value, serde_json::json!([{"question": "Q", "answerHtml": "<p>A</p>"}]));
    }
}
