pub mod error;
pub mod key;
pub mod records;
pub mod structured_data;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::engine::resolve_cards;
use crate::types::CardColors;
pub use error::ContentError;
pub use key::ContentKey;
use records::{CaseStudy, ContentBlock, FaqEntry, HomeContent, ServiceEntry, Testimonial};

/// Typed content blocks keyed by [`ContentKey`], loaded once at startup and
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    blocks: BTreeMap<ContentKey, ContentBlock>,
}

impl ContentRegistry {
    /// Load `<dir>/<key>.json` for every key. All files are required.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ContentError> {
        info!(dir = %dir.display(), "loading content registry");
        let mut registry = Self::default();

        for key in ContentKey::ALL {
            let path = dir.join(key.file_name());
            let source = match std::fs::read_to_string(&path) {
                Ok(source) => source,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    return Err(ContentError::Missing { key, path });
                }
                Err(source) => return Err(ContentError::Io { path, source }),
            };
            registry.insert(key, &source, path)?;
        }

        info!(blocks = registry.blocks.len(), "content registry loaded");
        Ok(registry)
    }

    /// Build a registry from in-memory sources. Keys may be omitted.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (ContentKey, &'a str)>,
    ) -> Result<Self, ContentError> {
        let mut registry = Self::default();
        for (key, source) in sources {
            registry.insert(key, source, PathBuf::from(format!("<memory>/{}", key.file_name())))?;
        }
        Ok(registry)
    }

    fn insert(&mut self, key: ContentKey, source: &str, path: PathBuf) -> Result<(), ContentError> {
        let mut block = ContentBlock::parse(key, source)
            .map_err(|source| ContentError::Parse { key, path: path.clone(), source })?;

        for rejected in block.normalize_brand_colors() {
            warn!(%key, path = %path.display(), color = %rejected, "dropping unrecognized brand color");
        }

        debug!(%key, path = %path.display(), "content block parsed");
        self.blocks.insert(key, block);
        Ok(())
    }

    pub fn get(&self, key: ContentKey) -> Option<&ContentBlock> {
        self.blocks.get(&key)
    }

    pub fn home(&self) -> Option<&HomeContent> {
        match self.get(ContentKey::Home) {
            Some(ContentBlock::Home(home)) => Some(home),
            _ => None,
        }
    }

    pub fn services(&self) -> &[ServiceEntry] {
        match self.get(ContentKey::Services) {
            Some(ContentBlock::Services(items)) => items,
            _ => &[],
        }
    }

    pub fn faq(&self) -> &[FaqEntry] {
        match self.get(ContentKey::Faq) {
            Some(ContentBlock::Faq(items)) => items,
            _ => &[],
        }
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        match self.get(ContentKey::Testimonials) {
            Some(ContentBlock::Testimonials(items)) => items,
            _ => &[],
        }
    }

    pub fn case_studies(&self) -> &[CaseStudy] {
        match self.get(ContentKey::CaseStudies) {
            Some(ContentBlock::CaseStudies(items)) => items,
            _ => &[],
        }
    }

    /// Resolved text/overlay colors for every brand-colored card, services
    /// first, then case studies.
    pub fn card_colors(&self) -> Vec<CardColors> {
        let cards: Vec<(String, Option<String>)> = self
            .services()
            .iter()
            .map(|s| (s.slug.clone(), s.brand_color.clone()))
            .chain(
                self.case_studies()
                    .iter()
                    .map(|c| (c.slug.clone(), c.brand_color.clone())),
            )
            .collect();
        resolve_cards(&cards)
    }

    pub fn block_json(&self, key: ContentKey) -> Result<Value, ContentError> {
        let block = self.get(key).ok_or_else(|| ContentError::Missing {
            key,
            path: PathBuf::from(key.file_name()),
        })?;
        Ok(serde_json::to_value(block)?)
    }

    /// All blocks as one JSON object keyed by content key.
    pub fn to_json(&self) -> Result<Value, ContentError> {
        let mut map = Map::new();
        for (key, block) in &self.blocks {
            map.insert(key.as_str().to_string(), serde_json::to_value(block)?);
        }
        Ok(Value::Object(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    const HOME: &str = r#"{
        "headline": "We build websites that sell",
        "subheadline": "Design and development for ambitious brands",
        "primaryCta": {"label": "Book a call", "href": "/contact"}
    }"#;
    const SERVICES: &str = r##"[
        {"slug": "web-design", "title": "Web design", "summary": "Sites", "brandColor": "#1D4ED8"},
        {"slug": "seo", "title": "SEO", "summary": "Search"}
    ]"##;
    const FAQ: &str = r#"[{"question": "How long?", "answerHtml": "<p>About <b>six</b> weeks.</p>"}]"#;
    const TESTIMONIALS: &str = r#"[{"author": "Ada", "company": "Acme", "quote": "Great."}]"#;
    const CASE_STUDIES: &str = r##"[
        {"slug": "acme", "client": "Acme", "title": "Relaunch", "summary": "s", "brandColor": "white"}
    ]"##;

    fn write_all(dir: &Path) {
        fs::write(dir.join("home.json"), HOME).unwrap();
        fs::write(dir.join("services.json"), SERVICES).unwrap();
        fs::write(dir.join("faq.json"), FAQ).unwrap();
        fs::write(dir.join("testimonials.json"), TESTIMONIALS).unwrap();
        fs::write(dir.join("case-studies.json"), CASE_STUDIES).unwrap();
    }

    #[test]
    fn loads_every_block_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());

        let registry = ContentRegistry::load_from_dir(dir.path()).unwrap();
        assert_eq!(registry.home().unwrap().primary_cta.href, "/contact");
        assert_eq!(registry.home().unwrap().secondary_cta, None);
        assert_eq!(registry.services().len(), 2);
        assert_eq!(registry.faq()[0].question, "How long?");
        assert_eq!(registry.testimonials()[0].company.as_deref(), Some("Acme"));
        assert_eq!(registry.case_studies()[0].slug, "acme");
    }

    #[test]
    fn brand_colors_normalized_on_load() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());
        let registry = ContentRegistry::load_from_dir(dir.path()).unwrap();

        assert_eq!(registry.services()[0].brand_color.as_deref(), Some("#1d4ed8"));
        assert_eq!(registry.case_studies()[0].brand_color.as_deref(), Some("#ffffff"));
    }

    #[test]
    fn missing_file_reports_key() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());
        fs::remove_file(dir.path().join("faq.json")).unwrap();

        let err = ContentRegistry::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Missing { key: ContentKey::Faq, .. }));
        assert!(err.to_string().contains("faq.json"), "{err}");
    }

    #[test]
    fn malformed_file_reports_key_and_path() {
        let dir = tempfile::tempdir().unwrap();
        write_all(dir.path());
        fs::write(dir.path().join("testimonials.json"), "[{\"author\": 1}]").unwrap();

        let err = ContentRegistry::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Parse { key: ContentKey::Testimonials, .. }));
        let message = err.to_string();
        assert!(message.starts_with("invalid testimonials content in"), "{message}");
        assert!(message.contains("testimonials.json"), "{message}");
    }

    #[test]
    fn partial_sources_allowed_in_memory() {
        let registry = ContentRegistry::from_sources([(ContentKey::Faq, FAQ)]).unwrap();
        assert_eq!(registry.faq().len(), 1);
        assert!(registry.home().is_none());
        assert!(registry.services().is_empty());
        assert!(matches!(
            registry.block_json(ContentKey::Home),
            Err(ContentError::Missing { key: ContentKey::Home, .. })
        ));
    }

    #[test]
    fn card_colors_cover_services_then_case_studies() {
        let registry = ContentRegistry::from_sources([
            (ContentKey::Services, SERVICES),
            (ContentKey::CaseStudies, CASE_STUDIES),
        ])
        .unwrap();

        let cards = registry.card_colors();
        let slugs: Vec<_> = cards.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["web-design", "seo", "acme"]);
        assert_eq!(cards[0].colors.mode, "dark");
        // no brand color: dark default
        assert_eq!(cards[1].colors.text_color, "hsl(0, 0%, 95%)");
        assert_eq!(cards[2].colors.mode, "light");
    }

    #[test]
    fn json_is_keyed_by_content_key() {
        let registry = ContentRegistry::from_sources([
            (ContentKey::Faq, FAQ),
            (ContentKey::CaseStudies, CASE_STUDIES),
        ])
        .unwrap();
        let value = registry.to_json().unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["case-studies".to_string(), "faq".to_string()]);
        assert_eq!(value["faq"][0]["answerHtml"], "<p>About <b>six</b> weeks.</p>");
    }
}
