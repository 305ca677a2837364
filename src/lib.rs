#[macro_use]
extern crate napi_derive;

pub mod content;
pub mod engine;
pub mod logging;
pub mod math;
pub mod richtext;
pub mod types;

use std::path::Path;
use std::sync::{Arc, RwLock};

use content::{ContentError, ContentKey, ContentRegistry};
use types::{CardColors, ContrastCheck, ContrastColors, RichTextDocument};

/// Populated by `loadContent`; read by every other content export.
static REGISTRY: RwLock<Option<Arc<ContentRegistry>>> = RwLock::new(None);

fn to_napi_error(err: ContentError) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}

fn loaded_registry() -> napi::Result<Arc<ContentRegistry>> {
    let guard = REGISTRY
        .read()
        .map_err(|_| napi::Error::from_reason("content registry lock poisoned"))?;
    guard.clone().ok_or_else(|| to_napi_error(ContentError::NotLoaded))
}

#[napi]
pub fn health_check() -> String {
    "agency-site-native ok".to_string()
}

#[napi]
pub fn init_logging(level: Option<String>) {
    logging::init(level.as_deref());
}

#[napi]
pub fn get_contrast_colors(bg_color: Option<String>) -> ContrastColors {
    math::resolver::get_contrast_colors(bg_color.as_deref())
}

#[napi]
pub fn get_contrast_color(bg_color: Option<String>) -> String {
    math::resolver::get_contrast_color(bg_color.as_deref()).to_string()
}

#[napi]
pub fn get_contrast_colors_batch(bg_colors: Vec<Option<String>>) -> Vec<ContrastColors> {
    engine::resolve_batch(&bg_colors)
}

/// `null` when either color is unparseable.
#[napi]
pub fn check_contrast(
    text_color: String,
    bg_color: String,
    is_large_text: Option<bool>,
) -> Option<ContrastCheck> {
    math::checker::check_contrast(&text_color, &bg_color, is_large_text.unwrap_or(false))
}

#[napi]
pub fn normalize_color(value: String) -> Option<String> {
    math::color_parse::normalize_css_color(&value)
}

#[napi]
pub fn split_rich_text(html: String, heading_level: Option<u32>) -> RichTextDocument {
    let level = heading_level
        .map(|l| l.clamp(1, 6) as u8)
        .unwrap_or(richtext::DEFAULT_SECTION_LEVEL);
    richtext::split_rich_text(&html, level)
}

#[napi]
pub fn extract_list_items(html: String) -> Vec<String> {
    richtext::extract_list_items(&html)
}

#[napi]
pub fn rich_text_excerpt(html: String, max_chars: u32) -> String {
    richtext::excerpt(&html, max_chars as usize)
}

/// Load every content file under `content_dir`, keep the registry for later
/// calls, and return all blocks keyed by content key.
#[napi]
pub fn load_content(content_dir: String) -> napi::Result<serde_json::Value> {
    let registry = ContentRegistry::load_from_dir(Path::new(&content_dir)).map_err(to_napi_error)?;
    let json = registry.to_json().map_err(to_napi_error)?;

    let mut slot = REGISTRY
        .write()
        .map_err(|_| napi::Error::from_reason("content registry lock poisoned"))?;
    *slot = Some(Arc::new(registry));
    Ok(json)
}

#[napi]
pub fn get_content_block(key: String) -> napi::Result<serde_json::Value> {
    let key: ContentKey = key.parse().map_err(to_napi_error)?;
    loaded_registry()?.block_json(key).map_err(to_napi_error)
}

#[napi]
pub fn get_card_colors() -> napi::Result<Vec<CardColors>> {
    Ok(loaded_registry()?.card_colors())
}

#[napi]
pub fn faq_structured_data() -> napi::Result<serde_json::Value> {
    let registry = loaded_registry()?;
    Ok(content::structured_data::faq_page(registry.faq()))
}
