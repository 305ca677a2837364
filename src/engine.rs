use rayon::prelude::*;

use crate::math::resolver::get_contrast_colors;
use crate::types::{CardColors, ContrastColors};

/// Resolve text/overlay colors for many backgrounds in parallel.
///
/// Each background is independent, so Rayon's `par_iter()` fans them out with
/// no shared state. Output order matches input order.
///
/// This is the entry point for pages that render a grid of CMS cards.
pub fn resolve_batch(bg_colors: &[Option<String>]) -> Vec<ContrastColors> {
    bg_colors
        .par_iter()
        .map(|bg| get_contrast_colors(bg.as_deref()))
        .collect()
}

/// Same as [`resolve_batch`], keeping each card's slug alongside its colors.
pub fn resolve_cards(cards: &[(String, Option<String>)]) -> Vec<CardColors> {
    cards
        .par_iter()
        .map(|(slug, brand_color)| CardColors {
            slug: slug.clone(),
            brand_color: brand_color.clone(),
            colors: get_contrast_colors(brand_color.as_deref()),
        })
        .collect()
}
