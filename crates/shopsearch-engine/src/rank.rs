//! Multi-field weighted relevance.

use shopsearch_core::types::Product;

use crate::fuzzy::match_score;

// Field weights. Title and brand hits matter far more than description
// hits; the ordering is load-bearing for reproducible ranking.
const TITLE_WEIGHT: f64 = 3.0;
const BRAND_WEIGHT: f64 = 2.0;
const CATEGORY_WEIGHT: f64 = 1.5;
const SUBCATEGORY_WEIGHT: f64 = 1.2;
const DESCRIPTION_WEIGHT: f64 = 0.5;
const TAG_WEIGHT: f64 = 1.5;
const FEATURE_WEIGHT: f64 = 1.2;

/// Weighted sum of per-field fuzzy scores for one product.
///
/// Absent optional fields contribute 0. For `tags` and `features` the best
/// single entry counts. A total of 0 means the product does not match the
/// query at all and is dropped from text-search results.
pub fn relevance(query: &str, product: &Product) -> f64 {
    let title = match_score(query, &product.title) * TITLE_WEIGHT;
    let brand = match_score(query, &product.brand) * BRAND_WEIGHT;
    let category = match_score(query, &product.category) * CATEGORY_WEIGHT;
    let subcategory = product
        .subcategory
        .as_deref()
        .map_or(0.0, |s| match_score(query, s) * SUBCATEGORY_WEIGHT);
    let description = match_score(query, &product.description) * DESCRIPTION_WEIGHT;
    let tags = best_match(query, &product.tags) * TAG_WEIGHT;
    let features = best_match(query, &product.features) * FEATURE_WEIGHT;

    title + brand + category + subcategory + description + tags + features
}

fn best_match(query: &str, values: &[String]) -> f64 {
    values
        .iter()
        .map(|v| match_score(query, v))
        .fold(0.0, f64::max)
}
