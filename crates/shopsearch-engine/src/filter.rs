//! The filter pipeline.
//!
//! Stage 1 ranks by relevance when a query is present; stages 2..9 are
//! independent AND-of-OR predicates that narrow the result. Scores ride in
//! a parallel [`Ranked`] structure so catalog records are never touched.

use std::cmp::Ordering;

use shopsearch_core::types::{FilterState, Product};
use tracing::debug;

use crate::rank::relevance;

/// A catalog record paired with its per-query relevance score.
///
/// `score` is `None` when no query was given; the pair borrows the catalog
/// entry instead of carrying a derived field on the record itself.
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a> {
    pub product: &'a Product,
    pub score: Option<f64>,
}

/// Rank and filter a catalog snapshot for one request.
///
/// With a non-empty `query` the result is in descending relevance order
/// and products scoring 0 are dropped; otherwise catalog order is kept.
/// Empty filter fields are no-ops; the price range is always applied.
pub fn filter_products<'a>(
    catalog: &'a [Product],
    query: &str,
    filters: &FilterState,
) -> Vec<Ranked<'a>> {
    let mut results: Vec<Ranked<'a>> = if query.is_empty() {
        catalog
            .iter()
            .map(|product| Ranked { product, score: None })
            .collect()
    } else {
        let mut scored: Vec<Ranked<'a>> = catalog
            .iter()
            .filter_map(|product| {
                let score = relevance(query, product);
                (score > 0.0).then_some(Ranked {
                    product,
                    score: Some(score),
                })
            })
            .collect();
        // Stable: equal scores keep catalog order.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored
    };

    if !filters.categories.is_empty() {
        results.retain(|r| filters.categories.iter().any(|c| *c == r.product.category));
    }

    if !filters.subcategories.is_empty() {
        results.retain(|r| {
            r.product
                .subcategory
                .as_deref()
                .is_some_and(|sub| filters.subcategories.iter().any(|f| f == sub))
        });
    }

    // Exact or partial brand match, both case-insensitive.
    if !filters.brands.is_empty() {
        results.retain(|r| {
            let brand = r.product.brand.to_lowercase();
            filters
                .brands
                .iter()
                .any(|wanted| brand.contains(&wanted.to_lowercase()))
        });
    }

    let (min_price, max_price) = filters.price_range;
    results.retain(|r| r.product.price >= min_price && r.product.price <= max_price);

    if filters.rating > 0.0 {
        results.retain(|r| r.product.rating >= filters.rating);
    }

    if !filters.shipping.is_empty() {
        results.retain(|r| {
            filters
                .shipping
                .iter()
                .any(|tag| shipping_matches(tag, r.product))
        });
    }

    if !filters.availability.is_empty() {
        results.retain(|r| {
            filters
                .availability
                .iter()
                .any(|tag| availability_matches(tag, r.product))
        });
    }

    if !filters.features.is_empty() {
        results.retain(|r| {
            filters.features.iter().any(|wanted| {
                let wanted = wanted.to_lowercase();
                r.product
                    .features
                    .iter()
                    .any(|feature| feature.to_lowercase().contains(&wanted))
            })
        });
    }

    debug!(
        query,
        kept = results.len(),
        total = catalog.len(),
        "filter pipeline finished"
    );
    results
}

fn shipping_matches(tag: &str, product: &Product) -> bool {
    match tag {
        "free" => product.shipping == "Free" || has_badge(product, "Free Shipping"),
        "prime" => product.shipping == "Prime" || has_badge(product, "Prime"),
        "fast" => product.shipping == "Same Day" || has_badge(product, "Fast Shipping"),
        _ => false,
    }
}

fn availability_matches(tag: &str, product: &Product) -> bool {
    match tag {
        "in-stock" => product.stock > 0,
        "on-sale" => product.list_price > product.price,
        "new" => has_badge(product, "New") || has_badge(product, "New Arrivals"),
        "bestseller" => has_badge(product, "Best Seller") || has_badge(product, "Bestseller"),
        _ => false,
    }
}

fn has_badge(product: &Product, badge: &str) -> bool {
    product.badges.iter().any(|b| b == badge)
}
