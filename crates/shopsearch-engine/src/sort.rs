//! Sort comparators over ranked results.

use std::cmp::Ordering;

use shopsearch_core::types::{Product, SortOption};

use crate::filter::Ranked;

/// Return a sorted copy of `hits`; the input is never reordered.
///
/// All sorts are stable, so ties keep the incoming order. `Relevance`
/// falls back to the incoming order when no hit carries a score (no query
/// was given).
pub fn sort_products<'a>(hits: &[Ranked<'a>], sort_by: SortOption) -> Vec<Ranked<'a>> {
    let mut sorted = hits.to_vec();
    match sort_by {
        SortOption::PriceLow => {
            sorted.sort_by(|a, b| cmp_f64(a.product.price, b.product.price));
        }
        SortOption::PriceHigh => {
            sorted.sort_by(|a, b| cmp_f64(b.product.price, a.product.price));
        }
        SortOption::Rating => {
            sorted.sort_by(|a, b| {
                cmp_f64(b.product.rating, a.product.rating)
                    .then_with(|| b.product.reviews.cmp(&a.product.reviews))
            });
        }
        SortOption::Popularity => {
            sorted.sort_by(|a, b| b.product.reviews.cmp(&a.product.reviews));
        }
        SortOption::Discount => {
            sorted.sort_by(|a, b| cmp_f64(discount_percent(b.product), discount_percent(a.product)));
        }
        SortOption::Alphabetical => {
            // Unicode code-point order on the casefolded title; stands in
            // for locale collation.
            sorted.sort_by(|a, b| {
                a.product
                    .title
                    .to_lowercase()
                    .cmp(&b.product.title.to_lowercase())
            });
        }
        SortOption::Newest => {
            // Recency proxy only: ids with a numeric prefix sort by it,
            // ids without one sort oldest. See the catalog docs for the
            // caveat on id assignment.
            sorted.sort_by(|a, b| numeric_id(&b.product.id).cmp(&numeric_id(&a.product.id)));
        }
        SortOption::Relevance => {
            if sorted.iter().any(|hit| hit.score.is_some()) {
                sorted.sort_by(|a, b| {
                    cmp_f64(b.score.unwrap_or(0.0), a.score.unwrap_or(0.0))
                });
            }
        }
    }
    sorted
}

/// Percentage discount against the reference price; a missing or zero
/// reference price counts as no discount.
pub fn discount_percent(product: &Product) -> f64 {
    if product.list_price <= 0.0 {
        return 0.0;
    }
    (product.list_price - product.price) / product.list_price * 100.0
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn numeric_id(id: &str) -> Option<u64> {
    let digits: &str = {
        let end = id
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(id.len(), |(i, _)| i);
        &id[..end]
    };
    digits.parse().ok()
}
