//! Autocomplete suggestions.

use std::collections::HashSet;

use shopsearch_core::types::Product;

const MIN_QUERY_CHARS: usize = 2;
const MAX_SUGGESTIONS: usize = 8;

/// Up to 8 distinct catalog strings containing `query`.
///
/// One pass over the catalog collecting, per product, its title, brand,
/// category, and tags when they contain the query case-insensitively.
/// Deduplicated in encounter order and truncated; not relevance-ranked.
pub fn suggestions(query: &str, catalog: &[Product]) -> Vec<String> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut collected: Vec<String> = Vec::new();

    for product in catalog {
        let fields = [
            product.title.as_str(),
            product.brand.as_str(),
            product.category.as_str(),
        ];
        let candidates = fields
            .into_iter()
            .chain(product.tags.iter().map(String::as_str));
        for candidate in candidates {
            if collected.len() >= MAX_SUGGESTIONS {
                return collected;
            }
            if candidate.to_lowercase().contains(&needle) && seen.insert(candidate) {
                collected.push(candidate.to_string());
            }
        }
    }
    collected
}
