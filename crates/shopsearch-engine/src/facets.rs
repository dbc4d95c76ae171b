//! Facet aggregation for filter UI controls.

use std::collections::HashSet;

use shopsearch_core::types::{FacetOption, FilterOptions, Product};

/// Features facet is capped to the first 20 distinct values in catalog
/// order, not the 20 most frequent. Kept for compatibility with the
/// original behavior.
const FEATURE_CAP: usize = 20;

/// Distinct categories, subcategories, brands, and features with live
/// product counts, each in first-seen catalog order.
pub fn filter_options(catalog: &[Product]) -> FilterOptions {
    let categories = distinct(catalog.iter().map(|p| p.category.as_str()));
    let subcategories = distinct(catalog.iter().filter_map(|p| p.subcategory.as_deref()));
    let brands = distinct(catalog.iter().map(|p| p.brand.as_str()));
    let mut features = distinct(catalog.iter().flat_map(|p| p.features.iter().map(String::as_str)));
    features.truncate(FEATURE_CAP);

    FilterOptions {
        categories: categories
            .into_iter()
            .map(|value| FacetOption {
                id: value.to_string(),
                name: display_case(value),
                count: catalog.iter().filter(|p| p.category == value).count(),
            })
            .collect(),
        subcategories: subcategories
            .into_iter()
            .map(|value| FacetOption {
                id: value.to_string(),
                name: value.to_string(),
                count: catalog
                    .iter()
                    .filter(|p| p.subcategory.as_deref() == Some(value))
                    .count(),
            })
            .collect(),
        brands: brands
            .into_iter()
            .map(|value| FacetOption {
                id: slug(value),
                name: value.to_string(),
                count: catalog.iter().filter(|p| p.brand == value).count(),
            })
            .collect(),
        features: features
            .into_iter()
            .map(|value| FacetOption {
                id: slug(value),
                name: value.to_string(),
                count: catalog
                    .iter()
                    .filter(|p| p.features.iter().any(|f| f == value))
                    .count(),
            })
            .collect(),
    }
}

/// Distinct values in first-seen order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for value in values {
        if seen.insert(value) {
            ordered.push(value);
        }
    }
    ordered
}

/// Lowercase with whitespace runs collapsed to hyphens.
fn slug(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Uppercase the first character, leave the rest untouched.
fn display_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
