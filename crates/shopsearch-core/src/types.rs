//! Domain types shared by the engine and the catalog loader.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

pub type ProductId = String;
pub type Specs = HashMap<String, String>;

/// One variant axis of a product (e.g. color or size) with its options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Variant {
    #[serde(rename = "type")]
    pub kind: String,
    pub options: Vec<String>,
}

/// An immutable catalog record, supplied by the caller.
///
/// - `id`: unique within one catalog snapshot
/// - `price`/`list_price`: current and reference price; never validated
/// - `badges`/`shipping`: free-text merchandising labels
/// - optional descriptive fields (`subcategory`, `tags`, `features`,
///   `specs`, `variants`) default to empty and contribute neutrally to
///   scoring and filtering when absent
///
/// The engine never mutates a `Product`; per-query relevance scores are
/// carried in a parallel structure, not written back onto records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub brand: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub price: f64,
    pub list_price: f64,
    pub rating: f64,
    pub reviews: u64,
    #[serde(default)]
    pub badges: Vec<String>,
    pub shipping: String,
    pub stock: u64,
    #[serde(default)]
    pub variants: Vec<Variant>,
    pub seller: String,
    #[serde(default)]
    pub specs: Specs,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Caller-owned, request-scoped filter set.
///
/// Membership fields use OR-within-field semantics: a product matches the
/// field when it matches any listed value. Empty fields are no-ops. The
/// price range is inclusive at both ends and always applied; `rating` is
/// a minimum threshold with `0.0` meaning "no rating filter".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
    pub brands: Vec<String>,
    pub price_range: (f64, f64),
    pub rating: f64,
    pub shipping: Vec<String>,
    pub availability: Vec<String>,
    pub features: Vec<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            subcategories: Vec::new(),
            brands: Vec::new(),
            price_range: (0.0, f64::MAX),
            rating: 0.0,
            shipping: Vec::new(),
            availability: Vec::new(),
            features: Vec::new(),
        }
    }
}

/// Total order selected by the caller for result presentation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Popularity,
    Newest,
    Discount,
    Alphabetical,
}

impl SortOption {
    pub const ALL: [SortOption; 8] = [
        SortOption::Relevance,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Rating,
        SortOption::Popularity,
        SortOption::Newest,
        SortOption::Discount,
        SortOption::Alphabetical,
    ];

    /// The kebab-case tag used on the wire and on the CLI.
    pub fn tag(self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Rating => "rating",
            SortOption::Popularity => "popularity",
            SortOption::Newest => "newest",
            SortOption::Discount => "discount",
            SortOption::Alphabetical => "alphabetical",
        }
    }
}

impl FromStr for SortOption {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|opt| opt.tag() == s)
            .ok_or_else(|| crate::error::Error::UnknownSort(s.to_string()))
    }
}

/// One distinct value of a catalog field with its live product count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetOption {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// Aggregated facet values that drive filter UI controls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOptions {
    pub categories: Vec<FacetOption>,
    pub subcategories: Vec<FacetOption>,
    pub brands: Vec<FacetOption>,
    pub features: Vec<FacetOption>,
}
