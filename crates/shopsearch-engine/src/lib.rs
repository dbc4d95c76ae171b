//! shopsearch-engine
//!
//! Pure in-memory product search: fuzzy field scoring, weighted relevance,
//! a filter pipeline, sort comparators, facet aggregation, and query
//! suggestions. Every function takes the catalog by reference and returns
//! new collections; nothing here mutates caller state.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod engine;
pub mod facets;
pub mod filter;
pub mod fuzzy;
pub mod rank;
pub mod sort;
pub mod suggest;

pub use engine::CatalogEngine;
pub use facets::filter_options;
pub use filter::{filter_products, Ranked};
pub use fuzzy::match_score;
pub use rank::relevance;
pub use sort::sort_products;
pub use suggest::suggestions;
