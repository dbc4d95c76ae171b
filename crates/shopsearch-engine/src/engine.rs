//! Catalog-owning facade over the pure search functions.

use shopsearch_core::catalog::ensure_unique_ids;
use shopsearch_core::error::Result;
use shopsearch_core::traits::ProductSearch;
use shopsearch_core::types::{FilterOptions, FilterState, Product, SortOption};
use tracing::debug;

use crate::facets;
use crate::filter::filter_products;
use crate::sort::sort_products;
use crate::suggest;

/// Owns one catalog snapshot and serves requests against it.
///
/// The engine holds the snapshot immutably; every call returns fresh
/// collections, so it can be shared across threads without locking.
pub struct CatalogEngine {
    products: Vec<Product>,
}

impl CatalogEngine {
    /// Wrap a catalog snapshot, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        ensure_unique_ids(&products)?;
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductSearch for CatalogEngine {
    fn search(
        &self,
        query: &str,
        filters: &FilterState,
        sort: SortOption,
        limit: usize,
    ) -> Vec<Product> {
        let hits = filter_products(&self.products, query, filters);
        let sorted = sort_products(&hits, sort);
        debug!(
            query,
            sort = sort.tag(),
            hits = sorted.len(),
            limit,
            "search request served"
        );
        sorted
            .into_iter()
            .take(limit)
            .map(|hit| hit.product.clone())
            .collect()
    }

    fn suggestions(&self, query: &str) -> Vec<String> {
        suggest::suggestions(query, &self.products)
    }

    fn filter_options(&self) -> FilterOptions {
        facets::filter_options(&self.products)
    }
}
