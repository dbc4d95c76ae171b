use crate::types::{FilterOptions, FilterState, Product, SortOption};

/// The search surface consumed by a presentation layer.
///
/// All methods are pure with respect to the catalog: implementations
/// return freshly allocated collections and never hand out aliases into
/// their own state, so concurrent callers need no coordination.
pub trait ProductSearch: Send + Sync {
    /// Filter, rank, sort, and truncate the catalog for one request.
    fn search(
        &self,
        query: &str,
        filters: &FilterState,
        sort: SortOption,
        limit: usize,
    ) -> Vec<Product>;

    /// Up to 8 distinct autocomplete strings for a partial query.
    fn suggestions(&self, query: &str) -> Vec<String>;

    /// Distinct facet values with live counts over the full catalog.
    fn filter_options(&self) -> FilterOptions;
}
