use shopsearch_core::traits::ProductSearch;
use shopsearch_core::types::{FilterState, Product, SortOption};
use shopsearch_engine::{
    filter_products, filter_options, sort_products, suggestions, CatalogEngine,
};

fn catalog() -> Vec<Product> {
    serde_json::from_value(serde_json::json!([
        {
            "id": "1", "title": "Wireless Bluetooth Headphones", "brand": "SoundCore",
            "category": "electronics", "subcategory": "audio",
            "price": 79.99, "listPrice": 129.99, "rating": 4.5, "reviews": 2340,
            "badges": ["Best Seller", "Free Shipping"], "shipping": "Free", "stock": 15,
            "seller": "SoundCore Official",
            "description": "Over-ear headphones with noise cancelling.",
            "features": ["Noise Cancelling", "40h Battery"], "tags": ["bluetooth", "audio"]
        },
        {
            "id": "2", "title": "Bluetooth Speaker", "brand": "SoundCore",
            "category": "electronics", "subcategory": "audio",
            "price": 49.99, "listPrice": 59.99, "rating": 4.0, "reviews": 890,
            "badges": ["New"], "shipping": "Prime", "stock": 0,
            "seller": "SoundCore Official", "description": "Portable speaker.",
            "features": ["Waterproof"], "tags": ["audio"]
        },
        {
            "id": "3", "title": "Garden Hose", "brand": "GreenWorks",
            "category": "garden",
            "price": 19.99, "listPrice": 19.99, "rating": 3.5, "reviews": 45,
            "shipping": "Free", "stock": 30,
            "seller": "GreenWorks", "description": "50 ft expandable hose."
        },
        {
            "id": "4", "title": "Apple Lightning Cable", "brand": "Apple Inc.",
            "category": "electronics", "subcategory": "accessories",
            "price": 15.0, "listPrice": 25.0, "rating": 4.2, "reviews": 10200,
            "badges": ["Bestseller"], "shipping": "Same Day", "stock": 120,
            "seller": "Apple", "description": "1m charging cable.",
            "features": ["MFi Certified"], "tags": ["cable"]
        },
        {
            "id": "10", "title": "Espresso Machine", "brand": "Brewtiful",
            "category": "kitchen",
            "price": 249.0, "listPrice": 399.0, "rating": 4.8, "reviews": 560,
            "badges": ["Prime"], "shipping": "Prime", "stock": 3,
            "seller": "Brewtiful", "description": "15 bar pump espresso maker.",
            "features": ["15 Bar Pump"], "tags": ["coffee"]
        }
    ]))
    .expect("catalog fixture")
}

fn ids(hits: &[shopsearch_engine::Ranked<'_>]) -> Vec<String> {
    hits.iter().map(|h| h.product.id.clone()).collect()
}

#[test]
fn no_query_no_filters_returns_catalog_in_order() {
    let catalog = catalog();
    let hits = filter_products(&catalog, "", &FilterState::default());
    assert_eq!(ids(&hits), vec!["1", "2", "3", "4", "10"]);
    assert!(hits.iter().all(|h| h.score.is_none()));
}

#[test]
fn filtering_is_idempotent() {
    let catalog = catalog();
    let filters = FilterState {
        categories: vec!["electronics".to_string()],
        ..FilterState::default()
    };
    let first = ids(&filter_products(&catalog, "bluetooth", &filters));
    let second = ids(&filter_products(&catalog, "bluetooth", &filters));
    assert_eq!(first, second);
}

#[test]
fn bluetooth_query_ranks_headphones_then_speaker_and_drops_hose() {
    let catalog = catalog();
    let hits = filter_products(&catalog, "bluetooth", &FilterState::default());
    // "1" carries an exact "bluetooth" tag on top of its interior title
    // match, which outranks the bare title-prefix match of "2".
    assert_eq!(ids(&hits), vec!["1", "2"]);
    let scores: Vec<f64> = hits.iter().map(|h| h.score.unwrap_or(0.0)).collect();
    assert!(scores[0] > scores[1]);
    assert!(scores[1] > 0.0);
}

#[test]
fn title_prefix_outranks_interior_when_nothing_else_differs() {
    let catalog: Vec<Product> = serde_json::from_value(serde_json::json!([
        {
            "id": "1", "title": "Wireless Bluetooth Headphones", "brand": "A",
            "category": "c", "price": 79.99, "listPrice": 79.99, "rating": 4.5,
            "reviews": 1, "shipping": "Free", "stock": 1, "seller": "s", "description": "d"
        },
        {
            "id": "2", "title": "Bluetooth Speaker", "brand": "A",
            "category": "c", "price": 49.99, "listPrice": 49.99, "rating": 4.0,
            "reviews": 1, "shipping": "Free", "stock": 1, "seller": "s", "description": "d"
        }
    ]))
    .expect("fixture");
    let hits = filter_products(&catalog, "bluetooth", &FilterState::default());
    // Title-only catalog: the prefix match wins the relevance tie-break.
    assert_eq!(ids(&hits), vec!["2", "1"]);
}

#[test]
fn rating_filter_is_a_minimum_threshold() {
    let catalog = catalog();
    let filters = FilterState {
        rating: 4.0,
        ..FilterState::default()
    };
    let hits = filter_products(&catalog, "", &filters);
    assert_eq!(ids(&hits), vec!["1", "2", "4", "10"], "3.5 is below the bar");
}

#[test]
fn price_range_is_inclusive_at_both_ends() {
    let catalog = catalog();
    let filters = FilterState {
        price_range: (19.99, 49.99),
        ..FilterState::default()
    };
    let hits = filter_products(&catalog, "", &filters);
    assert_eq!(ids(&hits), vec!["2", "3"]);
}

#[test]
fn inverted_price_range_yields_empty_not_error() {
    let catalog = catalog();
    let filters = FilterState {
        price_range: (100.0, 10.0),
        ..FilterState::default()
    };
    assert!(filter_products(&catalog, "", &filters).is_empty());
}

#[test]
fn brand_filter_matches_partial_names_case_insensitively() {
    let catalog = catalog();
    let filters = FilterState {
        brands: vec!["apple".to_string()],
        ..FilterState::default()
    };
    assert_eq!(ids(&filter_products(&catalog, "", &filters)), vec!["4"]);
}

#[test]
fn shipping_tags_map_to_shipping_class_or_badges() {
    let catalog = catalog();
    let fast = FilterState {
        shipping: vec!["fast".to_string()],
        ..FilterState::default()
    };
    assert_eq!(ids(&filter_products(&catalog, "", &fast)), vec!["4"]);

    let prime = FilterState {
        shipping: vec!["prime".to_string()],
        ..FilterState::default()
    };
    assert_eq!(ids(&filter_products(&catalog, "", &prime)), vec!["2", "10"]);

    let free = FilterState {
        shipping: vec!["free".to_string()],
        ..FilterState::default()
    };
    assert_eq!(ids(&filter_products(&catalog, "", &free)), vec!["1", "3"]);

    // Badge fallback: paid shipping class, but a "Free Shipping" badge
    // still satisfies the "free" tag.
    let badge_only: Vec<Product> = serde_json::from_value(serde_json::json!([
        {
            "id": "1", "title": "a", "brand": "b", "category": "c", "price": 1.0,
            "listPrice": 1.0, "rating": 4.0, "reviews": 1, "shipping": "Standard",
            "badges": ["Free Shipping"], "stock": 1, "seller": "s", "description": "d"
        },
        {
            "id": "2", "title": "a", "brand": "b", "category": "c", "price": 1.0,
            "listPrice": 1.0, "rating": 4.0, "reviews": 1, "shipping": "Standard",
            "stock": 1, "seller": "s", "description": "d"
        }
    ]))
    .expect("fixture");
    assert_eq!(ids(&filter_products(&badge_only, "", &free)), vec!["1"]);
}

#[test]
fn availability_tags_cover_stock_sale_and_badges() {
    let catalog = catalog();
    let in_stock = FilterState {
        availability: vec!["in-stock".to_string()],
        ..FilterState::default()
    };
    assert_eq!(
        ids(&filter_products(&catalog, "", &in_stock)),
        vec!["1", "3", "4", "10"]
    );

    let on_sale = FilterState {
        availability: vec!["on-sale".to_string()],
        ..FilterState::default()
    };
    assert_eq!(
        ids(&filter_products(&catalog, "", &on_sale)),
        vec!["1", "2", "4", "10"]
    );

    let bestseller = FilterState {
        availability: vec!["bestseller".to_string()],
        ..FilterState::default()
    };
    assert_eq!(
        ids(&filter_products(&catalog, "", &bestseller)),
        vec!["1", "4"]
    );

    let new = FilterState {
        availability: vec!["new".to_string()],
        ..FilterState::default()
    };
    assert_eq!(ids(&filter_products(&catalog, "", &new)), vec!["2"]);

    // "New Arrivals" is an accepted spelling of the "new" badge.
    let arrivals: Vec<Product> = serde_json::from_value(serde_json::json!([
        {
            "id": "1", "title": "a", "brand": "b", "category": "c", "price": 1.0,
            "listPrice": 1.0, "rating": 4.0, "reviews": 1, "shipping": "Free",
            "badges": ["New Arrivals"], "stock": 1, "seller": "s", "description": "d"
        },
        {
            "id": "2", "title": "a", "brand": "b", "category": "c", "price": 1.0,
            "listPrice": 1.0, "rating": 4.0, "reviews": 1, "shipping": "Free",
            "badges": ["Old Faithful"], "stock": 1, "seller": "s", "description": "d"
        }
    ]))
    .expect("fixture");
    assert_eq!(ids(&filter_products(&arrivals, "", &new)), vec!["1"]);
}

#[test]
fn feature_filter_is_substring_on_product_features() {
    let catalog = catalog();
    let filters = FilterState {
        features: vec!["noise".to_string()],
        ..FilterState::default()
    };
    assert_eq!(ids(&filter_products(&catalog, "", &filters)), vec!["1"]);

    // Product without features never matches a feature filter.
    let hose = FilterState {
        features: vec!["hose".to_string()],
        ..FilterState::default()
    };
    assert!(filter_products(&catalog, "", &hose).is_empty());
}

#[test]
fn price_low_sort_is_non_decreasing() {
    let catalog = catalog();
    let hits = filter_products(&catalog, "", &FilterState::default());
    let sorted = sort_products(&hits, SortOption::PriceLow);
    assert_eq!(ids(&sorted), vec!["4", "3", "2", "1", "10"]);
    for pair in sorted.windows(2) {
        assert!(pair[0].product.price <= pair[1].product.price);
    }
}

#[test]
fn discount_sort_is_non_increasing() {
    let catalog = catalog();
    let hits = filter_products(&catalog, "", &FilterState::default());
    let sorted = sort_products(&hits, SortOption::Discount);
    let discount = |p: &Product| {
        if p.list_price <= 0.0 {
            0.0
        } else {
            (p.list_price - p.price) / p.list_price
        }
    };
    for pair in sorted.windows(2) {
        assert!(discount(pair[0].product) >= discount(pair[1].product));
    }
}

#[test]
fn rating_sort_breaks_ties_by_review_count() {
    let catalog: Vec<Product> = serde_json::from_value(serde_json::json!([
        {
            "id": "1", "title": "a", "brand": "b", "category": "c", "price": 1.0,
            "listPrice": 1.0, "rating": 4.5, "reviews": 10, "shipping": "Free",
            "stock": 1, "seller": "s", "description": "d"
        },
        {
            "id": "2", "title": "a", "brand": "b", "category": "c", "price": 1.0,
            "listPrice": 1.0, "rating": 4.5, "reviews": 900, "shipping": "Free",
            "stock": 1, "seller": "s", "description": "d"
        }
    ]))
    .expect("fixture");
    let hits = filter_products(&catalog, "", &FilterState::default());
    assert_eq!(ids(&sort_products(&hits, SortOption::Rating)), vec!["2", "1"]);
}

#[test]
fn newest_sorts_by_numeric_id_descending() {
    let catalog = catalog();
    let hits = filter_products(&catalog, "", &FilterState::default());
    assert_eq!(
        ids(&sort_products(&hits, SortOption::Newest)),
        vec!["10", "4", "3", "2", "1"]
    );
}

#[test]
fn alphabetical_sorts_by_title() {
    let catalog = catalog();
    let hits = filter_products(&catalog, "", &FilterState::default());
    assert_eq!(
        ids(&sort_products(&hits, SortOption::Alphabetical)),
        vec!["4", "2", "10", "3", "1"]
    );
}

#[test]
fn popularity_sorts_by_reviews() {
    let catalog = catalog();
    let hits = filter_products(&catalog, "", &FilterState::default());
    assert_eq!(
        ids(&sort_products(&hits, SortOption::Popularity)),
        vec!["4", "1", "2", "10", "3"]
    );
}

#[test]
fn relevance_sort_without_scores_preserves_input_order() {
    let catalog = catalog();
    let hits = filter_products(&catalog, "", &FilterState::default());
    assert_eq!(ids(&sort_products(&hits, SortOption::Relevance)), ids(&hits));
}

#[test]
fn sorting_never_mutates_its_input() {
    let catalog = catalog();
    let hits = filter_products(&catalog, "", &FilterState::default());
    let before = ids(&hits);
    let _ = sort_products(&hits, SortOption::PriceHigh);
    let _ = sort_products(&hits, SortOption::Alphabetical);
    assert_eq!(ids(&hits), before);
}

#[test]
fn suggestions_match_titles_brands_categories_and_tags() {
    let catalog = catalog();
    let got = suggestions("bl", &catalog);
    assert!(got.contains(&"Wireless Bluetooth Headphones".to_string()));
    assert!(got.contains(&"Bluetooth Speaker".to_string()));
    assert!(!got.iter().any(|s| s.contains("Garden Hose")));
    assert!(got.len() <= 8);
}

#[test]
fn facet_counts_cover_the_whole_catalog() {
    let catalog = catalog();
    let options = filter_options(&catalog);

    let category_total: usize = options.categories.iter().map(|c| c.count).sum();
    assert_eq!(category_total, catalog.len());

    let electronics = options
        .categories
        .iter()
        .find(|c| c.id == "electronics")
        .expect("electronics facet");
    assert_eq!(electronics.name, "Electronics");
    assert_eq!(electronics.count, 3);

    let apple = options
        .brands
        .iter()
        .find(|b| b.name == "Apple Inc.")
        .expect("apple facet");
    assert_eq!(apple.id, "apple-inc.");
    assert_eq!(apple.count, 1);
}

#[test]
fn engine_facade_filters_sorts_and_truncates() {
    let engine = CatalogEngine::new(catalog()).expect("engine");
    let top = engine.search("bluetooth", &FilterState::default(), SortOption::Relevance, 1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, "1");

    // Engine output is a copy; the snapshot itself keeps catalog order.
    assert_eq!(engine.products()[0].id, "1");
    assert_eq!(engine.len(), 5);
}

#[test]
fn engine_rejects_duplicate_ids() {
    let mut products = catalog();
    let mut dup = products[0].clone();
    dup.title = "Different title, same id".to_string();
    products.push(dup);
    assert!(CatalogEngine::new(products).is_err());
}
