use std::env;
use std::path::PathBuf;

use shopsearch_core::catalog::CatalogLoader;
use shopsearch_core::config::Config;
use shopsearch_core::traits::ProductSearch;
use shopsearch_core::types::FacetOption;
use shopsearch_engine::CatalogEngine;

fn print_group(label: &str, options: &[FacetOption]) {
    println!("\n{label}:");
    if options.is_empty() {
        println!("  (none)");
        return;
    }
    for option in options {
        println!("  {:<30} {:>4} products  (id: {})", option.name, option.count, option.id);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: could not load config ({e}), using defaults");
        Config::default()
    });
    let catalog_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.fixture_dir());

    let catalog = CatalogLoader::new().load_dir(&catalog_dir)?;
    let engine = CatalogEngine::new(catalog)?;
    println!("📊 Filter options over {} products", engine.len());

    let options = engine.filter_options();
    print_group("Categories", &options.categories);
    print_group("Subcategories", &options.subcategories);
    print_group("Brands", &options.brands);
    print_group("Features (first 20)", &options.features);
    Ok(())
}
