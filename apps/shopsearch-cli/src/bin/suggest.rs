use std::env;
use std::path::PathBuf;

use shopsearch_core::catalog::CatalogLoader;
use shopsearch_core::config::Config;
use shopsearch_core::traits::ProductSearch;
use shopsearch_engine::CatalogEngine;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <partial_query> [catalog_dir]", args[0]);
        eprintln!("Example: {} 'blue'", args[0]);
        std::process::exit(1);
    }
    let query = &args[1];

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: could not load config ({e}), using defaults");
        Config::default()
    });
    let catalog_dir = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.fixture_dir());

    let catalog = CatalogLoader::new().load_dir(&catalog_dir)?;
    let engine = CatalogEngine::new(catalog)?;

    let suggestions = engine.suggestions(query);
    if suggestions.is_empty() {
        println!("No suggestions for \"{query}\" (need at least 2 characters and a match)");
        return Ok(());
    }
    println!("💡 Suggestions for \"{query}\":");
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!("  {}. {}", i + 1, suggestion);
    }
    Ok(())
}
