use std::env;
use std::path::PathBuf;

use shopsearch_core::catalog::CatalogLoader;
use shopsearch_core::config::Config;
use shopsearch_core::traits::ProductSearch;
use shopsearch_core::types::{FilterState, SortOption};
use shopsearch_engine::CatalogEngine;

fn usage(program: &str) {
    eprintln!("Usage: {program} <query> [options] [catalog_dir]");
    eprintln!("Options:");
    eprintln!("  --category <name>     keep only this category (repeatable)");
    eprintln!("  --brand <name>        exact or partial brand match (repeatable)");
    eprintln!("  --min-price <n>       lower price bound, inclusive");
    eprintln!("  --max-price <n>       upper price bound, inclusive");
    eprintln!("  --min-rating <n>      minimum star rating");
    eprintln!("  --sort <key>          relevance|price-low|price-high|rating|popularity|newest|discount|alphabetical");
    eprintln!("  --limit <n>           number of rows to print");
    eprintln!("Example: {program} 'bluetooth speaker' --min-rating 4 --sort price-low");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let program = env::args().next().unwrap_or_else(|| "shopsearch".to_string());
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        usage(&program);
        std::process::exit(1);
    }

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: could not load config ({e}), using defaults");
        Config::default()
    });

    let query = args[0].clone();
    let mut filters = FilterState::default();
    let mut sort = SortOption::Relevance;
    let mut limit: Option<usize> = None;
    let mut catalog_dir: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--category" => {
                filters.categories.push(take_value(&args, &mut i, "--category")?);
            }
            "--brand" => {
                filters.brands.push(take_value(&args, &mut i, "--brand")?);
            }
            "--min-price" => {
                filters.price_range.0 = take_value(&args, &mut i, "--min-price")?.parse()?;
            }
            "--max-price" => {
                filters.price_range.1 = take_value(&args, &mut i, "--max-price")?.parse()?;
            }
            "--min-rating" => {
                filters.rating = take_value(&args, &mut i, "--min-rating")?.parse()?;
            }
            "--sort" => {
                sort = take_value(&args, &mut i, "--sort")?.parse()?;
            }
            "--limit" => {
                limit = Some(take_value(&args, &mut i, "--limit")?.parse()?);
            }
            other if !other.starts_with('-') => catalog_dir = Some(PathBuf::from(other)),
            other => {
                eprintln!("Unknown option: {other}");
                usage(&program);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let catalog_dir = catalog_dir.unwrap_or_else(|| config.fixture_dir());
    let limit = config.clamp_limit(limit);

    println!("🛒 shopsearch\n=============");
    println!("Catalog directory: {}", catalog_dir.display());
    println!("Query: \"{query}\"  sort: {}  limit: {limit}", sort.tag());

    let catalog = CatalogLoader::new().load_dir(&catalog_dir)?;
    let engine = CatalogEngine::new(catalog)?;
    println!("📦 Loaded {} products", engine.len());

    let results = engine.search(&query, &filters, sort, limit);
    println!("\n🔍 Found {} results for: \"{query}\"", results.len());
    for (i, product) in results.iter().enumerate() {
        println!(
            "\n  {}. {}  [{}]",
            i + 1,
            product.title,
            product.brand
        );
        println!(
            "     💲 {:.2} (list {:.2})  ⭐ {:.1} ({} reviews)  stock: {}",
            product.price, product.list_price, product.rating, product.reviews, product.stock
        );
    }
    Ok(())
}

fn take_value(args: &[String], i: &mut usize, flag: &str) -> anyhow::Result<String> {
    if *i + 1 >= args.len() {
        anyhow::bail!("{flag} requires a value");
    }
    *i += 1;
    Ok(args[*i].clone())
}
