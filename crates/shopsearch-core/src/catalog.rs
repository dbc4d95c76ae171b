//! Fixture catalog loading.
//!
//! A catalog snapshot is a directory of `.json` files, each holding a JSON
//! array of products. Files are concatenated in sorted path order so a
//! snapshot always loads in the same catalog order.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::Error;
use crate::types::Product;

#[derive(Debug, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load every `.json` file under `dir` (recursively) into one catalog.
    pub fn load_dir(&self, dir: &Path) -> Result<Vec<Product>> {
        let files = self.list_json_files(dir);
        if files.is_empty() {
            info!(dir = %dir.display(), "no .json fixture files found");
            return Ok(vec![]);
        }

        let mut products: Vec<Product> = Vec::new();
        for path in &files {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading fixture {}", path.display()))?;
            let batch: Vec<Product> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing fixture {}", path.display()))?;
            debug!(file = %path.display(), count = batch.len(), "loaded fixture file");
            products.extend(batch);
        }

        ensure_unique_ids(&products)?;
        info!(
            products = products.len(),
            files = files.len(),
            "catalog snapshot loaded"
        );
        Ok(products)
    }

    fn list_json_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut json_files = Vec::new();
        for entry in walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                json_files.push(path.to_path_buf());
            }
        }
        json_files.sort();
        json_files
    }
}

/// Every product id must be unique within one snapshot.
pub fn ensure_unique_ids(products: &[Product]) -> crate::error::Result<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id.as_str()) {
            return Err(Error::DuplicateId(product.id.clone()));
        }
    }
    Ok(())
}
