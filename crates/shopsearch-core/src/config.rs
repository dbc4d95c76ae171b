use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub fixture_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Config {
    /// Merge `config.toml` + `config.<env>.toml` + `SHOPSEARCH_*` env vars
    /// on top of the built-in defaults. `RUST_ENV` selects the overlay file.
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("SHOPSEARCH_").split("__"));

        let config: Config = figment.extract()?;
        Ok(config)
    }

    pub fn fixture_dir(&self) -> PathBuf {
        PathBuf::from(&self.catalog.fixture_dir)
    }

    /// Clamp a requested result limit to the configured ceiling, falling
    /// back to the default when the caller passed none.
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.display.default_limit)
            .min(self.display.max_limit)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                fixture_dir: "test_data/catalog".to_string(),
            },
            display: DisplayConfig {
                default_limit: 20,
                max_limit: 100,
            },
        }
    }
}
