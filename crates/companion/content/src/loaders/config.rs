//! Support tuning loader.

use std::path::Path;

use companion_core::CompanionConfig;

use crate::loaders::{LoadResult, read_file};

/// Loads [`CompanionConfig`] from TOML. Missing keys keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<CompanionConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CompanionConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
