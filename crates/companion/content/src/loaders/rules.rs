//! Rule table loader.

use std::path::Path;

use companion_core::CatalogSource;

use crate::loaders::{LoadResult, read_file};

/// Loads a complete [`CatalogSource`] from a RON file.
///
/// Externally authored tables replace the built-in ones wholesale; there is
/// no merging.
pub struct RulesLoader;

impl RulesLoader {
    pub fn load(path: &Path) -> LoadResult<CatalogSource> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<CatalogSource> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse rules RON: {}", e))
    }

    /// Serializes tables in the format [`Self::load`] reads.
    pub fn to_ron(source: &CatalogSource) -> LoadResult<String> {
        ron::ser::to_string_pretty(source, ron::ser::PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to serialize rules RON: {}", e))
    }
}
