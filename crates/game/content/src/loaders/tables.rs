//! Reference tables loader.

use std::path::Path;

use game_core::TablesSnapshot;

use crate::loaders::{LoadResult, read_file};

/// Loader for weapon, class and enemy tables from RON files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load and validate tables from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a `TablesSnapshot`
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, does not parse, or references a
    /// weapon or class it does not define.
    pub fn load(path: &Path) -> LoadResult<TablesSnapshot> {
        let content = read_file(path)?;
        Self::load_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid tables file {}: {}", path.display(), e))
    }

    /// Parse and validate tables from RON text.
    pub fn load_str(content: &str) -> LoadResult<TablesSnapshot> {
        let tables: TablesSnapshot = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables RON: {}", e))?;
        tables.validate()?;

        Ok(tables)
    }

    /// The tables shipped with the game.
    pub fn load_default() -> LoadResult<TablesSnapshot> {
        Self::load_str(crate::DEFAULT_TABLES_RON)
    }
}
