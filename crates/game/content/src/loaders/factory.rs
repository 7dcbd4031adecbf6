//! Loads a full content set from one directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, TablesSnapshot};

use crate::loaders::{ConfigLoader, LoadResult, TablesLoader};

const CONFIG_FILE: &str = "config.toml";
const TABLES_FILE: &str = "tables.ron";

/// Resolves `config.toml` and `tables.ron` inside a data directory.
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── tables.ron
/// ```
///
/// Each file is optional. An absent file means "use the shipped default",
/// while a file that exists but fails to parse or validate is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.existing(CONFIG_FILE) {
            Some(path) => ConfigLoader::load(&path),
            None => ConfigLoader::load_default(),
        }
    }

    pub fn load_tables(&self) -> LoadResult<TablesSnapshot> {
        match self.existing(TABLES_FILE) {
            Some(path) => TablesLoader::load(&path),
            None => TablesLoader::load_default(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn existing(&self, file: &str) -> Option<PathBuf> {
        let path = self.data_dir.join(file);
        path.exists().then_some(path)
    }
}
