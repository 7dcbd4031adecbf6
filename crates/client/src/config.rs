//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use game_content::{ConfigLoader, ContentFactory, TablesLoader};
use game_core::{GameConfig, TablesSnapshot};

/// Configuration required to start a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Fixed RNG seed. A random one is drawn when absent.
    pub seed: Option<u64>,
    /// Directory holding `config.toml` and `tables.ron`.
    pub data_dir: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub tables_path: Option<PathBuf>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_SEED` - RNG seed for a reproducible session (default: random)
    /// - `DUNGEON_DATA_DIR` - Directory with `config.toml` / `tables.ron`
    /// - `DUNGEON_CONFIG` - Game config TOML path (overrides the data dir)
    /// - `DUNGEON_TABLES` - Tables RON path (overrides the data dir)
    /// - `DUNGEON_SESSION_ID` - Session identifier for logs (default: auto-generated)
    /// - `DUNGEON_LOG_DIR` - Log directory (default: platform-specific)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        Self {
            seed: read_var::<u64>(&lookup, "DUNGEON_SEED"),
            data_dir: path("DUNGEON_DATA_DIR"),
            config_path: path("DUNGEON_CONFIG"),
            tables_path: path("DUNGEON_TABLES"),
            session_id: lookup("DUNGEON_SESSION_ID").filter(|v| !v.is_empty()),
            log_dir: path("DUNGEON_LOG_DIR"),
        }
    }

    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Game config from the explicit path, then the data dir, then the
    /// shipped default.
    pub fn load_game_config(&self) -> Result<GameConfig> {
        match (&self.config_path, &self.data_dir) {
            (Some(path), _) => ConfigLoader::load(path),
            (None, Some(dir)) => ContentFactory::new(dir).load_config(),
            (None, None) => ConfigLoader::load_default(),
        }
    }

    /// Validated tables, resolved the same way as the game config.
    pub fn load_tables(&self) -> Result<TablesSnapshot> {
        match (&self.tables_path, &self.data_dir) {
            (Some(path), _) => TablesLoader::load(path),
            (None, Some(dir)) => ContentFactory::new(dir).load_tables(),
            (None, None) => TablesLoader::load_default(),
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
