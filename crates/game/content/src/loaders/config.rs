//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to the `GameConfig` defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::load_str(&content)
    }

    /// Parse config data from TOML text.
    pub fn load_str(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.win_streak_target == 0 {
            anyhow::bail!("win_streak_target must be at least 1");
        }
        if config.attribute_roll_min > config.attribute_roll_max {
            anyhow::bail!(
                "attribute_roll_min ({}) is above attribute_roll_max ({})",
                config.attribute_roll_min,
                config.attribute_roll_max
            );
        }

        Ok(config)
    }

    /// The configuration shipped with the game.
    pub fn load_default() -> LoadResult<GameConfig> {
        Self::load_str(crate::DEFAULT_CONFIG_TOML)
    }
}
