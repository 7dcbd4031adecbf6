//! File loaders for tables (RON) and configuration (TOML).
//!
//! Every loader has a `load_str` variant so the shipped defaults can be
//! parsed without touching disk.

pub mod config;
pub mod factory;
pub mod tables;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use tables::TablesLoader;

use std::path::Path;

pub type LoadResult<T> = anyhow::Result<T>;

/// Reads a whole file, naming the path in the error.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
