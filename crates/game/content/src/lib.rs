//! Data-driven content definitions and loaders.
//!
//! This crate ships the game's reference data as files and provides loaders
//! for them:
//! - Weapon, class and enemy tables (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Loaded tables are validated before they are returned, so the engine only
//! ever sees referentially complete data. Content is consumed through
//! `game_core::TablesOracle` and never appears in player state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, TablesLoader};

/// The shipped weapon, class and enemy tables, in RON.
pub const DEFAULT_TABLES_RON: &str = include_str!("../data/tables.ron");

/// The shipped game configuration, in TOML.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../data/config.toml");
