//! Traits describing read-only game data and injected randomness.
//!
//! Oracles expose weapon, class and enemy tables. The random source is
//! supplied by the caller so the engine itself stays deterministic.
mod error;
mod rng;
mod snapshot;
mod tables;

pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, ScriptedRng};
pub use snapshot::{ClassEntry, TablesSnapshot, WeaponEntry};
pub use tables::{
    ArchetypeId, ClassInfo, ClassKind, DamageType, EnemyArchetype, SpecialAbility, StaticTables,
    TablesOracle, WeaponKind, WeaponStats, class_info, weapon_stats,
};
