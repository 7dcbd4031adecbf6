//! Deterministic combat and progression rules for the dungeon game.
//!
//! `game-core` defines the canonical rules (reference tables, combatants,
//! attack pipeline, battle loop, level-up) and exposes pure APIs that the
//! session shell drives. Randomness is injected through
//! [`env::RngOracle`] and reference data through [`env::TablesOracle`], so
//! every battle is reproducible. Nothing here performs I/O; battles and
//! level-ups return structured events that the caller renders.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod progression;
pub mod state;

pub use combat::{AttackOutcome, BattleEvent, CombatError, ModifierKind, perform_attack};
pub use config::GameConfig;
pub use engine::{Battle, BattleError, BattlePhase, BattleReport, run_battle};
pub use env::{
    ArchetypeId, ClassKind, DamageType, EnemyArchetype, OracleError, PcgRng, RngOracle,
    ScriptedRng, SpecialAbility, StaticTables, TablesOracle, TablesSnapshot, WeaponKind,
    WeaponStats,
};
pub use error::{ErrorSeverity, GameError};
pub use progression::{LevelUpReport, ProgressionEvent, level_up};
pub use state::{
    Attributes, Combatant, CombatantKind, EnemyState, PlayerState, StatKind, StateError, Vitals,
    create_player,
};

/// Replaces the player's weapon after checking it exists in the tables.
pub fn equip_weapon(
    player: &mut PlayerState,
    weapon: WeaponKind,
    tables: &(impl TablesOracle + ?Sized),
) -> Result<(), OracleError> {
    player.equip_weapon(weapon, tables)
}
