//! Combatant state.
//!
//! The player persists across a whole play-through and is mutated in place
//! by combat (HP, turn counter) and progression (levels, attributes, weapon).
//! Enemies live for exactly one battle.
mod attributes;
mod combatant;
mod enemy;
mod error;
mod player;

pub use attributes::{Attributes, StatKind, Vitals};
pub use combatant::{Combatant, CombatantKind};
pub use enemy::EnemyState;
pub use error::StateError;
pub use player::{BonusLedger, ClassLevels, PassiveGrant, PlayerState, create_player};
