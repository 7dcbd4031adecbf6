//! Combat resolution system.
//!
//! Pure functions resolving a single attack between two combatants. The only
//! inputs are the two sides, the reference tables and an injected RNG, so a
//! battle is fully reproducible from its seed.
//!
//! # Core Functions
//!
//! - `perform_attack`: complete attack (hit check, damage stages, HP update)
//! - `check_hit`: dexterity contest
//! - `base_damage`: weapon damage plus strength
//! - `apply_attacker_modifiers` / `apply_defender_modifiers`: class and
//!   archetype rules

pub mod damage;
pub mod error;
pub mod events;
pub mod hit;
pub mod result;

pub use damage::{apply_attacker_modifiers, apply_defender_modifiers, base_damage};
pub use error::CombatError;
pub use events::{BattleEvent, ModifierKind};
pub use hit::{check_hit, hit_probability};
pub use result::{AttackOutcome, perform_attack};
