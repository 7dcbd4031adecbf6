//! Battle loop.
//!
//! A [`Battle`] owns the turn order for one fight and drives the attack
//! pipeline in [`crate::combat`] until one side is at 0 HP. It never prints;
//! everything that happened is in the returned [`BattleReport`].

mod battle;
mod errors;

pub use battle::{Battle, BattlePhase, BattleReport, determine_first_actor, run_battle};
pub use errors::BattleError;
