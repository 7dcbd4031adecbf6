//! Capability-tagged view over the two kinds of combatant.
//!
//! The attack pipeline is written once against [`Combatant`] and selects
//! modifier sets by matching on the tag, instead of going through an
//! open-ended trait hierarchy.

use super::{Attributes, EnemyState, PlayerState, Vitals};
use crate::env::{DamageType, OracleError, TablesOracle, WeaponKind, weapon_stats};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantKind {
    Player,
    Enemy,
}

/// Mutable borrow of one side of a fight.
#[derive(Debug)]
pub enum Combatant<'a> {
    Player(&'a mut PlayerState),
    Enemy(&'a mut EnemyState),
}

impl Combatant<'_> {
    pub fn kind(&self) -> CombatantKind {
        match self {
            Self::Player(_) => CombatantKind::Player,
            Self::Enemy(_) => CombatantKind::Enemy,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Player(player) => &player.name,
            Self::Enemy(enemy) => enemy.name(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Self::Player(player) => &player.attributes,
            Self::Enemy(enemy) => &enemy.attributes,
        }
    }

    pub fn weapon(&self) -> WeaponKind {
        match self {
            Self::Player(player) => player.weapon,
            Self::Enemy(enemy) => enemy.weapon,
        }
    }

    pub fn vitals(&self) -> &Vitals {
        match self {
            Self::Player(player) => &player.vitals,
            Self::Enemy(enemy) => &enemy.vitals,
        }
    }

    pub(crate) fn vitals_mut(&mut self) -> &mut Vitals {
        match self {
            Self::Player(player) => &mut player.vitals,
            Self::Enemy(enemy) => &mut enemy.vitals,
        }
    }

    pub fn turn_counter(&self) -> u32 {
        match self {
            Self::Player(player) => player.turn_counter,
            Self::Enemy(enemy) => enemy.turn_counter,
        }
    }

    /// Counts one attack attempt and returns the attempt number.
    pub(crate) fn begin_attack(&mut self) -> u32 {
        match self {
            Self::Player(player) => player.begin_attack(),
            Self::Enemy(enemy) => enemy.begin_attack(),
        }
    }

    /// Damage of the current weapon alone, without strength or bonuses.
    pub fn base_weapon_damage(
        &self,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Result<u32, OracleError> {
        Ok(weapon_stats(tables, self.weapon())?.damage)
    }

    pub fn weapon_damage_type(
        &self,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Result<DamageType, OracleError> {
        Ok(weapon_stats(tables, self.weapon())?.damage_type)
    }
}
