//! The player character: multi-class levels, HP derivation and the one-time
//! passive ledger.

use arrayvec::ArrayVec;
use strum::IntoEnumIterator;

use super::{Attributes, StateError, Vitals};
use crate::config::GameConfig;
use crate::env::{
    ClassKind, DamageType, OracleError, TablesOracle, WeaponKind, class_info, weapon_stats,
};

/// Level held in each class track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassLevels([u32; GameConfig::MAX_CLASS_TRACKS]);

impl ClassLevels {
    /// Level 1 in `class`, 0 elsewhere.
    pub fn starting(class: ClassKind) -> Self {
        let mut levels = Self::default();
        levels.0[class.index()] = 1;
        levels
    }

    #[inline]
    pub fn get(&self, class: ClassKind) -> u32 {
        self.0[class.index()]
    }

    /// Raises `class` by one level and returns the new level.
    pub fn increment(&mut self, class: ClassKind) -> u32 {
        let slot = &mut self.0[class.index()];
        *slot = slot.saturating_add(1);
        *slot
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassKind, u32)> + '_ {
        ClassKind::iter().map(|class| (class, self.get(class)))
    }
}

/// A threshold passive that has already been paid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveGrant {
    pub class: ClassKind,
    pub threshold: u32,
}

/// Set of `(class, threshold)` passives already granted.
///
/// Capacity is one entry per class track: each track has exactly one
/// threshold passive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusLedger(ArrayVec<PassiveGrant, { GameConfig::MAX_CLASS_TRACKS }>);

impl BonusLedger {
    pub fn contains(&self, class: ClassKind, threshold: u32) -> bool {
        self.0
            .iter()
            .any(|grant| grant.class == class && grant.threshold == threshold)
    }

    /// Records a grant. Returns `false` if it was already recorded or the
    /// ledger is full.
    pub fn record(&mut self, class: ClassKind, threshold: u32) -> bool {
        if self.contains(class, threshold) {
            return false;
        }
        self.0.try_push(PassiveGrant { class, threshold }).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PassiveGrant> {
        self.0.iter()
    }
}

/// Complete player state, persisting across every battle of a play-through.
///
/// # Invariants
///
/// - `vitals.max_hp` always equals [`PlayerState::calculate_max_hp`] after
///   creation and after every level-up
/// - `total_level >= 1`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub name: String,
    pub attributes: Attributes,
    pub weapon: WeaponKind,
    pub(crate) vitals: Vitals,
    pub(crate) class_levels: ClassLevels,
    pub(crate) total_level: u32,
    /// Attack attempts made in the current battle.
    pub(crate) turn_counter: u32,
    pub(crate) bonus_ledger: BonusLedger,
}

impl PlayerState {
    /// Builds a level-1 character in `starting_class`, wielding the class's
    /// starting weapon, at full HP.
    ///
    /// # Errors
    ///
    /// - [`StateError::AttributeTooLow`] if any attribute is 0
    /// - [`StateError::Oracle`] if the class or its weapon is missing from the tables
    pub fn create(
        name: impl Into<String>,
        attributes: Attributes,
        starting_class: ClassKind,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Result<Self, StateError> {
        if let Some((stat, value)) = attributes.first_invalid() {
            return Err(StateError::AttributeTooLow { stat, value });
        }

        let weapon = class_info(tables, starting_class)?.start_weapon;
        weapon_stats(tables, weapon)?;

        let mut player = Self {
            name: name.into(),
            attributes,
            weapon,
            vitals: Vitals::full(0),
            class_levels: ClassLevels::starting(starting_class),
            total_level: 1,
            turn_counter: 0,
            bonus_ledger: BonusLedger::default(),
        };
        let max_hp = player.calculate_max_hp(tables)?;
        player.vitals = Vitals::full(max_hp);

        Ok(player)
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn class_levels(&self) -> &ClassLevels {
        &self.class_levels
    }

    pub fn class_level(&self, class: ClassKind) -> u32 {
        self.class_levels.get(class)
    }

    pub fn total_level(&self) -> u32 {
        self.total_level
    }

    pub fn turn_counter(&self) -> u32 {
        self.turn_counter
    }

    pub fn bonus_ledger(&self) -> &BonusLedger {
        &self.bonus_ledger
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.vitals.is_depleted()
    }

    /// Max HP derived from class levels and endurance.
    ///
    /// # Formula
    ///
    /// ```text
    /// max_hp = Σ(level[c] × hp_per_level[c]) + endurance × max(1, total_level)
    /// ```
    pub fn calculate_max_hp(
        &self,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Result<u32, OracleError> {
        let mut from_classes: u32 = 0;
        for (class, level) in self.class_levels.iter() {
            let per_level = class_info(tables, class)?.hp_per_level;
            from_classes = from_classes.saturating_add(level.saturating_mul(per_level));
        }
        let from_endurance = self
            .attributes
            .endurance
            .saturating_mul(self.total_level.max(1));

        Ok(from_classes.saturating_add(from_endurance))
    }

    /// Recomputes max HP from scratch and clamps current HP to it.
    /// Returns the signed change of the maximum.
    pub fn recalculate_max_hp(
        &mut self,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Result<i64, OracleError> {
        let max_hp = self.calculate_max_hp(tables)?;
        Ok(self.vitals.set_max(max_hp))
    }

    /// Raises `class` and the total level by one. Returns the new class level.
    ///
    /// Max HP is left untouched; [`crate::progression::level_up`] recomputes
    /// it after threshold passives are applied.
    pub fn apply_level_up(&mut self, class: ClassKind) -> u32 {
        self.total_level = self.total_level.saturating_add(1);
        self.class_levels.increment(class)
    }

    pub fn reset_battle_counters(&mut self) {
        self.turn_counter = 0;
    }

    /// Counts one attack attempt and returns the attempt number.
    pub(crate) fn begin_attack(&mut self) -> u32 {
        self.turn_counter = self.turn_counter.saturating_add(1);
        self.turn_counter
    }

    /// Heals to full HP.
    pub fn restore_hp(&mut self) {
        self.vitals.restore_full();
    }

    /// Replaces the current weapon.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::WeaponNotFound`] if the weapon is not in the tables.
    pub fn equip_weapon(
        &mut self,
        weapon: WeaponKind,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Result<(), OracleError> {
        weapon_stats(tables, weapon)?;
        self.weapon = weapon;
        Ok(())
    }

    pub fn base_weapon_damage(
        &self,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Result<u32, OracleError> {
        Ok(weapon_stats(tables, self.weapon)?.damage)
    }

    pub fn weapon_damage_type(
        &self,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Result<DamageType, OracleError> {
        Ok(weapon_stats(tables, self.weapon)?.damage_type)
    }
}

/// Convenience wrapper around [`PlayerState::create`].
pub fn create_player(
    name: impl Into<String>,
    attributes: Attributes,
    starting_class: ClassKind,
    tables: &(impl TablesOracle + ?Sized),
) -> Result<PlayerState, StateError> {
    PlayerState::create(name, attributes, starting_class, tables)
}
