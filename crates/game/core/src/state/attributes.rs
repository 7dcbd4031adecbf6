//! Attributes and hit points shared by every combatant.

use strum::{Display, EnumIter};

/// One of the three combat attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    Strength,
    Dexterity,
    Endurance,
}

/// Strength, dexterity and endurance.
///
/// - **Strength**: added to weapon damage
/// - **Dexterity**: hit chance and turn order
/// - **Endurance**: max HP scaling and damage mitigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub strength: u32,
    pub dexterity: u32,
    pub endurance: u32,
}

impl Attributes {
    pub const fn new(strength: u32, dexterity: u32, endurance: u32) -> Self {
        Self {
            strength,
            dexterity,
            endurance,
        }
    }

    pub fn get(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Strength => self.strength,
            StatKind::Dexterity => self.dexterity,
            StatKind::Endurance => self.endurance,
        }
    }

    pub fn raise(&mut self, stat: StatKind, amount: u32) {
        let slot = match stat {
            StatKind::Strength => &mut self.strength,
            StatKind::Dexterity => &mut self.dexterity,
            StatKind::Endurance => &mut self.endurance,
        };
        *slot = slot.saturating_add(amount);
    }

    /// Returns the first attribute below 1, if any.
    pub fn first_invalid(&self) -> Option<(StatKind, u32)> {
        [
            (StatKind::Strength, self.strength),
            (StatKind::Dexterity, self.dexterity),
            (StatKind::Endurance, self.endurance),
        ]
        .into_iter()
        .find(|&(_, value)| value == 0)
    }
}

/// Current and maximum hit points.
///
/// # Invariants
///
/// `hp <= max_hp` after every mutation. HP is unsigned, so damage saturates at
/// 0 and a depleted pool (`hp == 0`) means the combatant is defeated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    pub(crate) hp: u32,
    pub(crate) max_hp: u32,
}

impl Vitals {
    /// A full pool.
    pub const fn full(max_hp: u32) -> Self {
        Self { hp: max_hp, max_hp }
    }

    #[inline]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[inline]
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.hp == 0
    }

    pub fn is_consistent(&self) -> bool {
        self.hp <= self.max_hp
    }

    /// Subtracts damage, flooring at 0. Returns the remaining HP.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }

    pub fn restore_full(&mut self) {
        self.hp = self.max_hp;
    }

    /// Replaces the maximum, clamping current HP down if it now exceeds it.
    /// Returns the signed change of the maximum.
    pub fn set_max(&mut self, max_hp: u32) -> i64 {
        let delta = i64::from(max_hp) - i64::from(self.max_hp);
        self.max_hp = max_hp;
        self.hp = self.hp.min(max_hp);
        delta
    }
}
