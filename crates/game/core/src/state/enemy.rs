use super::{Attributes, Vitals};
use crate::env::{ArchetypeId, EnemyArchetype, SpecialAbility, WeaponKind};

/// A single enemy, built fresh from its archetype for each battle and
/// discarded afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    pub archetype: ArchetypeId,
    pub attributes: Attributes,
    pub weapon: WeaponKind,
    pub(crate) vitals: Vitals,
    pub special: Option<SpecialAbility>,
    pub reward: Option<WeaponKind>,
    /// Attack attempts made in the current battle.
    pub(crate) turn_counter: u32,
}

impl EnemyState {
    pub fn from_archetype(archetype: &EnemyArchetype) -> Self {
        Self {
            archetype: archetype.id,
            attributes: Attributes::new(
                archetype.strength,
                archetype.dexterity,
                archetype.endurance,
            ),
            weapon: archetype.weapon,
            vitals: Vitals::full(archetype.base_hp),
            special: archetype.special,
            reward: archetype.reward,
            turn_counter: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.archetype.into()
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn turn_counter(&self) -> u32 {
        self.turn_counter
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.vitals.is_depleted()
    }

    #[inline]
    pub fn has_special(&self, special: SpecialAbility) -> bool {
        self.special == Some(special)
    }

    pub fn reset_battle_counters(&mut self) {
        self.turn_counter = 0;
    }

    pub(crate) fn begin_attack(&mut self) -> u32 {
        self.turn_counter = self.turn_counter.saturating_add(1);
        self.turn_counter
    }
}
