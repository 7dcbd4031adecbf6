//! Structured battle log.
//!
//! The pipeline never prints. It appends [`BattleEvent`]s in the order things
//! happen, and the shell renders them through `Display`.

use core::fmt;

use crate::env::{ArchetypeId, WeaponKind};
use crate::state::CombatantKind;

/// Damage modifier that fired during an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierKind {
    /// Rogue: faster than the target.
    RogueAmbush,
    /// Rogue level 3: poison growing each turn.
    RoguePoison,
    /// Warrior: weapon damage again on the opening attack.
    WarriorOpening,
    /// Barbarian: rage during the first attacks of a battle.
    BarbarianRage,
    /// Barbarian: rage spent after the opening attacks.
    BarbarianFatigue,
    /// Ghost: faster than the target.
    SneakAttack,
    /// Dragon: every third attack.
    FireBreath,
    /// Warrior level 2 defending: stronger than the attacker.
    WarriorShield,
    /// Barbarian level 2 defending.
    BarbarianStoneSkin,
    /// Slime defending against a slashing weapon.
    SlashImmunity,
    /// Skeleton defending against a blunt weapon.
    BluntVulnerability,
    /// Golem defending.
    GolemStoneSkin,
}

/// One line of the battle log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    Encounter {
        enemy: ArchetypeId,
        hp: u32,
        max_hp: u32,
        weapon: WeaponKind,
    },
    FirstActor {
        side: CombatantKind,
        name: String,
    },
    Missed {
        attacker: String,
        defender: String,
    },
    /// `amount` is the signed change the modifier made to the running damage.
    Modifier {
        actor: String,
        kind: ModifierKind,
        amount: i64,
    },
    /// The attack connected but every point of damage was absorbed.
    Absorbed {
        attacker: String,
        defender: String,
    },
    DamageDealt {
        attacker: String,
        defender: String,
        damage: u32,
        hp: u32,
        max_hp: u32,
    },
    Defeated {
        name: String,
    },
    Victory {
        player: String,
        enemy: ArchetypeId,
    },
    Defeat {
        player: String,
        enemy: ArchetypeId,
    },
}

impl BattleEvent {
    pub(crate) fn modifier(actor: &str, kind: ModifierKind, amount: i64) -> Self {
        Self::Modifier {
            actor: actor.to_owned(),
            kind,
            amount,
        }
    }

    /// The modifier carried by this event, if it is one.
    pub fn as_modifier(&self) -> Option<(ModifierKind, i64)> {
        match self {
            Self::Modifier { kind, amount, .. } => Some((*kind, *amount)),
            _ => None,
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encounter {
                enemy,
                hp,
                max_hp,
                weapon,
            } => write!(
                f,
                "A {enemy} attacks you (HP {hp}/{max_hp}), armed with: {weapon}"
            ),
            Self::FirstActor { name, .. } => write!(f, "{name} moves first."),
            Self::Missed { attacker, defender } => write!(f, "{attacker} misses {defender}."),
            Self::Modifier {
                actor,
                kind,
                amount,
            } => {
                let size = amount.unsigned_abs();
                match kind {
                    ModifierKind::RogueAmbush => write!(f, "{actor}: rogue ambush (+{size})."),
                    ModifierKind::RoguePoison => write!(f, "{actor}: rogue poison (+{size})."),
                    ModifierKind::WarriorOpening => {
                        write!(f, "{actor}: warrior opening strike (+{size}).")
                    }
                    ModifierKind::BarbarianRage => write!(f, "{actor}: barbarian rage (+{size})."),
                    ModifierKind::BarbarianFatigue => {
                        write!(f, "{actor}: barbarian rage fades (-{size}).")
                    }
                    ModifierKind::SneakAttack => write!(f, "{actor}: sneak attack (+{size})."),
                    ModifierKind::FireBreath => {
                        write!(f, "{actor} breathes fire: +{size} damage.")
                    }
                    ModifierKind::WarriorShield => {
                        write!(f, "{actor}: warrior shield blocks {size} damage.")
                    }
                    ModifierKind::BarbarianStoneSkin => {
                        write!(f, "{actor}: barbarian stone skin absorbs {size} damage.")
                    }
                    ModifierKind::SlashImmunity => write!(
                        f,
                        "{actor}: slashing weapon damage does not get through ({size} absorbed; strength and skills still work)."
                    ),
                    ModifierKind::BluntVulnerability => {
                        write!(f, "{actor} is vulnerable to blunt weapons: x2 damage.")
                    }
                    ModifierKind::GolemStoneSkin => {
                        write!(f, "{actor}: stone skin absorbs {size} damage.")
                    }
                }
            }
            Self::Absorbed { attacker, defender } => write!(
                f,
                "{attacker} hits {defender}, but the damage does not get through."
            ),
            Self::DamageDealt {
                attacker,
                defender,
                damage,
                hp,
                max_hp,
            } => write!(
                f,
                "{attacker} deals {damage} damage to {defender}. (target HP: {hp}/{max_hp})"
            ),
            Self::Defeated { name } => write!(f, "{name} has fallen."),
            Self::Victory { player, enemy } => write!(f, "{player} defeats the {enemy}!"),
            Self::Defeat { player, enemy } => write!(f, "{player} was slain by the {enemy}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_damage_line() {
        let event = BattleEvent::DamageDealt {
            attacker: "Ayla".into(),
            defender: "Goblin".into(),
            damage: 5,
            hp: 0,
            max_hp: 5,
        };
        assert_eq!(
            event.to_string(),
            "Ayla deals 5 damage to Goblin. (target HP: 0/5)"
        );
    }

    #[test]
    fn renders_negative_modifier_as_magnitude() {
        let event = BattleEvent::modifier("Golem", ModifierKind::GolemStoneSkin, -3);
        assert_eq!(event.to_string(), "Golem: stone skin absorbs 3 damage.");
        assert_eq!(event.as_modifier(), Some((ModifierKind::GolemStoneSkin, -3)));
    }
}
