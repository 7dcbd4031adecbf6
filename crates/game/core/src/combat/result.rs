//! Attack outcome and the single-attack pipeline.

use crate::env::{RngOracle, TablesOracle};
use crate::state::Combatant;

use super::damage::{apply_attacker_modifiers, apply_defender_modifiers, base_damage};
use super::error::CombatError;
use super::events::BattleEvent;
use super::hit::check_hit;

/// What a single attack did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The hit check failed.
    Miss,
    /// The attack connected but modifiers reduced the damage to 0.
    Blocked,
    /// Damage was dealt and the defender is still standing.
    Hit { damage: u32 },
    /// Damage was dealt and the defender dropped to 0 HP.
    Defeated { damage: u32 },
}

impl AttackOutcome {
    #[inline]
    pub fn is_defeat(&self) -> bool {
        matches!(self, Self::Defeated { .. })
    }

    /// Damage applied to the defender (0 for misses and blocks).
    pub fn damage(&self) -> u32 {
        match self {
            Self::Hit { damage } | Self::Defeated { damage } => *damage,
            Self::Miss | Self::Blocked => 0,
        }
    }
}

/// Resolves one attack from `attacker` against `defender`.
///
/// ## Execution Flow
/// 1. Pre-validate both sides (HP within bounds, no zero attribute, both alive)
/// 2. Count the attempt on the attacker's turn counter
/// 3. Hit check; a miss stops here
/// 4. Base damage (weapon + strength)
/// 5. Attacker modifiers, then defender modifiers
/// 6. Apply: 0 damage is a block, otherwise HP is reduced and a drop to 0
///    defeats the defender
///
/// The attempt is counted before the hit check, so misses advance per-battle
/// bonuses such as poison and rage.
///
/// ## Errors
/// Any error is raised before the defender is touched.
pub fn perform_attack<R: RngOracle + ?Sized>(
    attacker: &mut Combatant<'_>,
    defender: &mut Combatant<'_>,
    tables: &(impl TablesOracle + ?Sized),
    rng: &mut R,
    events: &mut Vec<BattleEvent>,
) -> Result<AttackOutcome, CombatError> {
    pre_validate(attacker)?;
    pre_validate(defender)?;
    if defender.vitals().is_depleted() {
        return Err(CombatError::TargetDefeated {
            name: defender.name().to_owned(),
        });
    }
    if attacker.vitals().is_depleted() {
        return Err(CombatError::AttackerDefeated {
            name: attacker.name().to_owned(),
        });
    }

    // Resolve the weapon up front so a table error leaves no trace.
    let base = base_damage(attacker, tables)?;

    let turn = attacker.begin_attack();

    if !check_hit(
        attacker.attributes().dexterity,
        defender.attributes().dexterity,
        rng,
    ) {
        events.push(BattleEvent::Missed {
            attacker: attacker.name().to_owned(),
            defender: defender.name().to_owned(),
        });
        return Ok(AttackOutcome::Miss);
    }

    let damage = apply_attacker_modifiers(attacker, defender, turn, base, tables, events)?;
    let damage = apply_defender_modifiers(attacker, defender, damage, tables, events)?;

    if damage == 0 {
        events.push(BattleEvent::Absorbed {
            attacker: attacker.name().to_owned(),
            defender: defender.name().to_owned(),
        });
        return Ok(AttackOutcome::Blocked);
    }

    let remaining = defender.vitals_mut().take_damage(damage);
    events.push(BattleEvent::DamageDealt {
        attacker: attacker.name().to_owned(),
        defender: defender.name().to_owned(),
        damage,
        hp: remaining,
        max_hp: defender.vitals().max_hp(),
    });

    if remaining == 0 {
        events.push(BattleEvent::Defeated {
            name: defender.name().to_owned(),
        });
        Ok(AttackOutcome::Defeated { damage })
    } else {
        Ok(AttackOutcome::Hit { damage })
    }
}

fn pre_validate(combatant: &Combatant<'_>) -> Result<(), CombatError> {
    let vitals = combatant.vitals();
    if !vitals.is_consistent() {
        return Err(CombatError::HpAboveMax {
            name: combatant.name().to_owned(),
            hp: vitals.hp(),
            max_hp: vitals.max_hp(),
        });
    }
    if let Some((stat, _)) = combatant.attributes().first_invalid() {
        return Err(CombatError::ZeroAttribute {
            name: combatant.name().to_owned(),
            stat,
        });
    }
    Ok(())
}
