//! Damage calculation: base damage, attacker-side and defender-side modifiers.
//!
//! Attacker modifiers are always fully resolved before any defender modifier
//! runs, because several defender modifiers only fire while the running
//! damage is still positive.

use crate::env::{
    ClassKind, DamageType, OracleError, SpecialAbility, TablesOracle, weapon_stats,
};
use crate::state::{Attributes, Combatant, EnemyState, PlayerState};

use super::events::{BattleEvent, ModifierKind};

/// Flat bonus for a rogue faster than the target.
const ROGUE_AMBUSH_BONUS: i64 = 1;
/// Rogue level at which poison starts stacking.
const ROGUE_POISON_LEVEL: u32 = 3;
/// Attacks per battle that benefit from barbarian rage.
const BARBARIAN_RAGE_TURNS: u32 = 3;
const BARBARIAN_RAGE_BONUS: i64 = 2;
const BARBARIAN_FATIGUE_PENALTY: i64 = -1;

const SNEAK_ATTACK_BONUS: u32 = 1;
const FIRE_BREATH_INTERVAL: u32 = 3;
const FIRE_BREATH_BONUS: u32 = 3;

/// Warrior level at which the shield block applies.
const WARRIOR_SHIELD_LEVEL: u32 = 2;
const WARRIOR_SHIELD_BLOCK: u32 = 3;
/// Barbarian level at which stone skin applies.
const BARBARIAN_STONE_SKIN_LEVEL: u32 = 2;

/// Base damage: weapon damage plus strength.
pub fn base_damage(
    attacker: &Combatant<'_>,
    tables: &(impl TablesOracle + ?Sized),
) -> Result<u32, OracleError> {
    Ok(attacker
        .base_weapon_damage(tables)?
        .saturating_add(attacker.attributes().strength))
}

/// Applies the attacker's modifier set, selected by combatant kind.
///
/// `turn` is the attacker's attempt number in this battle (first attack = 1).
/// The result is floored at 0.
pub fn apply_attacker_modifiers(
    attacker: &Combatant<'_>,
    defender: &Combatant<'_>,
    turn: u32,
    damage: u32,
    tables: &(impl TablesOracle + ?Sized),
    events: &mut Vec<BattleEvent>,
) -> Result<u32, OracleError> {
    match attacker {
        Combatant::Player(player) => {
            player_attack_modifiers(player, defender.attributes(), turn, damage, tables, events)
        }
        Combatant::Enemy(enemy) => Ok(enemy_attack_modifiers(
            enemy,
            defender.attributes(),
            turn,
            damage,
            events,
        )),
    }
}

/// Applies the defender's modifier set, selected by combatant kind.
///
/// Damage is floored at 0 after every subtractive step.
pub fn apply_defender_modifiers(
    attacker: &Combatant<'_>,
    defender: &Combatant<'_>,
    damage: u32,
    tables: &(impl TablesOracle + ?Sized),
    events: &mut Vec<BattleEvent>,
) -> Result<u32, OracleError> {
    match defender {
        Combatant::Player(player) => Ok(player_defense_modifiers(
            player,
            attacker.attributes(),
            damage,
            events,
        )),
        Combatant::Enemy(enemy) => enemy_defense_modifiers(enemy, attacker, damage, tables, events),
    }
}

/// Class bonuses are summed independently, so a multi-classed player stacks
/// every track that qualifies.
fn player_attack_modifiers(
    player: &PlayerState,
    target: &Attributes,
    turn: u32,
    damage: u32,
    tables: &(impl TablesOracle + ?Sized),
    events: &mut Vec<BattleEvent>,
) -> Result<u32, OracleError> {
    let rogue = player.class_level(ClassKind::Rogue);
    let warrior = player.class_level(ClassKind::Warrior);
    let barbarian = player.class_level(ClassKind::Barbarian);

    let mut applied: Vec<(ModifierKind, i64)> = Vec::new();

    if rogue >= 1 && player.attributes.dexterity > target.dexterity {
        applied.push((ModifierKind::RogueAmbush, ROGUE_AMBUSH_BONUS));
    }
    if rogue >= ROGUE_POISON_LEVEL {
        let poison = i64::from(turn.saturating_sub(1));
        if poison > 0 {
            applied.push((ModifierKind::RoguePoison, poison));
        }
    }
    if warrior >= 1 && turn == 1 {
        let opening = i64::from(player.base_weapon_damage(tables)?);
        applied.push((ModifierKind::WarriorOpening, opening));
    }
    if barbarian >= 1 {
        if turn <= BARBARIAN_RAGE_TURNS {
            applied.push((ModifierKind::BarbarianRage, BARBARIAN_RAGE_BONUS));
        } else {
            applied.push((ModifierKind::BarbarianFatigue, BARBARIAN_FATIGUE_PENALTY));
        }
    }

    let mut total = i64::from(damage);
    for (kind, amount) in applied {
        total += amount;
        events.push(BattleEvent::modifier(&player.name, kind, amount));
    }

    Ok(floor_to_u32(total))
}

fn enemy_attack_modifiers(
    enemy: &EnemyState,
    target: &Attributes,
    turn: u32,
    damage: u32,
    events: &mut Vec<BattleEvent>,
) -> u32 {
    match enemy.special {
        Some(SpecialAbility::SneakAttack) if enemy.attributes.dexterity > target.dexterity => {
            events.push(BattleEvent::modifier(
                enemy.name(),
                ModifierKind::SneakAttack,
                i64::from(SNEAK_ATTACK_BONUS),
            ));
            damage.saturating_add(SNEAK_ATTACK_BONUS)
        }
        Some(SpecialAbility::PeriodicBreath) if turn % FIRE_BREATH_INTERVAL == 0 => {
            events.push(BattleEvent::modifier(
                enemy.name(),
                ModifierKind::FireBreath,
                i64::from(FIRE_BREATH_BONUS),
            ));
            damage.saturating_add(FIRE_BREATH_BONUS)
        }
        _ => damage,
    }
}

fn player_defense_modifiers(
    player: &PlayerState,
    attacker: &Attributes,
    damage: u32,
    events: &mut Vec<BattleEvent>,
) -> u32 {
    let mut damage = damage;

    if player.class_level(ClassKind::Warrior) >= WARRIOR_SHIELD_LEVEL
        && player.attributes.strength > attacker.strength
    {
        damage = absorb(
            damage,
            WARRIOR_SHIELD_BLOCK,
            &player.name,
            ModifierKind::WarriorShield,
            events,
        );
    }
    if player.class_level(ClassKind::Barbarian) >= BARBARIAN_STONE_SKIN_LEVEL && damage > 0 {
        damage = absorb(
            damage,
            player.attributes.endurance,
            &player.name,
            ModifierKind::BarbarianStoneSkin,
            events,
        );
    }

    damage
}

fn enemy_defense_modifiers(
    enemy: &EnemyState,
    attacker: &Combatant<'_>,
    damage: u32,
    tables: &(impl TablesOracle + ?Sized),
    events: &mut Vec<BattleEvent>,
) -> Result<u32, OracleError> {
    let weapon = weapon_stats(tables, attacker.weapon())?;

    let damage = match enemy.special {
        // Only the weapon component is ignored; strength and class bonuses land.
        Some(SpecialAbility::SlashImmunity)
            if weapon.damage_type == DamageType::Slashing && weapon.damage > 0 =>
        {
            absorb(
                damage,
                weapon.damage,
                enemy.name(),
                ModifierKind::SlashImmunity,
                events,
            )
        }
        Some(SpecialAbility::BluntVulnerability) if weapon.damage_type == DamageType::Blunt => {
            if damage > 0 {
                events.push(BattleEvent::modifier(
                    enemy.name(),
                    ModifierKind::BluntVulnerability,
                    i64::from(damage),
                ));
            }
            damage.saturating_mul(2)
        }
        Some(SpecialAbility::StoneSkin) if damage > 0 => absorb(
            damage,
            enemy.attributes.endurance,
            enemy.name(),
            ModifierKind::GolemStoneSkin,
            events,
        ),
        _ => damage,
    };

    Ok(damage)
}

/// Subtracts up to `amount`, flooring at 0, and logs what was actually removed.
fn absorb(
    damage: u32,
    amount: u32,
    actor: &str,
    kind: ModifierKind,
    events: &mut Vec<BattleEvent>,
) -> u32 {
    let absorbed = damage.min(amount);
    if absorbed > 0 {
        events.push(BattleEvent::modifier(actor, kind, -i64::from(absorbed)));
    }
    damage - absorbed
}

fn floor_to_u32(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}
