//! Level-up and character growth.
//!
//! A level-up raises one class track and the total level, pays out any
//! threshold passive that became due, then recomputes max HP from scratch.
//! Current HP is never raised here; healing is the session's decision.

mod passives;

pub use passives::{THRESHOLD_PASSIVES, ThresholdPassive, grant_threshold_passives};

use core::fmt;

use crate::env::{ClassKind, OracleError, TablesOracle};
use crate::state::{PlayerState, StatKind};

/// What a level-up changed, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressionEvent {
    LevelGained {
        class: ClassKind,
        level: u32,
        total_level: u32,
    },
    PassiveGranted {
        class: ClassKind,
        threshold: u32,
        stat: StatKind,
        amount: u32,
    },
    MaxHpChanged {
        delta: i64,
        hp: u32,
        max_hp: u32,
    },
}

impl fmt::Display for ProgressionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelGained {
                class,
                level,
                total_level,
            } => write!(
                f,
                "{class} level {level} reached (total level {total_level})."
            ),
            Self::PassiveGranted {
                class,
                threshold,
                stat,
                amount,
            } => write!(f, "{class} {threshold} passive: {stat} +{amount}."),
            Self::MaxHpChanged { delta, hp, max_hp } if *delta != 0 => write!(
                f,
                "Max HP changed by {delta:+}. Current HP: {hp}/{max_hp}"
            ),
            Self::MaxHpChanged { hp, max_hp, .. } => {
                write!(f, "Max HP: {max_hp}. Current HP: {hp}/{max_hp}")
            }
        }
    }
}

/// Result of [`level_up`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUpReport {
    pub class: ClassKind,
    /// Signed change of the maximum HP. Advisory, for display.
    pub hp_delta: i64,
    pub events: Vec<ProgressionEvent>,
}

impl LevelUpReport {
    pub fn narration(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

/// Raises `class` by one level.
///
/// ## Execution Flow
/// 1. Increment the class level and the total level
/// 2. Grant due threshold passives (every track, each at most once)
/// 3. Recompute max HP and clamp current HP down if it exceeds the new max
///
/// # Errors
///
/// Returns [`OracleError`] if a class is missing from the tables. The level
/// and passives from steps 1 and 2 are already applied in that case.
pub fn level_up(
    player: &mut PlayerState,
    class: ClassKind,
    tables: &(impl TablesOracle + ?Sized),
) -> Result<LevelUpReport, OracleError> {
    let mut events = Vec::new();

    let level = player.apply_level_up(class);
    events.push(ProgressionEvent::LevelGained {
        class,
        level,
        total_level: player.total_level(),
    });

    for passive in grant_threshold_passives(player) {
        events.push(ProgressionEvent::PassiveGranted {
            class: passive.class,
            threshold: passive.threshold,
            stat: passive.stat,
            amount: passive.amount,
        });
    }

    let hp_delta = player.recalculate_max_hp(tables)?;
    events.push(ProgressionEvent::MaxHpChanged {
        delta: hp_delta,
        hp: player.vitals().hp(),
        max_hp: player.vitals().max_hp(),
    });

    Ok(LevelUpReport {
        class,
        hp_delta,
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticTables;
    use crate::state::{Attributes, create_player};

    #[test]
    fn warrior_strength_passive_is_granted_once() {
        let mut player =
            create_player("Bran", Attributes::new(2, 1, 1), ClassKind::Warrior, &StaticTables)
                .unwrap();
        level_up(&mut player, ClassKind::Warrior, &StaticTables).unwrap();
        assert_eq!(player.class_level(ClassKind::Warrior), 2);
        assert_eq!(player.attributes.strength, 2);

        let report = level_up(&mut player, ClassKind::Warrior, &StaticTables).unwrap();
        assert_eq!(player.class_level(ClassKind::Warrior), 3);
        assert_eq!(player.attributes.strength, 3);
        assert!(report.events.iter().any(|event| matches!(
            event,
            ProgressionEvent::PassiveGranted {
                class: ClassKind::Warrior,
                stat: StatKind::Strength,
                ..
            }
        )));

        let report = level_up(&mut player, ClassKind::Warrior, &StaticTables).unwrap();
        assert_eq!(player.class_level(ClassKind::Warrior), 4);
        assert_eq!(player.attributes.strength, 3);
        assert!(
            !report
                .events
                .iter()
                .any(|event| matches!(event, ProgressionEvent::PassiveGranted { .. }))
        );
    }

    #[test]
    fn max_hp_is_recomputed_after_passives() {
        let mut player =
            create_player("Grom", Attributes::new(1, 1, 2), ClassKind::Barbarian, &StaticTables)
                .unwrap();
        // 6 × 1 + 2 × 1
        assert_eq!(player.vitals().max_hp(), 8);

        level_up(&mut player, ClassKind::Barbarian, &StaticTables).unwrap();
        // 6 × 2 + 2 × 2
        assert_eq!(player.vitals().max_hp(), 16);

        let report = level_up(&mut player, ClassKind::Barbarian, &StaticTables).unwrap();
        // endurance 3 after the passive: 6 × 3 + 3 × 3
        assert_eq!(player.attributes.endurance, 3);
        assert_eq!(player.vitals().max_hp(), 27);
        assert_eq!(report.hp_delta, 11);
        // level-up never heals
        assert_eq!(player.vitals().hp(), 8);
    }

    #[test]
    fn current_hp_is_clamped_to_a_lower_max() {
        let mut player =
            create_player("Ayla", Attributes::new(1, 1, 1), ClassKind::Rogue, &StaticTables)
                .unwrap();
        player.vitals.max_hp = 40;
        player.vitals.hp = 40;

        let report = level_up(&mut player, ClassKind::Rogue, &StaticTables).unwrap();
        // 4 × 2 + 1 × 2
        assert_eq!(player.vitals().max_hp(), 10);
        assert_eq!(player.vitals().hp(), 10);
        assert_eq!(report.hp_delta, -30);
    }

    #[test]
    fn narration_follows_event_order() {
        let mut player =
            create_player("Ayla", Attributes::new(1, 1, 1), ClassKind::Rogue, &StaticTables)
                .unwrap();
        let report = level_up(&mut player, ClassKind::Rogue, &StaticTables).unwrap();

        assert_eq!(
            report.narration(),
            vec![
                "Rogue level 2 reached (total level 2).".to_owned(),
                "Rogue 2 passive: Dexterity +1.".to_owned(),
                "Max HP changed by +5. Current HP: 5/10".to_owned(),
            ]
        );
    }
}
