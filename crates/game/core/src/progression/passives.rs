//! Threshold passives: one-time permanent stat bonuses per class track.

use crate::env::ClassKind;
use crate::state::{PlayerState, StatKind};

/// A stat bonus paid out the first time a class track reaches `threshold`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThresholdPassive {
    pub class: ClassKind,
    pub threshold: u32,
    pub stat: StatKind,
    pub amount: u32,
}

pub const THRESHOLD_PASSIVES: [ThresholdPassive; 3] = [
    ThresholdPassive {
        class: ClassKind::Rogue,
        threshold: 2,
        stat: StatKind::Dexterity,
        amount: 1,
    },
    ThresholdPassive {
        class: ClassKind::Warrior,
        threshold: 3,
        stat: StatKind::Strength,
        amount: 1,
    },
    ThresholdPassive {
        class: ClassKind::Barbarian,
        threshold: 3,
        stat: StatKind::Endurance,
        amount: 1,
    },
];

/// Grants every passive whose threshold the player has reached and which is
/// not yet in the ledger. All tracks are checked, not only the one just
/// leveled. Returns the passives granted by this call.
pub fn grant_threshold_passives(player: &mut PlayerState) -> Vec<ThresholdPassive> {
    let mut granted = Vec::new();

    for passive in THRESHOLD_PASSIVES {
        if player.class_level(passive.class) < passive.threshold {
            continue;
        }
        if !player.bonus_ledger.record(passive.class, passive.threshold) {
            continue;
        }
        player.attributes.raise(passive.stat, passive.amount);
        granted.push(passive);
    }

    granted
}
