//! Attack resolution errors.
//!
//! Every variant here means the caller broke an invariant or the tables are
//! inconsistent. None of them can happen in a well-formed battle.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::StatKind;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// Current HP above the maximum.
    #[error("{name} has {hp} HP but a maximum of {max_hp}")]
    HpAboveMax { name: String, hp: u32, max_hp: u32 },

    #[error("{name} has {stat} 0")]
    ZeroAttribute { name: String, stat: StatKind },

    /// The defender was already at 0 HP before the attack.
    #[error("{name} is already defeated")]
    TargetDefeated { name: String },

    /// The attacker is at 0 HP and cannot act.
    #[error("{name} is defeated and cannot attack")]
    AttackerDefeated { name: String },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(error) => error.severity(),
            Self::HpAboveMax { .. }
            | Self::ZeroAttribute { .. }
            | Self::TargetDefeated { .. }
            | Self::AttackerDefeated { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(error) => error.error_code(),
            Self::HpAboveMax { .. } => "COMBAT_HP_ABOVE_MAX",
            Self::ZeroAttribute { .. } => "COMBAT_ZERO_ATTRIBUTE",
            Self::TargetDefeated { .. } => "COMBAT_TARGET_DEFEATED",
            Self::AttackerDefeated { .. } => "COMBAT_ATTACKER_DEFEATED",
        }
    }
}
