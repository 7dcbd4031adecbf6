//! Error types for the battle loop.

use crate::combat::CombatError;
use crate::error::{ErrorSeverity, GameError};

use super::BattlePhase;

/// Errors surfaced while driving a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error("battle has not started")]
    NotStarted,

    #[error("battle already started")]
    AlreadyStarted,

    #[error("battle already finished ({phase})")]
    AlreadyFinished { phase: BattlePhase },

    /// A report was requested before either side fell.
    #[error("battle is not finished ({phase})")]
    NotFinished { phase: BattlePhase },

    /// The player entered the battle at 0 HP.
    #[error("player is defeated and cannot start a battle")]
    PlayerDefeated,

    #[error("battle exceeded {limit} turns without a winner")]
    TurnLimitExceeded { limit: u32 },

    #[error("attack failed: {0}")]
    Combat(#[from] CombatError),
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotStarted
            | Self::AlreadyStarted
            | Self::AlreadyFinished { .. }
            | Self::NotFinished { .. } => ErrorSeverity::Internal,
            Self::PlayerDefeated => ErrorSeverity::Validation,
            Self::TurnLimitExceeded { .. } => ErrorSeverity::Internal,
            Self::Combat(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotStarted => "BATTLE_NOT_STARTED",
            Self::AlreadyStarted => "BATTLE_ALREADY_STARTED",
            Self::AlreadyFinished { .. } => "BATTLE_ALREADY_FINISHED",
            Self::NotFinished { .. } => "BATTLE_NOT_FINISHED",
            Self::PlayerDefeated => "BATTLE_PLAYER_DEFEATED",
            Self::TurnLimitExceeded { .. } => "BATTLE_TURN_LIMIT",
            Self::Combat(error) => error.error_code(),
        }
    }
}
