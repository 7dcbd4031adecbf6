//! State construction errors.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

use super::StatKind;

/// Errors raised while building a character.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Every attribute must be at least 1.
    #[error("{stat} must be at least 1 (got {value})")]
    AttributeTooLow { stat: StatKind, value: u32 },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AttributeTooLow { .. } => ErrorSeverity::Validation,
            Self::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AttributeTooLow { .. } => "STATE_ATTRIBUTE_TOO_LOW",
            Self::Oracle(error) => error.error_code(),
        }
    }
}
