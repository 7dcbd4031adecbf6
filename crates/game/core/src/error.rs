//! Error classification shared by every game-core error type.
//!
//! Each subsystem keeps its own error enum next to the operations it guards
//! (`StateError`, `CombatError`, `BattleError`, `OracleError`). They all
//! implement [`GameError`] so callers can log and triage them uniformly.

/// How a caller should treat an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The caller passed bad input. Retrying with different input is fine.
    ///
    /// Example: a zero attribute handed to character creation.
    Validation,

    /// Engine state broke one of its own invariants, or an API was driven
    /// out of order (stepping a finished battle). Always a bug.
    Internal,

    /// Reference data is missing or inconsistent; nothing can be resolved
    /// until the tables are fixed.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// True for everything that is not the caller's fault.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Uniform view over game-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable, upper-snake-case identifier of the variant, used as a log
    /// field and in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
