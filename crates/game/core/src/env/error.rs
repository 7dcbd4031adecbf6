//! Oracle access errors.
//!
//! Errors related to reference-table lookups and table validation.

use crate::error::{ErrorSeverity, GameError};

use super::{ClassKind, WeaponKind};

/// Errors that occur when accessing table data.
///
/// Oracle errors indicate that required reference data is missing or
/// inconsistent. These are fatal since the engine cannot resolve an attack
/// or build a character without its tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Weapon has no entry in the weapon table.
    #[error("weapon '{0}' not found in weapon table")]
    WeaponNotFound(WeaponKind),

    /// Class has no entry in the class table.
    #[error("class '{0}' not found in class table")]
    ClassNotFound(ClassKind),

    /// Enemy table contains no archetypes at all.
    #[error("enemy table is empty")]
    NoArchetypes,

    /// A table entry refers to another entry that does not exist or is unusable.
    #[error("invalid table entry: {0}")]
    InvalidEntry(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            WeaponNotFound(_) => "ORACLE_WEAPON_NOT_FOUND",
            ClassNotFound(_) => "ORACLE_CLASS_NOT_FOUND",
            NoArchetypes => "ORACLE_NO_ARCHETYPES",
            InvalidEntry(_) => "ORACLE_INVALID_ENTRY",
        }
    }
}
