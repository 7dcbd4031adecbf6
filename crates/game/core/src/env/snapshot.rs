//! Owned, serializable tables.
//!
//! [`TablesSnapshot`] captures a complete set of reference tables by value so
//! it can be loaded from data files or built from another oracle. Unlike
//! [`StaticTables`], its contents are not trusted: call
//! [`TablesSnapshot::validate`] before handing it to the engine.

use strum::IntoEnumIterator;

use super::{
    ClassInfo, ClassKind, EnemyArchetype, OracleError, TablesOracle, WeaponKind, WeaponStats,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponEntry {
    pub kind: WeaponKind,
    pub stats: WeaponStats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassEntry {
    pub class: ClassKind,
    pub info: ClassInfo,
}

/// Snapshot of all reference tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TablesSnapshot {
    pub weapons: Vec<WeaponEntry>,
    pub classes: Vec<ClassEntry>,
    pub archetypes: Vec<EnemyArchetype>,
}

impl TablesSnapshot {
    /// Captures every entry another oracle knows about.
    pub fn from_oracle(tables: &(impl TablesOracle + ?Sized)) -> Self {
        let weapons = WeaponKind::iter()
            .filter_map(|kind| tables.weapon(kind).map(|stats| WeaponEntry { kind, stats }))
            .collect();
        let classes = ClassKind::iter()
            .filter_map(|class| tables.class_info(class).map(|info| ClassEntry { class, info }))
            .collect();

        Self {
            weapons,
            classes,
            archetypes: tables.archetypes().to_vec(),
        }
    }

    /// Checks referential integrity of the tables.
    ///
    /// Every class must be present with a positive HP gain and a known
    /// starting weapon; every archetype must wield a known weapon, drop a known
    /// reward, and have positive HP and attributes; at least one archetype
    /// must exist.
    pub fn validate(&self) -> Result<(), OracleError> {
        for class in ClassKind::iter() {
            let info = self
                .class_info(class)
                .ok_or(OracleError::ClassNotFound(class))?;
            if info.hp_per_level == 0 {
                return Err(OracleError::InvalidEntry(format!(
                    "class {class} gains no HP per level"
                )));
            }
            self.weapon(info.start_weapon)
                .ok_or(OracleError::WeaponNotFound(info.start_weapon))?;
        }

        if self.archetypes.is_empty() {
            return Err(OracleError::NoArchetypes);
        }

        for archetype in &self.archetypes {
            self.weapon(archetype.weapon)
                .ok_or(OracleError::WeaponNotFound(archetype.weapon))?;
            if let Some(reward) = archetype.reward {
                self.weapon(reward).ok_or(OracleError::WeaponNotFound(reward))?;
            }
            if archetype.base_hp == 0
                || archetype.strength == 0
                || archetype.dexterity == 0
                || archetype.endurance == 0
            {
                return Err(OracleError::InvalidEntry(format!(
                    "archetype {} has a zero stat",
                    archetype.id
                )));
            }
        }

        Ok(())
    }
}

impl TablesOracle for TablesSnapshot {
    fn weapon(&self, kind: WeaponKind) -> Option<WeaponStats> {
        self.weapons
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| entry.stats)
    }

    fn class_info(&self, class: ClassKind) -> Option<ClassInfo> {
        self.classes
            .iter()
            .find(|entry| entry.class == class)
            .map(|entry| entry.info)
    }

    fn archetypes(&self) -> &[EnemyArchetype] {
        &self.archetypes
    }
}
