//! Static reference tables: weapons, classes and enemy archetypes.
//!
//! The tables are read-only. Combat and progression only ever receive them
//! through `&dyn TablesOracle` / `&impl TablesOracle`, so there is no mutation
//! path from game logic back into the data.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::OracleError;

// ============================================================================
// Identifiers
// ============================================================================

/// How a weapon deals its damage. Enemy specials key off this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum DamageType {
    Slashing,
    Blunt,
    Piercing,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum WeaponKind {
    Sword,
    Club,
    Dagger,
    Axe,
    Spear,
    #[strum(to_string = "Legendary Sword", serialize = "LegendarySword")]
    LegendarySword,
}

/// The three class tracks a player can hold levels in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ClassKind {
    Rogue,
    Warrior,
    Barbarian,
}

impl ClassKind {
    /// Dense index used by fixed-size per-class storage.
    pub const fn index(self) -> usize {
        match self {
            Self::Rogue => 0,
            Self::Warrior => 1,
            Self::Barbarian => 2,
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ArchetypeId {
    Goblin,
    Skeleton,
    Slime,
    Ghost,
    Golem,
    Dragon,
}

/// Archetype-specific rule altering damage dealt or received.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialAbility {
    /// Takes double damage from blunt weapons (Skeleton).
    BluntVulnerability,
    /// Ignores the weapon part of slashing damage (Slime).
    SlashImmunity,
    /// +1 damage against slower targets (Ghost).
    SneakAttack,
    /// Subtracts its endurance from incoming damage (Golem).
    StoneSkin,
    /// +3 damage on every third attack (Dragon).
    PeriodicBreath,
}

// ============================================================================
// Records
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponStats {
    pub damage: u32,
    pub damage_type: DamageType,
}

impl WeaponStats {
    pub const fn new(damage: u32, damage_type: DamageType) -> Self {
        Self {
            damage,
            damage_type,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassInfo {
    pub hp_per_level: u32,
    pub start_weapon: WeaponKind,
}

impl ClassInfo {
    pub const fn new(hp_per_level: u32, start_weapon: WeaponKind) -> Self {
        Self {
            hp_per_level,
            start_weapon,
        }
    }
}

/// Template from which a fresh enemy is built for every battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyArchetype {
    pub id: ArchetypeId,
    pub base_hp: u32,
    pub weapon: WeaponKind,
    pub strength: u32,
    pub dexterity: u32,
    pub endurance: u32,
    pub special: Option<SpecialAbility>,
    pub reward: Option<WeaponKind>,
}

impl EnemyArchetype {
    pub fn name(&self) -> &'static str {
        self.id.into()
    }
}

// ============================================================================
// Oracle
// ============================================================================

/// Oracle providing weapon, class and enemy reference data.
pub trait TablesOracle: Send + Sync {
    fn weapon(&self, kind: WeaponKind) -> Option<WeaponStats>;
    fn class_info(&self, class: ClassKind) -> Option<ClassInfo>;
    fn archetypes(&self) -> &[EnemyArchetype];

    fn archetype(&self, id: ArchetypeId) -> Option<&EnemyArchetype> {
        self.archetypes().iter().find(|archetype| archetype.id == id)
    }
}

/// Looks up a weapon, treating absence as a data-integrity failure.
pub fn weapon_stats(
    tables: &(impl TablesOracle + ?Sized),
    kind: WeaponKind,
) -> Result<WeaponStats, OracleError> {
    tables.weapon(kind).ok_or(OracleError::WeaponNotFound(kind))
}

/// Looks up a class, treating absence as a data-integrity failure.
pub fn class_info(
    tables: &(impl TablesOracle + ?Sized),
    class: ClassKind,
) -> Result<ClassInfo, OracleError> {
    tables
        .class_info(class)
        .ok_or(OracleError::ClassNotFound(class))
}

// ============================================================================
// Built-in tables
// ============================================================================

/// The shipped game data, compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticTables;

impl StaticTables {
    pub const ARCHETYPES: [EnemyArchetype; 6] = [
        EnemyArchetype {
            id: ArchetypeId::Goblin,
            base_hp: 5,
            weapon: WeaponKind::Dagger,
            strength: 1,
            dexterity: 2,
            endurance: 1,
            special: None,
            reward: Some(WeaponKind::Dagger),
        },
        EnemyArchetype {
            id: ArchetypeId::Skeleton,
            base_hp: 10,
            weapon: WeaponKind::Club,
            strength: 2,
            dexterity: 2,
            endurance: 1,
            special: Some(SpecialAbility::BluntVulnerability),
            reward: Some(WeaponKind::Club),
        },
        EnemyArchetype {
            id: ArchetypeId::Slime,
            base_hp: 8,
            weapon: WeaponKind::Spear,
            strength: 1,
            dexterity: 1,
            endurance: 2,
            special: Some(SpecialAbility::SlashImmunity),
            reward: Some(WeaponKind::Spear),
        },
        EnemyArchetype {
            id: ArchetypeId::Ghost,
            base_hp: 6,
            weapon: WeaponKind::Sword,
            strength: 1,
            dexterity: 3,
            endurance: 1,
            special: Some(SpecialAbility::SneakAttack),
            reward: Some(WeaponKind::Sword),
        },
        EnemyArchetype {
            id: ArchetypeId::Golem,
            base_hp: 10,
            weapon: WeaponKind::Axe,
            strength: 3,
            dexterity: 1,
            endurance: 3,
            special: Some(SpecialAbility::StoneSkin),
            reward: Some(WeaponKind::Axe),
        },
        EnemyArchetype {
            id: ArchetypeId::Dragon,
            base_hp: 20,
            weapon: WeaponKind::LegendarySword,
            strength: 3,
            dexterity: 3,
            endurance: 3,
            special: Some(SpecialAbility::PeriodicBreath),
            reward: Some(WeaponKind::LegendarySword),
        },
    ];

    pub const fn weapon_for(kind: WeaponKind) -> WeaponStats {
        match kind {
            WeaponKind::Sword => WeaponStats::new(3, DamageType::Slashing),
            WeaponKind::Club => WeaponStats::new(3, DamageType::Blunt),
            WeaponKind::Dagger => WeaponStats::new(2, DamageType::Piercing),
            WeaponKind::Axe => WeaponStats::new(4, DamageType::Slashing),
            WeaponKind::Spear => WeaponStats::new(3, DamageType::Piercing),
            WeaponKind::LegendarySword => WeaponStats::new(10, DamageType::Slashing),
        }
    }

    pub const fn class_for(class: ClassKind) -> ClassInfo {
        match class {
            ClassKind::Rogue => ClassInfo::new(4, WeaponKind::Dagger),
            ClassKind::Warrior => ClassInfo::new(5, WeaponKind::Sword),
            ClassKind::Barbarian => ClassInfo::new(6, WeaponKind::Club),
        }
    }
}

impl TablesOracle for StaticTables {
    fn weapon(&self, kind: WeaponKind) -> Option<WeaponStats> {
        Some(Self::weapon_for(kind))
    }

    fn class_info(&self, class: ClassKind) -> Option<ClassInfo> {
        Some(Self::class_for(class))
    }

    fn archetypes(&self) -> &[EnemyArchetype] {
        &Self::ARCHETYPES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_archetype_is_listed_once() {
        for id in ArchetypeId::iter() {
            let count = StaticTables::ARCHETYPES
                .iter()
                .filter(|archetype| archetype.id == id)
                .count();
            assert_eq!(count, 1, "{id} listed {count} times");
        }
    }

    #[test]
    fn dragon_is_the_boss() {
        let dragon = StaticTables.archetype(ArchetypeId::Dragon).unwrap();
        let strongest = StaticTables::ARCHETYPES
            .iter()
            .max_by_key(|archetype| archetype.base_hp)
            .unwrap();
        assert_eq!(dragon.id, strongest.id);
        assert_eq!(dragon.special, Some(SpecialAbility::PeriodicBreath));
        assert_eq!(weapon_stats(&StaticTables, dragon.weapon).unwrap().damage, 10);
    }

    #[test]
    fn names_parse_back() {
        assert_eq!("legendary sword".parse::<WeaponKind>(), Ok(WeaponKind::LegendarySword));
        assert_eq!("barbarian".parse::<ClassKind>(), Ok(ClassKind::Barbarian));
        assert_eq!(WeaponKind::LegendarySword.to_string(), "Legendary Sword");
        assert_eq!(DamageType::Blunt.to_string(), "blunt");
    }

    #[test]
    fn class_start_weapons() {
        assert_eq!(class_info(&StaticTables, ClassKind::Rogue).unwrap().start_weapon, WeaponKind::Dagger);
        assert_eq!(class_info(&StaticTables, ClassKind::Warrior).unwrap().hp_per_level, 5);
        assert_eq!(class_info(&StaticTables, ClassKind::Barbarian).unwrap().start_weapon, WeaponKind::Club);
    }
}
