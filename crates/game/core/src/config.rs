/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Consecutive victories required to clear the dungeon.
    pub win_streak_target: u32,
    /// Lowest value a freshly rolled attribute can take.
    pub attribute_roll_min: u32,
    /// Highest value a freshly rolled attribute can take.
    pub attribute_roll_max: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of class tracks (Rogue, Warrior, Barbarian).
    pub const MAX_CLASS_TRACKS: usize = 3;
    /// Upper bound on turns in one battle. Reaching it means no side can
    /// damage the other, which the combat rules rule out.
    pub const MAX_BATTLE_TURNS: u32 = 10_000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WIN_STREAK_TARGET: u32 = 3;
    pub const DEFAULT_ATTRIBUTE_ROLL_MIN: u32 = 1;
    pub const DEFAULT_ATTRIBUTE_ROLL_MAX: u32 = 3;

    pub fn new() -> Self {
        Self {
            win_streak_target: Self::DEFAULT_WIN_STREAK_TARGET,
            attribute_roll_min: Self::DEFAULT_ATTRIBUTE_ROLL_MIN,
            attribute_roll_max: Self::DEFAULT_ATTRIBUTE_ROLL_MAX,
        }
    }

    pub fn with_win_streak_target(win_streak_target: u32) -> Self {
        Self {
            win_streak_target,
            ..Self::new()
        }
    }

    /// Attribute roll bounds with the minimum raised to 1, since every
    /// attribute must be at least 1.
    pub fn attribute_roll_range(&self) -> (u32, u32) {
        let min = self.attribute_roll_min.max(1);
        (min, self.attribute_roll_max.max(min))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_roll_range_never_drops_below_one() {
        let config = GameConfig {
            attribute_roll_min: 0,
            attribute_roll_max: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.attribute_roll_range(), (1, 1));
        assert_eq!(GameConfig::default().attribute_roll_range(), (1, 3));
    }
}
