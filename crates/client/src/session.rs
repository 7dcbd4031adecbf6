//! Interactive play-through loop.
//!
//! The session owns no rules: it rolls a character, asks the player for
//! decisions through a [`Prompter`] and hands everything else to
//! `game-core`, printing the events that come back.

use std::io;

use game_core::env::weapon_stats;
use game_core::{
    Attributes, BattleError, ClassKind, GameConfig, GameError, OracleError, PlayerState,
    RngOracle, StateError, TablesOracle, WeaponKind, create_player, equip_weapon, level_up, run_battle,
};
use tracing::{debug, info, warn};

use crate::prompt::Prompter;

const DEFAULT_NAME: &str = "Hero";
const CLASS_CHOICES: [ClassKind; 3] = [ClassKind::Rogue, ClassKind::Warrior, ClassKind::Barbarian];

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Input ended while a question was pending.
    #[error("input closed")]
    InputClosed,

    #[error("character creation failed: {0}")]
    State(#[from] StateError),

    #[error("battle failed: {0}")]
    Battle(#[from] BattleError),

    #[error("table lookup failed: {0}")]
    Oracle(#[from] OracleError),
}

impl SessionError {
    /// Stable identifier for log fields; core errors keep their own codes.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "SESSION_IO",
            Self::InputClosed => "SESSION_INPUT_CLOSED",
            Self::State(error) => error.error_code(),
            Self::Battle(error) => error.error_code(),
            Self::Oracle(error) => error.error_code(),
        }
    }
}

/// How a single play-through ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayThroughOutcome {
    /// The win streak target was reached.
    Cleared { victories: u32 },
    /// The character died.
    Fallen { victories: u32 },
    /// A fight where neither side could wound the other hit the turn limit.
    Stalemate { victories: u32 },
}

impl PlayThroughOutcome {
    pub fn victories(&self) -> u32 {
        match self {
            Self::Cleared { victories }
            | Self::Fallen { victories }
            | Self::Stalemate { victories } => *victories,
        }
    }
}

/// Drives play-throughs until the player declines another one.
pub struct Session<'a, P, R, T: TablesOracle + ?Sized> {
    prompter: P,
    rng: R,
    tables: &'a T,
    config: &'a GameConfig,
}

impl<'a, P, R, T> Session<'a, P, R, T>
where
    P: Prompter,
    R: RngOracle,
    T: TablesOracle + ?Sized,
{
    pub fn new(prompter: P, rng: R, tables: &'a T, config: &'a GameConfig) -> Self {
        Self {
            prompter,
            rng,
            tables,
            config,
        }
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Runs play-throughs back to back. Returns every outcome, in order.
    pub fn run(&mut self) -> Result<Vec<PlayThroughOutcome>, SessionError> {
        let mut outcomes = Vec::new();

        loop {
            let outcome = self.play_through()?;
            info!(?outcome, "Play-through finished");
            outcomes.push(outcome);

            if !self.confirm("Start a new game? (y/n): ")? {
                self.prompter.say("Thanks for playing!")?;
                return Ok(outcomes);
            }
        }
    }

    /// One character, from creation to death, a cleared dungeon or a fight
    /// that cannot end.
    pub fn play_through(&mut self) -> Result<PlayThroughOutcome, SessionError> {
        self.prompter.say("=== Character creation ===")?;

        let (min, max) = self.config.attribute_roll_range();
        let attributes = Attributes::new(
            self.rng.range(min, max),
            self.rng.range(min, max),
            self.rng.range(min, max),
        );

        let name = match self.ask("Enter your character's name: ")? {
            name if name.is_empty() => DEFAULT_NAME.to_owned(),
            name => name,
        };

        self.prompter.say(&format!(
            "Rolled attributes: Strength {}, Dexterity {}, Endurance {}",
            attributes.strength, attributes.dexterity, attributes.endurance
        ))?;

        let class = self.choose_class("Choose a starting class:")?;
        let mut player = create_player(name, attributes, class, self.tables)?;
        info!(
            name = %player.name,
            %class,
            strength = attributes.strength,
            dexterity = attributes.dexterity,
            endurance = attributes.endurance,
            "Character created"
        );

        self.prompter.say("")?;
        self.prompter.say("Your character:")?;
        for line in player_summary(&player, self.tables)? {
            self.prompter.say(&line)?;
        }

        let mut victories = 0;
        loop {
            let archetype = self.pick_archetype()?;
            info!(enemy = %archetype.id, "Battle started");

            let report = match run_battle(&mut player, &archetype, self.tables, &mut self.rng) {
                Ok(report) => report,
                Err(BattleError::TurnLimitExceeded { limit }) => {
                    warn!(victories, enemy = %archetype.id, limit, "Battle stalemated");
                    self.prompter.say("")?;
                    self.prompter.say(&format!(
                        "After {limit} attacks neither {} nor the {} can wound the other. \
                         You withdraw from the dungeon.",
                        player.name, archetype.id
                    ))?;
                    return Ok(PlayThroughOutcome::Stalemate { victories });
                }
                Err(err) => return Err(err.into()),
            };
            debug!(turns = report.turns, events = report.events.len(), "Battle finished");

            self.prompter.say("")?;
            self.prompter.say("========================================")?;
            for line in report.narration() {
                self.prompter.say(&line)?;
            }

            if !report.victory {
                info!(victories, enemy = %report.archetype, "Character died");
                self.prompter.say("You have died. Game over.")?;
                return Ok(PlayThroughOutcome::Fallen { victories });
            }

            victories += 1;
            self.prompter.say(&format!("Victories in a row: {victories}"))?;

            player.restore_hp();
            let vitals = player.vitals();
            self.prompter.say(&format!(
                "HP restored: {}/{}",
                vitals.hp(),
                vitals.max_hp()
            ))?;

            let class = self.choose_class("Choose a class to level up:")?;
            let level = level_up(&mut player, class, self.tables)?;
            info!(%class, total_level = player.total_level(), "Level up");
            for line in level.narration() {
                self.prompter.say(&line)?;
            }

            if let Some(reward) = report.reward {
                self.offer_reward(&mut player, reward)?;
            }
            player.reset_battle_counters();

            if victories >= self.config.win_streak_target {
                info!(victories, "Dungeon cleared");
                self.prompter.say(&format!(
                    "Congratulations! You won {victories} battles in a row and cleared the dungeon!"
                ))?;
                return Ok(PlayThroughOutcome::Cleared { victories });
            }
        }
    }

    fn pick_archetype(&mut self) -> Result<game_core::EnemyArchetype, SessionError> {
        let tables = self.tables;
        let archetypes = tables.archetypes();
        let last = archetypes.len().checked_sub(1).ok_or(OracleError::NoArchetypes)?;
        let index = self.rng.range(0, last as u32) as usize;
        archetypes
            .get(index)
            .copied()
            .ok_or_else(|| OracleError::NoArchetypes.into())
    }

    fn offer_reward(
        &mut self,
        player: &mut PlayerState,
        reward: WeaponKind,
    ) -> Result<(), SessionError> {
        let stats = weapon_stats(self.tables, reward)?;
        self.prompter.say(&format!(
            "The enemy dropped a weapon: {reward} (damage {}, {})",
            stats.damage, stats.damage_type
        ))?;

        if self.confirm("Replace your current weapon? (y/n): ")? {
            equip_weapon(player, reward, self.tables)?;
            info!(weapon = %reward, "Weapon equipped");
            self.prompter.say(&format!("You now wield: {reward}"))?;
        }
        Ok(())
    }

    fn choose_class(&mut self, heading: &str) -> Result<ClassKind, SessionError> {
        self.prompter.say(heading)?;
        for (number, class) in CLASS_CHOICES.iter().enumerate() {
            self.prompter.say(&format!("{}. {class}", number + 1))?;
        }

        loop {
            let answer = self.ask("Your choice (1-3): ")?;
            let choice = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| CLASS_CHOICES.get(i));

            match choice {
                Some(class) => return Ok(*class),
                None => {
                    warn!(%answer, "Invalid class choice");
                    self.prompter.say("Invalid input, try again.")?;
                }
            }
        }
    }

    fn confirm(&mut self, question: &str) -> Result<bool, SessionError> {
        Ok(self.ask(question)?.eq_ignore_ascii_case("y"))
    }

    fn ask(&mut self, question: &str) -> Result<String, SessionError> {
        self.prompter
            .ask(question)?
            .ok_or(SessionError::InputClosed)
    }
}

/// Two-line character sheet: attributes and vitals, then class levels.
pub fn player_summary(
    player: &PlayerState,
    tables: &(impl TablesOracle + ?Sized),
) -> Result<[String; 2], OracleError> {
    let stats = weapon_stats(tables, player.weapon)?;
    let attributes = &player.attributes;
    let vitals = player.vitals();

    let classes = player
        .class_levels()
        .iter()
        .filter(|(_, level)| *level > 0)
        .map(|(class, level)| format!("{class} {level}"))
        .collect::<Vec<_>>()
        .join(", ");

    Ok([
        format!(
            "{}: Strength {}, Dexterity {}, Endurance {} | HP {}/{} | Weapon: {} (damage {}, {})",
            player.name,
            attributes.strength,
            attributes.dexterity,
            attributes.endurance,
            vitals.hp(),
            vitals.max_hp(),
            player.weapon,
            stats.damage,
            stats.damage_type,
        ),
        format!("Classes: {classes} | Total level: {}", player.total_level()),
    ])
}
