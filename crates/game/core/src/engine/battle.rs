//! One fight, from archetype instantiation to a terminal phase.

use strum::Display;

use crate::combat::{AttackOutcome, BattleEvent, perform_attack};
use crate::config::GameConfig;
use crate::env::{ArchetypeId, EnemyArchetype, RngOracle, TablesOracle, WeaponKind};
use crate::state::{Attributes, Combatant, CombatantKind, EnemyState, PlayerState};

use super::BattleError;

/// Lifecycle of a [`Battle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattlePhase {
    NotStarted,
    InProgress,
    PlayerVictory,
    PlayerDefeat,
}

impl BattlePhase {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::PlayerVictory | Self::PlayerDefeat)
    }
}

/// The player opens unless the enemy is strictly faster.
pub fn determine_first_actor(player: &Attributes, enemy: &Attributes) -> CombatantKind {
    if player.dexterity >= enemy.dexterity {
        CombatantKind::Player
    } else {
        CombatantKind::Enemy
    }
}

/// Summary of a finished battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub victory: bool,
    pub archetype: ArchetypeId,
    /// Weapon the defeated archetype drops, offered to the player on victory.
    pub reward: Option<WeaponKind>,
    /// Attacks performed by both sides.
    pub turns: u32,
    pub events: Vec<BattleEvent>,
}

impl BattleReport {
    /// Renders every event, in order.
    pub fn narration(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

/// Turn-based duel between the player and one enemy.
///
/// The player is borrowed mutably for the whole fight: HP lost here carries
/// over to the rest of the play-through.
pub struct Battle<'a, T: TablesOracle + ?Sized> {
    player: &'a mut PlayerState,
    archetype: EnemyArchetype,
    tables: &'a T,
    enemy: Option<EnemyState>,
    phase: BattlePhase,
    turn_owner: CombatantKind,
    turns: u32,
    events: Vec<BattleEvent>,
}

impl<'a, T: TablesOracle + ?Sized> Battle<'a, T> {
    pub fn new(player: &'a mut PlayerState, archetype: &EnemyArchetype, tables: &'a T) -> Self {
        Self {
            player,
            archetype: *archetype,
            tables,
            enemy: None,
            phase: BattlePhase::NotStarted,
            turn_owner: CombatantKind::Player,
            turns: 0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// The enemy, once the battle has started.
    pub fn enemy(&self) -> Option<&EnemyState> {
        self.enemy.as_ref()
    }

    pub fn player(&self) -> &PlayerState {
        self.player
    }

    /// Side that performs the next attack.
    pub fn turn_owner(&self) -> CombatantKind {
        self.turn_owner
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Instantiates the enemy at full HP, resets both turn counters and picks
    /// the opening side.
    pub fn start(&mut self) -> Result<(), BattleError> {
        match self.phase {
            BattlePhase::NotStarted => {}
            BattlePhase::InProgress => return Err(BattleError::AlreadyStarted),
            phase => return Err(BattleError::AlreadyFinished { phase }),
        }
        if !self.player.is_alive() {
            return Err(BattleError::PlayerDefeated);
        }

        let mut enemy = EnemyState::from_archetype(&self.archetype);
        enemy.reset_battle_counters();
        self.player.reset_battle_counters();

        self.turn_owner = determine_first_actor(&self.player.attributes, &enemy.attributes);

        self.events.push(BattleEvent::Encounter {
            enemy: enemy.archetype,
            hp: enemy.vitals().hp(),
            max_hp: enemy.vitals().max_hp(),
            weapon: enemy.weapon,
        });
        let opener = match self.turn_owner {
            CombatantKind::Player => self.player.name.clone(),
            CombatantKind::Enemy => enemy.name().to_owned(),
        };
        self.events.push(BattleEvent::FirstActor {
            side: self.turn_owner,
            name: opener,
        });

        self.enemy = Some(enemy);
        self.phase = BattlePhase::InProgress;
        Ok(())
    }

    /// Performs exactly one attack by the current turn owner, then hands the
    /// turn to the other side unless the defender fell.
    pub fn step<R: RngOracle + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<AttackOutcome, BattleError> {
        match self.phase {
            BattlePhase::InProgress => {}
            BattlePhase::NotStarted => return Err(BattleError::NotStarted),
            phase => return Err(BattleError::AlreadyFinished { phase }),
        }
        if self.turns >= GameConfig::MAX_BATTLE_TURNS {
            return Err(BattleError::TurnLimitExceeded {
                limit: GameConfig::MAX_BATTLE_TURNS,
            });
        }
        let enemy = self.enemy.as_mut().ok_or(BattleError::NotStarted)?;

        let outcome = match self.turn_owner {
            CombatantKind::Player => perform_attack(
                &mut Combatant::Player(&mut *self.player),
                &mut Combatant::Enemy(enemy),
                self.tables,
                rng,
                &mut self.events,
            )?,
            CombatantKind::Enemy => perform_attack(
                &mut Combatant::Enemy(enemy),
                &mut Combatant::Player(&mut *self.player),
                self.tables,
                rng,
                &mut self.events,
            )?,
        };
        self.turns += 1;

        if outcome.is_defeat() {
            self.finish();
        } else {
            self.turn_owner = match self.turn_owner {
                CombatantKind::Player => CombatantKind::Enemy,
                CombatantKind::Enemy => CombatantKind::Player,
            };
        }

        Ok(outcome)
    }

    /// Starts the battle if needed and steps until one side falls.
    pub fn run<R: RngOracle + ?Sized>(mut self, rng: &mut R) -> Result<BattleReport, BattleError> {
        if self.phase == BattlePhase::NotStarted {
            self.start()?;
        }
        while !self.phase.is_terminal() {
            self.step(rng)?;
        }
        self.into_report()
    }

    /// Consumes a finished battle into its report.
    pub fn into_report(self) -> Result<BattleReport, BattleError> {
        if !self.phase.is_terminal() {
            return Err(BattleError::NotFinished { phase: self.phase });
        }
        Ok(BattleReport {
            victory: self.phase == BattlePhase::PlayerVictory,
            archetype: self.archetype.id,
            reward: self.archetype.reward,
            turns: self.turns,
            events: self.events,
        })
    }

    fn finish(&mut self) {
        let player = self.player.name.clone();
        let enemy = self.archetype.id;
        if self.player.is_alive() {
            self.phase = BattlePhase::PlayerVictory;
            self.events.push(BattleEvent::Victory { player, enemy });
        } else {
            self.phase = BattlePhase::PlayerDefeat;
            self.events.push(BattleEvent::Defeat { player, enemy });
        }
    }
}

/// Fights `archetype` to completion with the injected RNG.
///
/// # Errors
///
/// Only broken invariants or inconsistent tables surface here; a lost fight is
/// a normal report with `victory == false`.
pub fn run_battle<R: RngOracle + ?Sized>(
    player: &mut PlayerState,
    archetype: &EnemyArchetype,
    tables: &(impl TablesOracle + ?Sized),
    rng: &mut R,
) -> Result<BattleReport, BattleError> {
    Battle::new(player, archetype, tables).run(rng)
}
