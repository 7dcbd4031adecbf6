use std::collections::VecDeque;
use std::io;

use dungeon_client::{PlayThroughOutcome, Prompter, Session, SessionError};
use game_core::{GameConfig, PcgRng, ScriptedRng, StaticTables};

/// Replays canned answers and records everything the session prints.
#[derive(Default)]
struct ScriptedPrompter {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            transcript: Vec::new(),
        }
    }

    fn printed(&self, line: &str) -> bool {
        self.transcript.iter().any(|l| l == line)
    }
}

impl Prompter for ScriptedPrompter {
    fn say(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_owned());
        Ok(())
    }

    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.transcript.push(question.to_owned());
        Ok(self.answers.pop_front())
    }
}

/// Answers every question the same way: first class, take every weapon,
/// never start over.
struct AutoPilot {
    transcript: Vec<String>,
}

impl Prompter for AutoPilot {
    fn say(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_owned());
        Ok(())
    }

    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        let answer = if question.starts_with("Enter") {
            "Pilot"
        } else if question.starts_with("Your choice") {
            "1"
        } else if question.starts_with("Replace") {
            "y"
        } else {
            "n"
        };
        Ok(Some(answer.to_owned()))
    }
}

#[test]
fn single_victory_clears_a_short_dungeon() {
    let config = GameConfig::with_win_streak_target(1);
    // Attributes 3/3/3, then the Goblin; every later draw hits.
    let rng = ScriptedRng::new([3, 3, 3, 0]);
    let prompter = ScriptedPrompter::new(&["Ayla", "1", "2", "y", "n"]);
    let mut session = Session::new(prompter, rng, &StaticTables, &config);

    let outcomes = session.run().unwrap();
    assert_eq!(outcomes, vec![PlayThroughOutcome::Cleared { victories: 1 }]);

    let prompter = session.into_prompter();
    for line in [
        "Rolled attributes: Strength 3, Dexterity 3, Endurance 3",
        "Ayla moves first.",
        "Ayla defeats the Goblin!",
        "Victories in a row: 1",
        "HP restored: 7/7",
        "Warrior level 1 reached (total level 2).",
        "Max HP changed by +8. Current HP: 7/15",
        "The enemy dropped a weapon: Dagger (damage 2, piercing)",
        "You now wield: Dagger",
        "Thanks for playing!",
    ] {
        assert!(prompter.printed(line), "missing {line:?} in {:#?}", prompter.transcript);
    }
    assert!(
        prompter
            .transcript
            .iter()
            .any(|l| l.starts_with("Congratulations!"))
    );
}

#[test]
fn empty_name_falls_back_and_death_ends_the_run() {
    let config = GameConfig::default();
    // Attributes 1/1/1, then the Dragon, which opens and one-shots.
    let rng = ScriptedRng::new([1, 1, 1, 5]);
    let prompter = ScriptedPrompter::new(&["", "1", "n"]);
    let mut session = Session::new(prompter, rng, &StaticTables, &config);

    let outcomes = session.run().unwrap();
    assert_eq!(outcomes, vec![PlayThroughOutcome::Fallen { victories: 0 }]);

    let prompter = session.into_prompter();
    assert!(
        prompter
            .transcript
            .iter()
            .any(|l| l.starts_with("Hero: Strength 1, Dexterity 1, Endurance 1 | HP 5/5"))
    );
    assert!(prompter.printed("Classes: Rogue 1 | Total level: 1"));
    assert!(prompter.printed("You have died. Game over."));
    assert!(!prompter.printed("Victories in a row: 1"));
}

#[test]
fn replaying_starts_a_fresh_character() {
    let config = GameConfig::default();
    let rng = ScriptedRng::new([1, 1, 1, 5, 4, 1, 1, 1, 5, 4]);
    let prompter = ScriptedPrompter::new(&["First", "1", "y", "Second", "3", "n"]);
    let mut session = Session::new(prompter, rng, &StaticTables, &config);

    let outcomes = session.run().unwrap();
    assert_eq!(outcomes.len(), 2);

    let prompter = session.into_prompter();
    assert!(prompter.printed("Classes: Barbarian 1 | Total level: 1"));
    assert!(prompter.printed("Second was slain by the Dragon."));
}

#[test]
fn input_ending_mid_game_is_reported() {
    let config = GameConfig::default();
    let rng = ScriptedRng::new([2, 2, 2, 0]);
    let prompter = ScriptedPrompter::new(&["Ayla"]);
    let mut session = Session::new(prompter, rng, &StaticTables, &config);

    assert!(matches!(session.run(), Err(SessionError::InputClosed)));
}

#[test]
fn seeded_sessions_always_finish() {
    let config = GameConfig::default();

    for seed in 0..100 {
        let pilot = AutoPilot {
            transcript: Vec::new(),
        };
        let mut session = Session::new(pilot, PcgRng::new(seed), &StaticTables, &config);

        let outcomes = session.run().unwrap();
        assert_eq!(outcomes.len(), 1, "seed {seed}");
        assert!(outcomes[0].victories() <= config.win_streak_target);

        let ending = match outcomes[0] {
            PlayThroughOutcome::Cleared { .. } => "Congratulations!",
            PlayThroughOutcome::Fallen { .. } => "You have died. Game over.",
            PlayThroughOutcome::Stalemate { .. } => "After 10000 attacks",
        };
        let transcript = session.into_prompter().transcript;
        assert!(
            transcript.iter().any(|l| l.starts_with(ending)),
            "seed {seed}"
        );
    }
}

#[test]
fn stalemate_ends_the_play_through_but_not_the_session() {
    let config = GameConfig::default();
    let rng = ScriptedRng::new([
        1, 1, 3, // Barbarian with strength 1, endurance 3
        0, 1, 3, // Goblin misses, club + rage kills it
        3, 1, 4, // Ghost misses, club + rage kills it, drops a Sword
        2, 1, // Slime; the opening miss leaves rage short
    ]);
    let prompter = ScriptedPrompter::new(&["Hild", "3", "3", "n", "3", "y", "n"]);
    let mut session = Session::new(prompter, rng, &StaticTables, &config);

    let outcomes = session.run().unwrap();
    assert_eq!(outcomes, vec![PlayThroughOutcome::Stalemate { victories: 2 }]);

    let prompter = session.into_prompter();
    assert!(prompter.printed("Barbarian 3 passive: Endurance +1."));
    assert!(prompter.printed("You now wield: Sword"));
    assert!(prompter.printed(
        "After 10000 attacks neither Hild nor the Slime can wound the other. \
         You withdraw from the dungeon."
    ));
    assert!(prompter.printed("Start a new game? (y/n): "));
    assert!(prompter.printed("Thanks for playing!"));
}
