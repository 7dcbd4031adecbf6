use game_core::{
    ArchetypeId, Attributes, Battle, BattleError, BattleEvent, BattlePhase, ClassKind,
    CombatantKind, EnemyArchetype, GameConfig, ModifierKind, PcgRng, PlayerState, RngOracle,
    ScriptedRng, StaticTables, TablesOracle, WeaponKind, create_player, equip_weapon, level_up,
    run_battle,
};

fn archetype(id: ArchetypeId) -> &'static EnemyArchetype {
    StaticTables::ARCHETYPES
        .iter()
        .find(|archetype| archetype.id == id)
        .unwrap()
}

fn modifier_amounts(events: &[BattleEvent], kind: ModifierKind) -> Vec<i64> {
    events
        .iter()
        .filter_map(BattleEvent::as_modifier)
        .filter(|(fired, _)| *fired == kind)
        .map(|(_, amount)| amount)
        .collect()
}

fn damage_dealt_by(events: &[BattleEvent], name: &str) -> Vec<u32> {
    events
        .iter()
        .filter_map(|event| match event {
            BattleEvent::DamageDealt {
                attacker, damage, ..
            } if attacker == name => Some(*damage),
            _ => None,
        })
        .collect()
}

#[test]
fn rogue_one_shots_goblin() {
    let mut player =
        create_player("Ayla", Attributes::new(2, 3, 1), ClassKind::Rogue, &StaticTables).unwrap();
    // dex 3 vs 2: draw in [1, 5], 3 is the lowest hit
    let mut rng = ScriptedRng::new([3]);

    let report =
        run_battle(&mut player, archetype(ArchetypeId::Goblin), &StaticTables, &mut rng).unwrap();

    assert!(report.victory);
    assert_eq!(report.turns, 1);
    assert_eq!(rng.remaining(), 0);
    assert!(report.events.contains(&BattleEvent::FirstActor {
        side: CombatantKind::Player,
        name: "Ayla".into(),
    }));
    assert_eq!(modifier_amounts(&report.events, ModifierKind::RogueAmbush), vec![1]);
    assert!(report.events.contains(&BattleEvent::DamageDealt {
        attacker: "Ayla".into(),
        defender: "Goblin".into(),
        damage: 5,
        hp: 0,
        max_hp: 5,
    }));
}

#[test]
fn warrior_opening_fires_once_per_battle_and_rearms() {
    let mut player =
        create_player("Bran", Attributes::new(1, 3, 3), ClassKind::Warrior, &StaticTables).unwrap();

    for _ in 0..2 {
        // player hit, skeleton miss, player hit
        let mut rng = ScriptedRng::new([5, 1, 5]);
        let report =
            run_battle(&mut player, archetype(ArchetypeId::Skeleton), &StaticTables, &mut rng)
                .unwrap();

        assert!(report.victory);
        assert_eq!(
            modifier_amounts(&report.events, ModifierKind::WarriorOpening),
            vec![3]
        );
        // sword 3 + str 1 + opening 3, then sword 3 + str 1
        assert_eq!(damage_dealt_by(&report.events, "Bran"), vec![7, 4]);
        assert_eq!(player.turn_counter(), 2);
    }
}

#[test]
fn rogue_poison_grows_with_every_attempt() {
    let mut player =
        create_player("Ayla", Attributes::new(1, 1, 1), ClassKind::Rogue, &StaticTables).unwrap();
    level_up(&mut player, ClassKind::Rogue, &StaticTables).unwrap();
    level_up(&mut player, ClassKind::Rogue, &StaticTables).unwrap();
    player.restore_hp();
    assert_eq!(player.attributes.dexterity, 2);

    // player always hits, golem always misses
    let mut rng = ScriptedRng::new([3, 1, 3, 1, 3, 1, 3]);
    let report =
        run_battle(&mut player, archetype(ArchetypeId::Golem), &StaticTables, &mut rng).unwrap();

    assert!(report.victory);
    // poison is 0 on the first attempt, so only turns 2..=4 report it
    assert_eq!(
        modifier_amounts(&report.events, ModifierKind::RoguePoison),
        vec![1, 2, 3]
    );
    // dagger 2 + str 1 + ambush 1 + poison, minus golem stone skin 3
    assert_eq!(damage_dealt_by(&report.events, "Ayla"), vec![1, 2, 3, 4]);
}

#[test]
fn misses_advance_per_battle_bonuses() {
    let mut player =
        create_player("Ayla", Attributes::new(1, 1, 1), ClassKind::Rogue, &StaticTables).unwrap();
    level_up(&mut player, ClassKind::Rogue, &StaticTables).unwrap();
    level_up(&mut player, ClassKind::Rogue, &StaticTables).unwrap();
    player.restore_hp();

    let mut battle = Battle::new(&mut player, archetype(ArchetypeId::Golem), &StaticTables);
    // player miss, golem miss, player hit
    let mut rng = ScriptedRng::new([1, 1, 3]);
    battle.start().unwrap();
    for _ in 0..3 {
        battle.step(&mut rng).unwrap();
    }

    assert_eq!(
        modifier_amounts(battle.events(), ModifierKind::RoguePoison),
        vec![1]
    );
    assert_eq!(battle.player().turn_counter(), 2);
}

#[test]
fn slime_lets_strength_and_skills_through() {
    let mut player =
        create_player("Bran", Attributes::new(2, 3, 1), ClassKind::Warrior, &StaticTables).unwrap();
    // every player attack hits, every slime attack misses
    let mut rng = ScriptedRng::new([4, 1, 4, 1, 4]);

    let report =
        run_battle(&mut player, archetype(ArchetypeId::Slime), &StaticTables, &mut rng).unwrap();

    assert!(report.victory);
    // (3 + 2 + 3) - 3, then (3 + 2) - 3 twice
    assert_eq!(damage_dealt_by(&report.events, "Bran"), vec![5, 2, 2]);
    assert_eq!(
        modifier_amounts(&report.events, ModifierKind::SlashImmunity),
        vec![-3, -3, -3]
    );
}

#[test]
fn mutual_immunity_hits_the_turn_limit() {
    let mut player = create_player(
        "Hild",
        Attributes::new(1, 1, 3),
        ClassKind::Barbarian,
        &StaticTables,
    )
    .unwrap();
    level_up(&mut player, ClassKind::Barbarian, &StaticTables).unwrap();
    level_up(&mut player, ClassKind::Barbarian, &StaticTables).unwrap();
    equip_weapon(&mut player, WeaponKind::Sword, &StaticTables).unwrap();
    assert_eq!(player.attributes.endurance, 4);

    // The opening miss burns one rage turn; the Slime is left on 2 HP, the
    // fatigued sword hits for 3 - 3 and stone skin eats the spear's 4.
    let mut rng = ScriptedRng::new([1]);
    let mut battle = Battle::new(&mut player, archetype(ArchetypeId::Slime), &StaticTables);
    battle.start().unwrap();

    let err = loop {
        match battle.step(&mut rng) {
            Ok(_) => continue,
            Err(err) => break err,
        }
    };
    assert_eq!(
        err,
        BattleError::TurnLimitExceeded {
            limit: GameConfig::MAX_BATTLE_TURNS
        }
    );
    assert_eq!(battle.turns(), GameConfig::MAX_BATTLE_TURNS);
    assert_eq!(battle.phase(), BattlePhase::InProgress);
    assert_eq!(battle.enemy().unwrap().vitals().hp(), 2);
    assert_eq!(battle.player().vitals().hp(), battle.player().vitals().max_hp());
}

#[test]
fn skeleton_takes_double_blunt_damage_after_bonuses() {
    let mut player =
        create_player("Grom", Attributes::new(1, 2, 1), ClassKind::Barbarian, &StaticTables)
            .unwrap();
    let mut rng = ScriptedRng::new([4]);

    let report =
        run_battle(&mut player, archetype(ArchetypeId::Skeleton), &StaticTables, &mut rng)
            .unwrap();

    assert!(report.victory);
    // (club 3 + str 1 + rage 2) × 2
    assert_eq!(damage_dealt_by(&report.events, "Grom"), vec![12]);
    assert_eq!(report.reward, Some(game_core::WeaponKind::Club));
}

#[test]
fn dragon_breathes_on_its_third_attack() {
    let mut player =
        create_player("Grom", Attributes::new(3, 3, 3), ClassKind::Barbarian, &StaticTables)
            .unwrap();
    for _ in 0..4 {
        level_up(&mut player, ClassKind::Barbarian, &StaticTables).unwrap();
    }
    player.restore_hp();
    // 6 × 5 + (3 + 1) × 5
    assert_eq!(player.vitals().max_hp(), 50);

    let mut battle = Battle::new(&mut player, archetype(ArchetypeId::Dragon), &StaticTables);
    // both sides miss twice, player misses again, dragon hits
    let mut rng = ScriptedRng::new([1, 1, 1, 1, 1, 6]);
    battle.start().unwrap();
    for _ in 0..6 {
        battle.step(&mut rng).unwrap();
    }

    assert_eq!(
        modifier_amounts(battle.events(), ModifierKind::FireBreath),
        vec![3]
    );
    // legendary sword 10 + str 3 + breath 3, minus stone skin 4
    assert_eq!(damage_dealt_by(battle.events(), "Dragon"), vec![12]);
    assert_eq!(battle.player().vitals().hp(), 38);
    assert_eq!(battle.phase(), BattlePhase::InProgress);
}

#[test]
fn faster_enemy_opens_and_ties_favor_the_player() {
    let mut even =
        create_player("Even", Attributes::new(1, 3, 1), ClassKind::Rogue, &StaticTables).unwrap();
    let mut slow =
        create_player("Slow", Attributes::new(1, 2, 1), ClassKind::Rogue, &StaticTables).unwrap();
    let ghost = archetype(ArchetypeId::Ghost);

    let mut battle = Battle::new(&mut even, ghost, &StaticTables);
    battle.start().unwrap();
    assert_eq!(battle.turn_owner(), CombatantKind::Player);

    let mut battle = Battle::new(&mut slow, ghost, &StaticTables);
    battle.start().unwrap();
    assert_eq!(battle.turn_owner(), CombatantKind::Enemy);
}

#[test]
fn hp_stays_within_bounds_across_seeded_runs() {
    let classes = [ClassKind::Rogue, ClassKind::Warrior, ClassKind::Barbarian];

    for seed in 0..200u64 {
        let mut rng = PcgRng::new(seed);
        let attributes = Attributes::new(rng.range(1, 3), rng.range(1, 3), rng.range(1, 3));
        let class = classes[rng.range(0, 2) as usize];
        let mut player: PlayerState =
            create_player("Seed", attributes, class, &StaticTables).unwrap();

        for _ in 0..3 {
            let index = rng.range(0, StaticTables.archetypes().len() as u32 - 1) as usize;
            let enemy = &StaticTables.archetypes()[index];
            let report = run_battle(&mut player, enemy, &StaticTables, &mut rng).unwrap();

            for event in &report.events {
                if let BattleEvent::DamageDealt { hp, max_hp, .. } = event {
                    assert!(hp <= max_hp, "seed {seed}: {event}");
                }
            }
            assert!(player.vitals().is_consistent(), "seed {seed}");
            assert_eq!(report.victory, player.is_alive(), "seed {seed}");
            if !report.victory {
                break;
            }

            player.restore_hp();
            let class = classes[rng.range(0, 2) as usize];
            level_up(&mut player, class, &StaticTables).unwrap();
            assert!(player.vitals().is_consistent(), "seed {seed}");
            assert_eq!(
                player.vitals().max_hp(),
                player.calculate_max_hp(&StaticTables).unwrap()
            );
        }
    }
}
