//! Integration tests for the ring: occupancy, skill, the outcome rule and recovery.

use boxing_ring::{
    fighting_skill, win_probability, Arena, Boxer, BoxerId, BoxingError, MemoryStore, NewBoxer,
    RandomError, Registry, Ring, ScriptedRandom,
};

fn registry_with(boxers: &[(&str, u32, f64, u32)]) -> (Registry<MemoryStore>, Vec<BoxerId>) {
    let mut registry = Registry::new(MemoryStore::new());
    let ids = boxers
        .iter()
        .map(|&(name, weight, reach, age)| {
            registry
                .create(NewBoxer::new(name, weight, 70.0, reach, age))
                .unwrap()
        })
        .collect();
    (registry, ids)
}

fn boxer(name: &str, weight: u32, reach: f64, age: u32) -> Boxer {
    let (registry, ids) = registry_with(&[(name, weight, reach, age)]);
    registry.get_by_id(ids[0]).unwrap()
}

#[test]
fn skill_matches_the_formula() {
    let ali = boxer("Ali", 180, 74.5, 28);
    assert!((fighting_skill(&ali) - 547.45).abs() < 1e-9);
}

#[test]
fn age_modifier_penalises_young_and_old() {
    let base = fighting_skill(&boxer("Ali", 180, 70.0, 30));
    assert!((fighting_skill(&boxer("Ali", 180, 70.0, 24)) - (base - 1.0)).abs() < 1e-9);
    assert!((fighting_skill(&boxer("Ali", 180, 70.0, 25)) - base).abs() < 1e-9);
    assert!((fighting_skill(&boxer("Ali", 180, 70.0, 35)) - base).abs() < 1e-9);
    assert!((fighting_skill(&boxer("Ali", 180, 70.0, 36)) - (base - 2.0)).abs() < 1e-9);
}

#[test]
fn third_boxer_is_turned_away() {
    let mut ring = Ring::new();
    ring.enter(boxer("Ali", 180, 72.5, 28)).unwrap();
    ring.enter(boxer("Tyson", 220, 71.0, 30)).unwrap();
    assert!(ring.is_full());

    assert!(matches!(
        ring.enter(boxer("Rocky", 190, 70.0, 30)),
        Err(BoxingError::RingFull)
    ));
    let names: Vec<_> = ring.boxers().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Ali", "Tyson"]);
}

#[test]
fn fight_needs_two_boxers_and_leaves_everything_alone() {
    let (mut registry, ids) = registry_with(&[("Ali", 180, 72.5, 28)]);
    let mut random = ScriptedRandom::new([0.3]);
    let mut ring = Ring::new();

    assert!(matches!(
        ring.fight(&mut registry, &mut random),
        Err(BoxingError::InsufficientBoxers { present: 0 })
    ));

    ring.enter(registry.get_by_id(ids[0]).unwrap()).unwrap();
    assert!(matches!(
        ring.fight(&mut registry, &mut random),
        Err(BoxingError::InsufficientBoxers { present: 1 })
    ));
    assert_eq!(ring.len(), 1);
    assert_eq!(random.remaining(), 1);
    assert_eq!(registry.get_by_id(ids[0]).unwrap().stats.fights, 0);
}

#[test]
fn fight_records_one_win_one_loss_and_empties_the_ring() {
    let (mut registry, ids) = registry_with(&[("Ali", 180, 72.5, 28), ("Tyson", 180, 72.5, 28)]);
    let mut ring = Ring::new();
    for &id in &ids {
        ring.enter(registry.get_by_id(id).unwrap()).unwrap();
    }

    let bout = ring
        .fight(&mut registry, &mut ScriptedRandom::new([0.3]))
        .unwrap();

    assert!(ring.is_empty());
    let winner = registry.get_by_id(bout.winner.id).unwrap().stats;
    let loser = registry.get_by_id(bout.loser.id).unwrap().stats;
    assert_eq!((winner.fights, winner.wins), (1, 1));
    assert_eq!((loser.fights, loser.wins), (1, 0));
    assert_ne!(bout.winner.id, bout.loser.id);
    assert_eq!(bout.draw, 0.3);
}

#[test]
fn bout_reports_stats_after_the_fight() {
    let (mut registry, ids) = registry_with(&[("Ali", 180, 72.5, 28), ("Tyson", 180, 72.5, 28)]);
    let mut ring = Ring::new();
    for &id in &ids {
        ring.enter(registry.get_by_id(id).unwrap()).unwrap();
    }

    let bout = ring
        .fight(&mut registry, &mut ScriptedRandom::new([0.3]))
        .unwrap();

    assert_eq!((bout.winner.stats.fights, bout.winner.stats.wins), (1, 1));
    assert_eq!((bout.loser.stats.fights, bout.loser.stats.wins), (1, 0));
    assert_eq!(bout.winner, registry.get_by_id(bout.winner.id).unwrap());
    assert_eq!(bout.loser, registry.get_by_id(bout.loser.id).unwrap());
}

#[test]
fn draw_below_threshold_goes_to_first_admitted_even_when_weaker() {
    // Tyson's longer name gives the far higher skill, but Ali entered first.
    let (mut registry, ids) = registry_with(&[("Ali", 180, 72.5, 28), ("Tyson", 180, 72.5, 28)]);
    let mut ring = Ring::new();
    for &id in &ids {
        ring.enter(registry.get_by_id(id).unwrap()).unwrap();
    }
    let bout = ring
        .fight(&mut registry, &mut ScriptedRandom::new([0.99]))
        .unwrap();

    assert!(bout.skill_1 < bout.skill_2);
    assert!(bout.threshold > 0.99);
    assert_eq!(bout.winner.name, "Ali");
    assert_eq!(bout.loser.name, "Tyson");
}

#[test]
fn draw_at_threshold_goes_to_second_admitted() {
    // Same weight, name length, reach and age: even skills, threshold exactly 0.5.
    let (mut registry, ids) = registry_with(&[("Ann", 150, 68.0, 30), ("Bob", 150, 68.0, 30)]);
    let mut ring = Ring::new();
    for &id in &ids {
        ring.enter(registry.get_by_id(id).unwrap()).unwrap();
    }
    let bout = ring
        .fight(&mut registry, &mut ScriptedRandom::new([0.5]))
        .unwrap();
    assert_eq!(bout.threshold, 0.5);
    assert_eq!(bout.winner.name, "Bob");
}

#[test]
fn random_failure_propagates_and_keeps_occupants() {
    let (mut registry, ids) = registry_with(&[("Ali", 180, 72.5, 28), ("Tyson", 180, 72.5, 28)]);
    let mut ring = Ring::new();
    for &id in &ids {
        ring.enter(registry.get_by_id(id).unwrap()).unwrap();
    }

    let err = ring
        .fight(&mut registry, &mut ScriptedRandom::default())
        .unwrap_err();
    assert!(matches!(err, BoxingError::Random(RandomError::Exhausted)));
    assert!(err.is_dependency());
    assert_eq!(ring.len(), 2);
    for &id in &ids {
        assert_eq!(registry.get_by_id(id).unwrap().stats.fights, 0);
    }
}

#[test]
fn boxer_deleted_after_admission_fails_the_fight() {
    let (mut registry, ids) = registry_with(&[("Ali", 180, 72.5, 28), ("Tyson", 180, 72.5, 28)]);
    let mut ring = Ring::new();
    for &id in &ids {
        ring.enter(registry.get_by_id(id).unwrap()).unwrap();
    }
    registry.delete(ids[1]).unwrap();

    // 0.1 is below the threshold: Ali's win is recorded, then Tyson's loss fails.
    let err = ring
        .fight(&mut registry, &mut ScriptedRandom::new([0.1]))
        .unwrap_err();
    assert!(matches!(err, BoxingError::NotFound(_)));
    assert_eq!(ring.len(), 2);
    assert_eq!(registry.get_by_id(ids[0]).unwrap().stats.wins, 1);
}

#[test]
fn clearing_an_empty_ring_is_a_no_op() {
    let mut ring = Ring::new();
    ring.clear();
    ring.clear();
    assert!(ring.is_empty());
}

#[test]
fn probability_grows_with_the_gap() {
    assert_eq!(win_probability(10.0, 10.0), 0.5);
    assert!(win_probability(0.0, 1.0) < win_probability(0.0, 2.0));
    assert_eq!(win_probability(0.0, 1000.0), 1.0);
}

#[test]
fn arena_runs_a_full_match() {
    let mut arena = Arena::new(MemoryStore::new(), ScriptedRandom::new([0.3]));
    let ali = arena
        .create_competitor(NewBoxer::new("Ali", 180, 70.0, 74.5, 28))
        .unwrap();
    arena
        .create_competitor(NewBoxer::new("Tyson", 220, 70.0, 71.0, 30))
        .unwrap();

    arena.admit_by_id(ali).unwrap();
    arena.admit_by_name("Tyson").unwrap();
    assert_eq!(arena.get_ring_occupants().len(), 2);
    assert!(matches!(
        arena.admit_by_name("Tyson"),
        Err(BoxingError::RingFull)
    ));

    let winner = arena.run_match().unwrap();
    assert_eq!(winner, "Ali");
    assert!(arena.get_ring_occupants().is_empty());

    let board = arena.get_leaderboard("wins").unwrap();
    let names: Vec<_> = board.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Ali", "Tyson"]);
}

#[test]
fn arena_rejects_unknown_handles_and_recovers() {
    let mut arena = Arena::new(MemoryStore::new(), ScriptedRandom::default());
    assert!(matches!(
        arena.admit_by_name("Ghost"),
        Err(BoxingError::NotFound(_))
    ));
    assert!(matches!(
        arena.run_match(),
        Err(BoxingError::InsufficientBoxers { present: 0 })
    ));

    arena
        .create_competitor(NewBoxer::new("Ann", 150, 68.0, 68.0, 30))
        .unwrap();
    arena
        .create_competitor(NewBoxer::new("Bob", 150, 68.0, 68.0, 30))
        .unwrap();
    arena.admit_by_name("Ann").unwrap();
    arena.admit_by_name("Bob").unwrap();
    assert!(arena.run_match().is_err());
    assert_eq!(arena.get_ring_occupants().len(), 2);

    arena.reset_ring();
    assert!(arena.get_ring_occupants().is_empty());
    arena.clear_ring();
}
