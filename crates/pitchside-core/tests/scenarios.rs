// End-to-end scenarios for the squad set builder.

mod common;

use common::{assert_squad_invariants, player};
use pitchside_core::squad::rules::SQUAD_SIZE;
use pitchside_core::{
    build_all_squads, build_squad, FixtureDifficulty, FormationUsed, InputError, Player, Position,
    Strategy,
};

const CLUBS: [&str; 20] = [
    "ARS", "AVL", "BOU", "BRE", "BHA", "BUR", "CHE", "CRY", "EVE", "FUL", "LEE", "LIV", "MCI",
    "MUN", "NEW", "NFO", "SUN", "TOT", "WHU", "WOL",
];

/// Fifty players spread over twenty clubs with varied prices and signals.
fn fifty_player_catalog() -> Vec<Player> {
    let layout = [
        (Position::Goalkeeper, 6),
        (Position::Defender, 16),
        (Position::Midfielder, 16),
        (Position::Forward, 12),
    ];
    let fixtures = [
        FixtureDifficulty::Easy,
        FixtureDifficulty::Medium,
        FixtureDifficulty::Hard,
    ];
    let mut players = Vec::new();
    let mut id = 1u32;
    for (pos, count) in layout {
        for i in 0..count {
            let price = 4.0 + f64::from((id * 7) % 90) / 10.0;
            let points = 20.0 + f64::from((id * 13) % 60);
            let mut p = player(id, CLUBS[(id as usize) % CLUBS.len()], pos, price, points);
            p.name = format!("{} {}", pos.display_str(), i + 1);
            p.form = f64::from(id % 9);
            p.fixture = fixtures[(id as usize) % fixtures.len()];
            p.yellow_cards = id % 6;
            players.push(p);
            id += 1;
        }
    }
    players
}

#[test]
fn goalkeepers_only_with_tight_budget_admits_one() {
    let players: Vec<Player> = (0..20)
        .map(|i| player(i, CLUBS[i as usize], Position::Goalkeeper, 4.0, 30.0))
        .collect();
    let squad = build_squad(&players, 4.0, Strategy::Value).unwrap();
    assert_eq!(squad.selected.len(), 1);
    assert_eq!(squad.selected[0].id, 0);
    assert!(squad.bench.is_empty());
    assert!(!squad.is_complete());
    assert_squad_invariants(&squad, 4.0);
}

#[test]
fn generous_budget_fills_squad_with_legal_formation() {
    let players = fifty_player_catalog();
    let set = build_all_squads(&players, 1000.0).unwrap();
    for squad in set.iter() {
        assert_eq!(squad.selected.len(), SQUAD_SIZE, "{}", squad.strategy);
        assert!(
            matches!(squad.formation(), FormationUsed::Legal(_)),
            "{} fell back to {}",
            squad.strategy,
            squad.formation()
        );
        assert_eq!(squad.starting().len(), 11);
        assert_eq!(squad.bench.len(), 4);
        assert!(squad.is_complete());
        assert_squad_invariants(squad, 1000.0);
    }
}

#[test]
fn standard_budget_every_strategy_respects_constraints() {
    let players = fifty_player_catalog();
    let set = build_all_squads(&players, 100.0).unwrap();
    for squad in set.iter() {
        assert_squad_invariants(squad, 100.0);
        let summary = squad.summary(100.0);
        assert!(summary.budget_remaining >= 0.0);
        assert_eq!(summary.players_selected, squad.selected.len());
    }
}

#[test]
fn strategies_produce_different_orderings() {
    let players = fifty_player_catalog();
    let set = build_all_squads(&players, 1000.0).unwrap();
    let ids = |strategy| -> Vec<u32> { set.get(strategy).selected.iter().map(|p| p.id).collect() };
    let balanced = ids(Strategy::Balanced);
    let value = ids(Strategy::Value);
    let aggressive = ids(Strategy::Aggressive);
    assert!(balanced != value || value != aggressive);
}

#[test]
fn identical_inputs_give_identical_squads() {
    let players = fifty_player_catalog();
    let first = build_all_squads(&players, 100.0).unwrap();
    let second = build_all_squads(&players, 100.0).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn repeated_calls_carry_no_state() {
    let players = fifty_player_catalog();
    let before = build_all_squads(&players, 100.0).unwrap();
    let _tight = build_all_squads(&players, 30.0).unwrap();
    let _loose = build_all_squads(&players, 500.0).unwrap();
    let after = build_all_squads(&players, 100.0).unwrap();
    assert_eq!(before, after);
}

#[test]
fn aggressive_prefers_easy_fixtures() {
    let mut easy = player(1, "ARS", Position::Forward, 8.0, 40.0);
    easy.fixture = FixtureDifficulty::Easy;
    let mut hard = player(2, "CHE", Position::Forward, 8.0, 40.0);
    hard.fixture = FixtureDifficulty::Hard;
    // Budget for one forward only.
    let squad = build_squad(&[hard, easy], 8.0, Strategy::Aggressive).unwrap();
    assert_eq!(squad.selected.len(), 1);
    assert_eq!(squad.selected[0].id, 1);
}

#[test]
fn invalid_input_fails_fast() {
    let players = fifty_player_catalog();
    assert_eq!(build_all_squads(&[], 100.0), Err(InputError::EmptyCatalog));
    assert_eq!(
        build_all_squads(&players, -1.0),
        Err(InputError::InvalidBudget(-1.0))
    );

    let mut broken = players.clone();
    broken[10].price = 0.0;
    assert!(matches!(
        build_all_squads(&broken, 100.0),
        Err(InputError::InvalidPlayer { id: 11, .. })
    ));
}

#[test]
fn disciplinary_risks_counted_at_threshold() {
    let mut players = vec![
        player(1, "ARS", Position::Goalkeeper, 4.0, 20.0),
        player(2, "CHE", Position::Defender, 4.0, 20.0),
        player(3, "LIV", Position::Midfielder, 4.0, 20.0),
    ];
    players[0].yellow_cards = 3;
    players[1].yellow_cards = 4;
    players[2].yellow_cards = 9;
    let squad = build_squad(&players, 100.0, Strategy::Balanced).unwrap();
    let summary = squad.summary(100.0);
    assert_eq!(summary.disciplinary_risks, 2);
    assert!((summary.total_cost - 12.0).abs() < 1e-9);
    assert!((summary.budget_remaining - 88.0).abs() < 1e-9);
    assert!((summary.projected_points - 60.0).abs() < 1e-9);
}
