// Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use pitchside_core::squad::rules::{
    budget_tenths, position_cap, price_tenths, MAX_PER_TEAM, SQUAD_SIZE, STARTING_SIZE,
};
use pitchside_core::{FixtureDifficulty, FormationUsed, Player, Position, Squad};

pub fn player(id: u32, team: &str, position: Position, price: f64, points: f64) -> Player {
    Player {
        id,
        name: format!("Player {id}"),
        team: team.into(),
        position,
        price,
        ppm: points / price,
        form: 0.0,
        fixture: FixtureDifficulty::Medium,
        projected_points: points,
        yellow_cards: 0,
    }
}

/// Assert every structural invariant a built squad must satisfy.
pub fn assert_squad_invariants(squad: &Squad, budget: f64) {
    let selected = &squad.selected;
    assert!(selected.len() <= SQUAD_SIZE, "too many players: {}", selected.len());

    // Position and club caps.
    for pos in Position::ALL {
        let n = selected.iter().filter(|p| p.position == pos).count();
        assert!(n <= position_cap(pos), "{pos} cap broken: {n}");
    }
    let mut per_team: HashMap<&str, usize> = HashMap::new();
    for p in selected {
        *per_team.entry(p.team.as_str()).or_insert(0) += 1;
    }
    for (team, n) in per_team {
        assert!(n <= MAX_PER_TEAM, "club cap broken for {team}: {n}");
    }

    // Budget, summed in admission order like the selector does.
    let cost: i64 = selected.iter().map(|p| price_tenths(p.price)).sum();
    assert!(
        cost <= budget_tenths(budget),
        "cost {cost} tenths exceeds budget {budget}"
    );

    // Lineup composition.
    let starting = squad.starting();
    let keepers_selected = selected.iter().any(|p| p.position.is_goalkeeper());
    let keepers_starting = starting.iter().filter(|p| p.position.is_goalkeeper()).count();
    assert_eq!(keepers_starting, usize::from(keepers_selected));
    if let FormationUsed::Legal(formation) = squad.formation() {
        let count = |pos| starting.iter().filter(|p| p.position == pos).count();
        assert_eq!(count(Position::Defender), formation.defenders);
        assert_eq!(count(Position::Midfielder), formation.midfielders);
        assert_eq!(count(Position::Forward), formation.forwards);
        assert!(formation.is_legal());
        if keepers_selected {
            assert_eq!(starting.len(), STARTING_SIZE);
        }
    }

    // Bench is exactly selected minus starting.
    assert_eq!(starting.len() + squad.bench.len(), selected.len());
    for p in selected {
        let in_starting = starting.iter().filter(|s| s.id == p.id).count();
        let in_bench = squad.bench.iter().filter(|b| b.id == p.id).count();
        assert_eq!(in_starting + in_bench, 1, "player {} placed {} times", p.id, in_starting + in_bench);
    }
    if let Some(first_keeper) = squad.bench.iter().position(|p| p.position.is_goalkeeper()) {
        assert!(
            squad.bench[first_keeper..].iter().all(|p| p.position.is_goalkeeper()),
            "benched goalkeeper must sort last"
        );
    }

    // Captaincy.
    match (&squad.captain, &squad.vice_captain) {
        (Some(captain), Some(vice)) => {
            assert_ne!(captain.id, vice.id);
            assert!(starting.iter().any(|p| p.id == captain.id));
            assert!(starting.iter().any(|p| p.id == vice.id));
            assert!(captain.projected_points >= vice.projected_points);
            for p in starting.iter().filter(|p| p.id != captain.id && p.id != vice.id) {
                assert!(vice.projected_points >= p.projected_points);
            }
        }
        (Some(captain), None) => assert_eq!(starting.len(), 1, "vice missing for {}", captain.id),
        (None, None) => assert!(starting.is_empty()),
        (None, Some(_)) => panic!("vice-captain without a captain"),
    }
}
