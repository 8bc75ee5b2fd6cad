// Per-strategy player scoring.
//
// Each strategy is a fixed linear re-weighting of the same player signals.
// The weights are design constants, not configuration.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::player::{FixtureDifficulty, Player};

/// A named scoring formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strategy {
    Balanced,
    Value,
    Aggressive,
}

impl Strategy {
    /// All strategies in set order (Set 1, Set 2, Set 3).
    pub const ALL: [Strategy; 3] = [Strategy::Balanced, Strategy::Value, Strategy::Aggressive];

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "balanced" | "premium" => Some(Strategy::Balanced),
            "value" => Some(Strategy::Value),
            "aggressive" => Some(Strategy::Aggressive),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Balanced => "Balanced",
            Strategy::Value => "Value",
            Strategy::Aggressive => "Aggressive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Balanced => "Premium picks balanced against points per million",
            Strategy::Value => "Value players with the best return per million",
            Strategy::Aggressive => "Form and easy fixtures",
        }
    }

    /// 1-based set number used when presenting the three squads side by side.
    pub fn set_number(&self) -> usize {
        match self {
            Strategy::Balanced => 1,
            Strategy::Value => 2,
            Strategy::Aggressive => 3,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bonus the aggressive strategy adds for a player's fixture run.
pub fn fixture_bonus(fixture: FixtureDifficulty) -> f64 {
    match fixture {
        FixtureDifficulty::Easy => 15.0,
        FixtureDifficulty::Medium => 5.0,
        FixtureDifficulty::Hard => 0.0,
    }
}

/// Desirability of a player under a strategy. Higher is better.
///
/// - Balanced: `0.3*ppm + 0.5*projected + 2*form`
/// - Value: `0.6*ppm + 0.3*projected + 1*form`
/// - Aggressive: `0.7*projected + 3*form + fixture_bonus`
pub fn score(player: &Player, strategy: Strategy) -> f64 {
    match strategy {
        Strategy::Balanced => {
            player.ppm * 0.3 + player.projected_points * 0.5 + player.form * 2.0
        }
        Strategy::Value => player.ppm * 0.6 + player.projected_points * 0.3 + player.form,
        Strategy::Aggressive => {
            player.projected_points * 0.7 + player.form * 3.0 + fixture_bonus(player.fixture)
        }
    }
}

/// Order the catalog by descending score.
///
/// The sort is stable, so equal scores keep catalog order.
pub fn rank(players: &[Player], strategy: Strategy) -> Vec<&Player> {
    let mut scored: Vec<(f64, &Player)> = players.iter().map(|p| (score(p, strategy), p)).collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.into_iter().map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::tests::player;
    use crate::player::Position;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn signals(ppm: f64, points: f64, form: f64, fixture: FixtureDifficulty) -> Player {
        let mut p = player(1, "ARS", Position::Midfielder, 8.0, points);
        p.ppm = ppm;
        p.form = form;
        p.fixture = fixture;
        p
    }

    #[test]
    fn balanced_formula() {
        let p = signals(20.0, 40.0, 5.0, FixtureDifficulty::Hard);
        // 6 + 20 + 10
        assert!(approx_eq(score(&p, Strategy::Balanced), 36.0));
    }

    #[test]
    fn value_formula() {
        let p = signals(20.0, 40.0, 5.0, FixtureDifficulty::Hard);
        // 12 + 12 + 5
        assert!(approx_eq(score(&p, Strategy::Value), 29.0));
    }

    #[test]
    fn aggressive_formula_uses_fixture_bonus() {
        let easy = signals(20.0, 40.0, 5.0, FixtureDifficulty::Easy);
        let medium = signals(20.0, 40.0, 5.0, FixtureDifficulty::Medium);
        let hard = signals(20.0, 40.0, 5.0, FixtureDifficulty::Hard);
        // 28 + 15 + bonus
        assert!(approx_eq(score(&easy, Strategy::Aggressive), 58.0));
        assert!(approx_eq(score(&medium, Strategy::Aggressive), 48.0));
        assert!(approx_eq(score(&hard, Strategy::Aggressive), 43.0));
    }

    #[test]
    fn fixture_does_not_affect_other_strategies() {
        let easy = signals(10.0, 30.0, 4.0, FixtureDifficulty::Easy);
        let hard = signals(10.0, 30.0, 4.0, FixtureDifficulty::Hard);
        assert!(approx_eq(score(&easy, Strategy::Balanced), score(&hard, Strategy::Balanced)));
        assert!(approx_eq(score(&easy, Strategy::Value), score(&hard, Strategy::Value)));
    }

    #[test]
    fn rank_is_descending_and_stable() {
        let players = vec![
            player(1, "ARS", Position::Defender, 4.0, 10.0),
            player(2, "CHE", Position::Defender, 4.0, 30.0),
            player(3, "LIV", Position::Defender, 4.0, 10.0),
            player(4, "MCI", Position::Defender, 4.0, 20.0),
        ];
        let ids: Vec<u32> = rank(&players, Strategy::Balanced).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn strategies_can_rank_differently() {
        let mut cheap = player(1, "ARS", Position::Midfielder, 4.5, 20.0);
        cheap.ppm = 40.0;
        let mut premium = player(2, "CHE", Position::Midfielder, 12.0, 40.0);
        premium.ppm = 5.0;
        premium.form = 4.0;
        let players = vec![cheap, premium];

        let value: Vec<u32> = rank(&players, Strategy::Value).iter().map(|p| p.id).collect();
        let aggressive: Vec<u32> = rank(&players, Strategy::Aggressive).iter().map(|p| p.id).collect();
        // value: 24+6 = 30 vs 3+12+4 = 19; aggressive: 14+5 = 19 vs 28+12+5 = 45
        assert_eq!(value, vec![1, 2]);
        assert_eq!(aggressive, vec![2, 1]);
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::from_name(strategy.name()), Some(strategy));
        }
        assert_eq!(Strategy::from_name("premium"), Some(Strategy::Balanced));
        assert_eq!(Strategy::from_name("chaos"), None);
    }
}
