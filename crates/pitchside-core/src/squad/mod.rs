// Squad construction: selection, formation, bench and captaincy.

pub mod bench;
pub mod formation;
pub mod rules;
pub mod selector;

use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::scoring::Strategy;
use formation::{FormationUsed, Lineup};
use rules::{price_tenths, SQUAD_SIZE, YELLOW_CARD_WARNING_THRESHOLD};

/// A recommended squad for one strategy. Never mutated after it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    pub strategy: Strategy,
    /// Players in admission order (descending strategy score).
    pub selected: Vec<Player>,
    pub lineup: Lineup,
    /// Non-starters in substitution priority.
    pub bench: Vec<Player>,
    pub captain: Option<Player>,
    pub vice_captain: Option<Player>,
}

impl Squad {
    /// Starting players: goalkeeper, defenders, midfielders, forwards.
    pub fn starting(&self) -> Vec<Player> {
        self.lineup.starting()
    }

    pub fn formation(&self) -> FormationUsed {
        self.lineup.formation
    }

    /// Fifteen players fielded in a legal formation.
    pub fn is_complete(&self) -> bool {
        self.selected.len() == SQUAD_SIZE && !self.lineup.formation.is_fallback()
    }

    pub fn summary(&self, budget: f64) -> SquadSummary {
        let cost_tenths: i64 = self.selected.iter().map(|p| price_tenths(p.price)).sum();
        let total_cost = cost_tenths as f64 / 10.0;
        SquadSummary {
            total_cost,
            budget_remaining: budget - total_cost,
            projected_points: self.selected.iter().map(|p| p.projected_points).sum(),
            disciplinary_risks: self
                .selected
                .iter()
                .filter(|p| p.yellow_cards >= YELLOW_CARD_WARNING_THRESHOLD)
                .count(),
            players_selected: self.selected.len(),
            is_complete: self.is_complete(),
        }
    }
}

/// Display and export figures derived from a squad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquadSummary {
    pub total_cost: f64,
    pub budget_remaining: f64,
    /// Sum over all selected players, bench included.
    pub projected_points: f64,
    /// Players at or above the yellow-card warning threshold.
    pub disciplinary_risks: usize,
    pub players_selected: usize,
    pub is_complete: bool,
}
