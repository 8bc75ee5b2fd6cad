// Constrained greedy selection of the 15-man squad.
//
// Single pass over the ranked catalog. A player skipped for breaking a cap or
// the budget is never reconsidered, and no swap step is attempted, so the
// result is a greedy approximation rather than an optimum.

use std::collections::HashMap;

use tracing::debug;

use super::rules::{budget_tenths, position_cap, price_tenths, MAX_PER_TEAM, SQUAD_SIZE};
use crate::player::Player;

/// Why a candidate was passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    PositionFull,
    TeamFull,
    OverBudget,
}

/// Running totals for one selection pass. Cost is kept in tenths of a million
/// so exact decimal totals compare exactly.
#[derive(Debug, Clone, Default)]
pub struct SquadTally {
    cost_tenths: i64,
    position_counts: [usize; 4],
    team_counts: HashMap<String, usize>,
    admitted: usize,
}

impl SquadTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_cost(&self) -> f64 {
        self.cost_tenths as f64 / 10.0
    }

    pub fn admitted(&self) -> usize {
        self.admitted
    }

    pub fn is_full(&self) -> bool {
        self.admitted >= SQUAD_SIZE
    }

    /// Check a candidate against the position cap, the club cap and the budget,
    /// in that order.
    pub fn check(&self, player: &Player, budget: f64) -> Result<(), Rejection> {
        if self.position_counts[player.position.index()] >= position_cap(player.position) {
            return Err(Rejection::PositionFull);
        }
        if self.team_counts.get(&player.team).copied().unwrap_or(0) >= MAX_PER_TEAM {
            return Err(Rejection::TeamFull);
        }
        if self.cost_tenths + price_tenths(player.price) > budget_tenths(budget) {
            return Err(Rejection::OverBudget);
        }
        Ok(())
    }

    /// Record an admitted player.
    pub fn admit(&mut self, player: &Player) {
        self.cost_tenths += price_tenths(player.price);
        self.position_counts[player.position.index()] += 1;
        *self.team_counts.entry(player.team.clone()).or_insert(0) += 1;
        self.admitted += 1;
    }
}

/// Walk `ranked` once and admit every player that fits.
///
/// Stops as soon as the squad is full. Returns fewer than 15 players when the
/// pool or the budget cannot supply more.
pub fn select(ranked: &[&Player], budget: f64) -> Vec<Player> {
    let mut tally = SquadTally::new();
    let mut selected = Vec::with_capacity(SQUAD_SIZE);

    for &player in ranked {
        match tally.check(player, budget) {
            Ok(()) => {
                tally.admit(player);
                selected.push(player.clone());
                debug!(
                    "admitted {} ({} {}, {:.1}m), running cost {:.1}m",
                    player.name, player.team, player.position, player.price, tally.total_cost()
                );
                if tally.is_full() {
                    break;
                }
            }
            Err(reason) => {
                debug!("skipped {} ({}): {:?}", player.name, player.team, reason);
            }
        }
    }

    selected
}
