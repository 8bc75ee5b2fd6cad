// Squad set builder: runs the full pipeline once per strategy.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::{self, InputError};
use crate::player::Player;
use crate::scoring::{self, Strategy};
use crate::squad::{bench, formation, selector, Squad};

/// The three squads, one per strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadSet {
    pub balanced: Squad,
    pub value: Squad,
    pub aggressive: Squad,
}

impl SquadSet {
    pub fn get(&self, strategy: Strategy) -> &Squad {
        match strategy {
            Strategy::Balanced => &self.balanced,
            Strategy::Value => &self.value,
            Strategy::Aggressive => &self.aggressive,
        }
    }

    /// Squads in set order: balanced, value, aggressive.
    pub fn iter(&self) -> impl Iterator<Item = &Squad> {
        [&self.balanced, &self.value, &self.aggressive].into_iter()
    }
}

/// Score, select, arrange and captain one squad. Assumes validated input.
fn assemble(players: &[Player], budget: f64, strategy: Strategy) -> Squad {
    let ranked = scoring::rank(players, strategy);
    let selected = selector::select(&ranked, budget);
    let lineup = formation::optimize(&selected);
    let starting = lineup.starting();
    let substitutes = bench::order_bench(&selected, &starting);
    let (captain, vice_captain) = bench::pick_captains(&starting);

    let squad = Squad {
        strategy,
        selected,
        lineup,
        bench: substitutes,
        captain,
        vice_captain,
    };

    let summary = squad.summary(budget);
    info!(
        "{} squad: {} players, {} formation, cost {:.1}m of {:.1}m, {:.0} projected pts",
        strategy,
        summary.players_selected,
        squad.formation(),
        summary.total_cost,
        budget,
        summary.projected_points
    );
    if !summary.is_complete {
        warn!(
            "{} squad is incomplete: {} players selected, formation {}",
            strategy,
            summary.players_selected,
            squad.formation()
        );
    }

    squad
}

/// Build the squad for a single strategy.
///
/// Clubs are not checked here; see [`build_all_squads`].
pub fn build_squad(players: &[Player], budget: f64, strategy: Strategy) -> Result<Squad, InputError> {
    catalog::validate(players, budget)?;
    Ok(assemble(players, budget, strategy))
}

/// Build one squad per strategy from the same catalog snapshot and budget.
///
/// Each run starts from fresh accumulators; nothing carries over between
/// strategies or between calls.
///
/// The builder has no list of known clubs, so it cannot reject a player from
/// an unknown one. Callers holding a club list run
/// [`catalog::check_clubs`](crate::catalog::check_clubs) first.
pub fn build_all_squads(players: &[Player], budget: f64) -> Result<SquadSet, InputError> {
    catalog::validate(players, budget)?;
    Ok(SquadSet {
        balanced: assemble(players, budget, Strategy::Balanced),
        value: assemble(players, budget, Strategy::Value),
        aggressive: assemble(players, budget, Strategy::Aggressive),
    })
}
