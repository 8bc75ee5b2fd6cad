// Formation search: pick the legal formation that fields the most projected
// points from the selected squad, and build the starting lineup from it.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::rules::{Formation, FALLBACK_FORMATION, FORMATIONS};
use crate::player::{Player, Position};

/// The shape a lineup was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormationUsed {
    /// One of the legal formations.
    Legal(Formation),
    /// No legal formation fit the squad. Holds the counts actually fielded,
    /// which may be short of the fallback shape.
    Fallback(Formation),
}

impl FormationUsed {
    pub fn formation(&self) -> Formation {
        match self {
            FormationUsed::Legal(f) | FormationUsed::Fallback(f) => *f,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FormationUsed::Fallback(_))
    }
}

impl fmt::Display for FormationUsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormationUsed::Legal(formation) => write!(f, "{formation}"),
            FormationUsed::Fallback(formation) => write!(f, "{formation} (fallback)"),
        }
    }
}

/// A starting lineup, grouped by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub goalkeeper: Option<Player>,
    pub defenders: Vec<Player>,
    pub midfielders: Vec<Player>,
    pub forwards: Vec<Player>,
    pub formation: FormationUsed,
}

impl Lineup {
    /// Starting players in display order: goalkeeper, defenders, midfielders, forwards.
    pub fn starting(&self) -> Vec<Player> {
        self.goalkeeper
            .iter()
            .chain(&self.defenders)
            .chain(&self.midfielders)
            .chain(&self.forwards)
            .cloned()
            .collect()
    }

    pub fn projected_points(&self) -> f64 {
        self.starting().iter().map(|p| p.projected_points).sum()
    }
}

/// Selected players of one position, best projected points first.
fn bucket(selected: &[Player], position: Position) -> Vec<&Player> {
    let mut players: Vec<&Player> = selected.iter().filter(|p| p.position == position).collect();
    players.sort_by(|a, b| {
        b.projected_points
            .partial_cmp(&a.projected_points)
            .unwrap_or(Ordering::Equal)
    });
    players
}

fn top_points(bucket: &[&Player], n: usize) -> f64 {
    bucket.iter().take(n).map(|p| p.projected_points).sum()
}

fn top(bucket: &[&Player], n: usize) -> Vec<Player> {
    bucket.iter().take(n).map(|&p| p.clone()).collect()
}

/// Build the starting lineup for a selected squad.
///
/// The goalkeeper is the first goalkeeper in `selected` order. Every legal
/// formation the buckets can fill is scored by the projected points of its
/// top-N players per position; the highest total wins, ties going to the
/// earlier entry in `FORMATIONS`. When none fits, up to 4 defenders,
/// 4 midfielders and 1 forward are fielded instead.
pub fn optimize(selected: &[Player]) -> Lineup {
    let goalkeeper = selected.iter().find(|p| p.position.is_goalkeeper()).cloned();
    let defenders = bucket(selected, Position::Defender);
    let midfielders = bucket(selected, Position::Midfielder);
    let forwards = bucket(selected, Position::Forward);

    let mut best: Option<(Formation, f64)> = None;
    for formation in FORMATIONS {
        if defenders.len() < formation.defenders
            || midfielders.len() < formation.midfielders
            || forwards.len() < formation.forwards
        {
            continue;
        }
        let total = top_points(&defenders, formation.defenders)
            + top_points(&midfielders, formation.midfielders)
            + top_points(&forwards, formation.forwards);
        match best {
            Some((_, best_total)) if total <= best_total => {}
            _ => best = Some((formation, total)),
        }
    }

    let formation = match best {
        Some((formation, _)) => FormationUsed::Legal(formation),
        None => FormationUsed::Fallback(Formation::new(
            defenders.len().min(FALLBACK_FORMATION.defenders),
            midfielders.len().min(FALLBACK_FORMATION.midfielders),
            forwards.len().min(FALLBACK_FORMATION.forwards),
        )),
    };
    let shape = formation.formation();

    Lineup {
        goalkeeper,
        defenders: top(&defenders, shape.defenders),
        midfielders: top(&midfielders, shape.midfielders),
        forwards: top(&forwards, shape.forwards),
        formation,
    }
}
