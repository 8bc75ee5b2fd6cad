// Squad composition rules: position caps, club cap and the legal formations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::player::Position;

/// Number of players in a full squad.
pub const SQUAD_SIZE: usize = 15;

/// Number of players in a starting lineup.
pub const STARTING_SIZE: usize = 11;

/// Maximum players from any one club.
pub const MAX_PER_TEAM: usize = 3;

/// Yellow-card count at which a player is flagged as a disciplinary risk.
pub const YELLOW_CARD_WARNING_THRESHOLD: u32 = 4;

/// A price in whole tenths of a million, the unit prices are quoted in.
pub fn price_tenths(price: f64) -> i64 {
    (price * 10.0).round() as i64
}

/// The spendable part of a budget in whole tenths. A fractional tenth is not
/// spendable.
pub fn budget_tenths(budget: f64) -> i64 {
    (budget * 10.0 + 1e-6).floor() as i64
}

/// Per-position squad caps, indexed in `Position::ALL` order. Sums to `SQUAD_SIZE`.
pub const POSITION_CAPS: [(Position, usize); 4] = [
    (Position::Goalkeeper, 2),
    (Position::Defender, 5),
    (Position::Midfielder, 5),
    (Position::Forward, 3),
];

/// Squad cap for a single position.
pub fn position_cap(position: Position) -> usize {
    POSITION_CAPS[position.index()].1
}

/// Outfield shape of a starting lineup. Always fielded with one goalkeeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Formation {
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
}

impl Formation {
    pub const fn new(defenders: usize, midfielders: usize, forwards: usize) -> Self {
        Formation {
            defenders,
            midfielders,
            forwards,
        }
    }

    pub fn outfield(&self) -> usize {
        self.defenders + self.midfielders + self.forwards
    }

    /// Whether this shape is one of the legal formations.
    pub fn is_legal(&self) -> bool {
        FORMATIONS.contains(self)
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.defenders, self.midfielders, self.forwards)
    }
}

/// Legal formations, in the order the optimizer tries them. Earlier entries
/// win ties on projected points.
pub const FORMATIONS: [Formation; 7] = [
    Formation::new(3, 5, 2),
    Formation::new(3, 4, 3),
    Formation::new(4, 5, 1),
    Formation::new(4, 4, 2),
    Formation::new(4, 3, 3),
    Formation::new(5, 4, 1),
    Formation::new(5, 3, 2),
];

/// Composition fielded when no legal formation fits the selected players.
/// Each count is an upper bound.
pub const FALLBACK_FORMATION: Formation = Formation::new(4, 4, 1);
