// Player catalog entries: identity, position, price and projection signals.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Playing position. Every player has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// All positions in lineup display order.
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Parse a position string into a Position.
    ///
    /// Accepts the short codes used by the game ("GKP", "DEF", "MID", "FWD"),
    /// the common "GK" / "FW" variants, and the full names, case-insensitively.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "GKP" | "GK" | "G" | "GOALKEEPER" => Some(Position::Goalkeeper),
            "DEF" | "D" | "DEFENDER" => Some(Position::Defender),
            "MID" | "M" | "MIDFIELDER" => Some(Position::Midfielder),
            "FWD" | "FW" | "F" | "FORWARD" => Some(Position::Forward),
            _ => None,
        }
    }

    /// Short display code.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GKP",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::Goalkeeper)
    }

    /// Index into per-position tables.
    pub(crate) fn index(&self) -> usize {
        match self {
            Position::Goalkeeper => 0,
            Position::Defender => 1,
            Position::Midfielder => 2,
            Position::Forward => 3,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}

// ---------------------------------------------------------------------------
// Fixture difficulty
// ---------------------------------------------------------------------------

/// Coarse difficulty label for a player's upcoming fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FixtureDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl FixtureDifficulty {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "EASY" | "E" => Some(FixtureDifficulty::Easy),
            "MEDIUM" | "M" => Some(FixtureDifficulty::Medium),
            "HARD" | "H" => Some(FixtureDifficulty::Hard),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FixtureDifficulty::Easy => "Easy",
            FixtureDifficulty::Medium => "Medium",
            FixtureDifficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for FixtureDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A candidate player from the catalog.
///
/// Immutable for the duration of one build; squads hold their own clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    /// Club short name, e.g. "ARS".
    pub team: String,
    pub position: Position,
    /// Price in millions.
    pub price: f64,
    /// Points per million.
    pub ppm: f64,
    pub form: f64,
    pub fixture: FixtureDifficulty,
    /// Projected points over the planning horizon.
    pub projected_points: f64,
    pub yellow_cards: u32,
}

/// Why a single player fails the catalog invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlayerInvariant {
    #[error("price must be finite and greater than 0, got {0}")]
    NonPositivePrice(f64),

    #[error("team code must not be empty")]
    EmptyTeam,

    #[error("signal `{field}` must be finite, got {value}")]
    NonFiniteSignal { field: &'static str, value: f64 },
}

impl Player {
    /// Check the per-player invariants.
    pub fn check(&self) -> Result<(), PlayerInvariant> {
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(PlayerInvariant::NonPositivePrice(self.price));
        }
        if self.team.trim().is_empty() {
            return Err(PlayerInvariant::EmptyTeam);
        }
        let signals: [(&'static str, f64); 3] = [
            ("ppm", self.ppm),
            ("form", self.form),
            ("projected_points", self.projected_points),
        ];
        for (field, value) in signals {
            if !value.is_finite() {
                return Err(PlayerInvariant::NonFiniteSignal { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a player with neutral signals. Used across the crate's unit tests.
    pub(crate) fn player(id: u32, team: &str, position: Position, price: f64, points: f64) -> Player {
        Player {
            id,
            name: format!("Player {id}"),
            team: team.into(),
            position,
            price,
            ppm: 0.0,
            form: 0.0,
            fixture: FixtureDifficulty::Medium,
            projected_points: points,
            yellow_cards: 0,
        }
    }

    #[test]
    fn parses_position_codes() {
        assert_eq!(Position::from_str_pos("GKP"), Some(Position::Goalkeeper));
        assert_eq!(Position::from_str_pos("gk"), Some(Position::Goalkeeper));
        assert_eq!(Position::from_str_pos(" def "), Some(Position::Defender));
        assert_eq!(Position::from_str_pos("Midfielder"), Some(Position::Midfielder));
        assert_eq!(Position::from_str_pos("FWD"), Some(Position::Forward));
        assert_eq!(Position::from_str_pos("ST"), None);
    }

    #[test]
    fn parses_fixture_labels() {
        assert_eq!(FixtureDifficulty::from_label("Easy"), Some(FixtureDifficulty::Easy));
        assert_eq!(FixtureDifficulty::from_label("medium"), Some(FixtureDifficulty::Medium));
        assert_eq!(FixtureDifficulty::from_label("HARD"), Some(FixtureDifficulty::Hard));
        assert_eq!(FixtureDifficulty::from_label("brutal"), None);
        assert_eq!(FixtureDifficulty::default(), FixtureDifficulty::Medium);
    }

    #[test]
    fn valid_player_passes_check() {
        assert!(player(1, "ARS", Position::Defender, 4.5, 30.0).check().is_ok());
    }

    #[test]
    fn zero_price_rejected() {
        let p = player(1, "ARS", Position::Defender, 0.0, 30.0);
        assert_eq!(p.check(), Err(PlayerInvariant::NonPositivePrice(0.0)));
    }

    #[test]
    fn blank_team_rejected() {
        let p = player(1, "  ", Position::Defender, 4.5, 30.0);
        assert_eq!(p.check(), Err(PlayerInvariant::EmptyTeam));
    }

    #[test]
    fn nan_form_rejected() {
        let mut p = player(1, "ARS", Position::Defender, 4.5, 30.0);
        p.form = f64::NAN;
        match p.check() {
            Err(PlayerInvariant::NonFiniteSignal { field, .. }) => assert_eq!(field, "form"),
            other => panic!("expected NonFiniteSignal, got {other:?}"),
        }
    }
}
