// Input validation for a catalog snapshot and budget.
//
// The builder refuses to run on input that breaks the catalog contract rather
// than substituting defaults. Degraded-but-valid input (too few players, a
// tight budget) is not an error here; it produces a short squad downstream.

use std::collections::HashSet;

use crate::player::{Player, PlayerInvariant};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("player catalog is empty")]
    EmptyCatalog,

    #[error("budget must be finite and greater than 0, got {0}")]
    InvalidBudget(f64),

    #[error("player {id} ({name}) is invalid: {reason}")]
    InvalidPlayer {
        id: u32,
        name: String,
        reason: PlayerInvariant,
    },

    #[error("player id {0} appears more than once in the catalog")]
    DuplicateId(u32),

    #[error("player {id} ({name}) belongs to unknown club `{team}`")]
    UnknownClub { id: u32, name: String, team: String },
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a catalog and budget before any squad is built.
///
/// Fails on the first violation found, in catalog order.
pub fn validate(players: &[Player], budget: f64) -> Result<(), InputError> {
    if players.is_empty() {
        return Err(InputError::EmptyCatalog);
    }
    if !budget.is_finite() || budget <= 0.0 {
        return Err(InputError::InvalidBudget(budget));
    }

    let mut seen = HashSet::with_capacity(players.len());
    for player in players {
        player.check().map_err(|reason| InputError::InvalidPlayer {
            id: player.id,
            name: player.name.clone(),
            reason,
        })?;
        if !seen.insert(player.id) {
            return Err(InputError::DuplicateId(player.id));
        }
    }

    Ok(())
}

/// Check every player's team code against the league's known clubs.
///
/// An empty `clubs` list disables the check.
pub fn check_clubs(players: &[Player], clubs: &[String]) -> Result<(), InputError> {
    if clubs.is_empty() {
        return Ok(());
    }
    let known: HashSet<&str> = clubs.iter().map(String::as_str).collect();
    match players.iter().find(|p| !known.contains(p.team.as_str())) {
        Some(p) => Err(InputError::UnknownClub {
            id: p.id,
            name: p.name.clone(),
            team: p.team.clone(),
        }),
        None => Ok(()),
    }
}
