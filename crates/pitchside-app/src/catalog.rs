// Player catalog loading from CSV.
//
// One row per player. Rows that cannot be parsed, carry an unknown position
// or fixture label, or have a non-positive price are skipped with a warning;
// the core validates whatever survives.

use pitchside_core::{FixtureDifficulty, Player, Position};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::str::FromStr;
use std::path::Path;
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw CSV row (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawPlayerRow {
    id: u32,
    name: String,
    team: String,
    position: String,
    price: f64,
    #[serde(default, alias = "points_per_million", deserialize_with = "numeric_or_zero")]
    ppm: f64,
    #[serde(default, deserialize_with = "numeric_or_zero")]
    form: f64,
    #[serde(default)]
    fixture: Option<String>,
    #[serde(alias = "prediction")]
    projected_points: f64,
    #[serde(default, deserialize_with = "numeric_or_zero")]
    yellow_cards: u32,
    /// Absorb any extra columns.
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

/// Optional numeric cell: blank reads as zero, anything else must parse.
fn numeric_or_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(T::default()),
        Value::String(s) if s.trim().is_empty() => Ok(T::default()),
        Value::String(s) => s.trim().parse().map_err(de::Error::custom),
        Value::Number(n) => n.to_string().parse().map_err(de::Error::custom),
        other => Err(de::Error::custom(format!("expected a number, got {other}"))),
    }
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Normalize one raw row, or explain why it is skipped.
fn to_player(raw: RawPlayerRow) -> Result<Player, String> {
    let name = raw.name.trim().to_string();
    let Some(position) = Position::from_str_pos(&raw.position) else {
        return Err(format!("unknown position '{}'", raw.position.trim()));
    };
    let fixture = match raw.fixture.as_deref().map(str::trim) {
        None | Some("") => FixtureDifficulty::default(),
        Some(label) => FixtureDifficulty::from_label(label)
            .ok_or_else(|| format!("unknown fixture difficulty '{label}'"))?,
    };
    if !all_finite(&[raw.price, raw.ppm, raw.form, raw.projected_points]) {
        return Err("non-finite numeric value".into());
    }
    if raw.price <= 0.0 {
        return Err(format!("non-positive price {}", raw.price));
    }
    Ok(Player {
        id: raw.id,
        name,
        team: raw.team.trim().to_uppercase(),
        position,
        price: raw.price,
        ppm: raw.ppm,
        form: raw.form,
        fixture,
        projected_points: raw.projected_points,
        yellow_cards: raw.yellow_cards,
    })
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut players = Vec::new();
    for result in reader.deserialize::<RawPlayerRow>() {
        match result {
            Ok(raw) => {
                let label = raw.name.trim().to_string();
                match to_player(raw) {
                    Ok(player) => players.push(player),
                    Err(reason) => warn!("skipping player '{}': {}", label, reason),
                }
            }
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
            }
        }
    }
    Ok(players)
}

/// Load the player catalog from a CSV file.
///
/// Fails if the file cannot be read or yields no valid rows.
pub fn load_catalog(path: &Path) -> Result<Vec<Player>, CatalogError> {
    let file = std::fs::File::open(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let players = load_players_from_reader(file).map_err(|e| CatalogError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;

    if players.is_empty() {
        return Err(CatalogError::Validation(format!(
            "{} produced zero valid player rows",
            path.display()
        )));
    }

    info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
