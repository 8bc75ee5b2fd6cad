// Squad export: the human-readable text block and a JSON document.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use pitchside_core::{Player, Position, Squad, SquadSet, SquadSummary, Strategy};
use serde::Serialize;
use tracing::info;

use crate::config::ExportFormat;

const RULE: &str = "------------------------";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to serialize squads: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

fn player_label(player: Option<&Player>) -> String {
    match player {
        Some(p) => format!("{} ({})", p.name, p.team),
        None => "-".into(),
    }
}

/// Render one squad as the plain-text block users copy or save.
pub fn render_text(squad: &Squad, budget: f64, gameweek: u32) -> String {
    let strategy = squad.strategy;
    let summary = squad.summary(budget);
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Pitchside - Set {}: {}", strategy.set_number(), strategy.name());
    let _ = writeln!(out, "{}", strategy.description());
    let _ = writeln!(out, "Gameweek: {gameweek}");
    let _ = writeln!(out, "Formation: {}", squad.formation());
    if !summary.is_complete {
        let _ = writeln!(
            out,
            "WARNING: incomplete squad ({} of 15 players selected)",
            summary.players_selected
        );
    }
    out.push('\n');

    let _ = writeln!(out, "CAPTAIN: {}", player_label(squad.captain.as_ref()));
    let _ = writeln!(out, "VICE: {}", player_label(squad.vice_captain.as_ref()));
    out.push('\n');

    let _ = writeln!(out, "{RULE}\nSTARTING XI:\n{RULE}\n");
    let starting = squad.starting();
    for pos in Position::ALL {
        let group: Vec<&Player> = starting.iter().filter(|p| p.position == pos).collect();
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{pos}:");
        for p in group {
            let _ = writeln!(
                out,
                "  - {} ({}) - £{:.1}M | Pred: {:.0}pts",
                p.name, p.team, p.price, p.projected_points
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{RULE}\nBENCH:\n{RULE}");
    for (i, p) in squad.bench.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({}) - {} - £{:.1}M",
            i + 1,
            p.name,
            p.team,
            p.position,
            p.price
        );
    }

    let _ = writeln!(out, "\n{RULE}\nSUMMARY:\n{RULE}");
    let _ = writeln!(out, "Total Cost: £{:.1}M", summary.total_cost);
    let _ = writeln!(out, "Budget Left: £{:.1}M", summary.budget_remaining);
    let _ = writeln!(out, "Expected Points: {:.0}pts", summary.projected_points);
    let _ = writeln!(
        out,
        "Starting XI Points: {:.0}pts",
        squad.lineup.projected_points()
    );
    let _ = writeln!(out, "Yellow Card Warnings: {}", summary.disciplinary_risks);

    out
}

/// File name for a squad's text export.
pub fn text_file_name(strategy: Strategy, gameweek: u32) -> String {
    format!("pitchside-set{}-gw{}.txt", strategy.set_number(), gameweek)
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ExportedSet<'a> {
    pub set: usize,
    pub strategy: Strategy,
    pub description: &'static str,
    pub summary: SquadSummary,
    pub squad: &'a Squad,
}

#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub generated_at: DateTime<Utc>,
    pub gameweek: u32,
    pub budget: f64,
    pub sets: Vec<ExportedSet<'a>>,
}

impl<'a> ExportDocument<'a> {
    pub fn new(set: &'a SquadSet, budget: f64, gameweek: u32, generated_at: DateTime<Utc>) -> Self {
        let sets = set
            .iter()
            .map(|squad| ExportedSet {
                set: squad.strategy.set_number(),
                strategy: squad.strategy,
                description: squad.strategy.description(),
                summary: squad.summary(budget),
                squad,
            })
            .collect();
        ExportDocument {
            generated_at,
            gameweek,
            budget,
            sets,
        }
    }
}

/// Render the squad set as pretty-printed JSON.
pub fn render_json(
    set: &SquadSet,
    budget: f64,
    gameweek: u32,
    generated_at: DateTime<Utc>,
) -> Result<String, ExportError> {
    let doc = ExportDocument::new(set, budget, gameweek, generated_at);
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// File name for the JSON export.
pub fn json_file_name(gameweek: u32) -> String {
    format!("pitchside-gw{gameweek}.json")
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    std::fs::write(path, contents).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write export files for the squad set into `dir`, creating it if needed.
///
/// Text exports produce one file per strategy; JSON produces a single file.
/// Returns the paths written.
pub fn write_exports(
    dir: &Path,
    set: &SquadSet,
    budget: f64,
    gameweek: u32,
    format: ExportFormat,
) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::Io {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut written = Vec::new();
    match format {
        ExportFormat::Text => {
            for squad in set.iter() {
                let path = dir.join(text_file_name(squad.strategy, gameweek));
                write_file(&path, &render_text(squad, budget, gameweek))?;
                written.push(path);
            }
        }
        ExportFormat::Json => {
            let path = dir.join(json_file_name(gameweek));
            write_file(&path, &render_json(set, budget, gameweek, Utc::now())?)?;
            written.push(path);
        }
    }

    for path in &written {
        info!("Wrote export {}", path.display());
    }
    Ok(written)
}
