// Configuration loading and parsing (pitchside.toml).

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Name of the config file inside `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "pitchside.toml";

/// Gameweeks in a season.
pub const MAX_GAMEWEEK: u32 = 38;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error(
        "no config in {}: neither config/{} nor defaults/{} exists",
        base.display(),
        CONFIG_FILE,
        CONFIG_FILE
    )]
    NoConfig { base: PathBuf },

    #[error("failed to seed config at {}: {source}", path.display())]
    Seed { path: PathBuf, source: io::Error },
}

// ---------------------------------------------------------------------------
// pitchside.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub squad: SquadSection,
    pub data: DataSection,
    #[serde(default)]
    pub export: ExportSection,
    #[serde(default)]
    pub league: LeagueSection,
}

/// User parameters for a build.
#[derive(Debug, Clone, Deserialize)]
pub struct SquadSection {
    /// Budget in millions.
    pub budget: f64,
    pub gameweek: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSection {
    /// Path to the player catalog CSV, relative to the base directory.
    pub catalog: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSection {
    /// Directory export files are written to.
    pub dir: String,
    #[serde(default)]
    pub format: ExportFormat,
}

impl Default for ExportSection {
    fn default() -> Self {
        ExportSection {
            dir: "exports".into(),
            format: ExportFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueSection {
    /// Known club codes. Empty disables the club check.
    #[serde(default)]
    pub clubs: Vec<String>,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/pitchside.toml` relative to `base_dir`.
///
/// Does not copy defaults; prefer `load_config()` which does.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Seed `config/pitchside.toml` from `defaults/` when it is missing.
///
/// Returns the seeded path, or `None` when a config was already in place.
/// An existing config is never overwritten.
pub fn seed_config(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() {
        return Ok(None);
    }
    let source = base_dir.join("defaults").join(CONFIG_FILE);
    if !source.is_file() {
        return Err(ConfigError::NoConfig {
            base: base_dir.to_path_buf(),
        });
    }

    let config_dir = base_dir.join("config");
    fs::create_dir_all(&config_dir).map_err(|e| seed_error(&config_dir, e))?;
    let mut from = fs::File::open(&source).map_err(|e| seed_error(&source, e))?;
    let mut to = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
        .map_err(|e| seed_error(&target, e))?;
    io::copy(&mut from, &mut to).map_err(|e| seed_error(&target, e))?;

    info!("Seeded {} from {}", target.display(), source.display());
    Ok(Some(target))
}

fn seed_error(path: &Path, source: io::Error) -> ConfigError {
    ConfigError::Seed {
        path: path.to_path_buf(),
        source,
    }
}

/// Load config relative to `base_dir`, seeding it from defaults first.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    seed_config(base_dir)?;
    load_config_from(base_dir)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Budget must be a positive, finite amount.
pub fn validate_budget(budget: f64) -> Result<(), ConfigError> {
    if !budget.is_finite() || budget <= 0.0 {
        return Err(ConfigError::ValidationError {
            field: "squad.budget".into(),
            message: format!("must be > 0, got {budget}"),
        });
    }
    Ok(())
}

/// Gameweek must fall within the season.
pub fn validate_gameweek(gameweek: u32) -> Result<(), ConfigError> {
    if !(1..=MAX_GAMEWEEK).contains(&gameweek) {
        return Err(ConfigError::ValidationError {
            field: "squad.gameweek".into(),
            message: format!("must be between 1 and {MAX_GAMEWEEK}, got {gameweek}"),
        });
    }
    Ok(())
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_budget(config.squad.budget)?;
    validate_gameweek(config.squad.gameweek)?;

    if config.data.catalog.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.catalog".into(),
            message: "must not be empty".into(),
        });
    }

    if config.export.dir.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "export.dir".into(),
            message: "must not be empty".into(),
        });
    }

    if let Some(blank) = config.league.clubs.iter().position(|c| c.trim().is_empty()) {
        return Err(ConfigError::ValidationError {
            field: format!("league.clubs[{blank}]"),
            message: "club code must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
