// Pitchside entry point.
//
// Startup sequence:
// 1. Initialize tracing (log file under the config dir, stdout stays for squads)
// 2. Load config, apply command-line overrides
// 3. Load the player catalog and check clubs
// 4. Build the three squads
// 5. Print the requested squads and write exports

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use pitchside_app::catalog;
use pitchside_app::config::{self, ExportFormat};
use pitchside_app::export;
use pitchside_core::{build_all_squads, Strategy};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "pitchside",
    about = "Fantasy football squad recommender: three strategies, one budget"
)]
struct Cli {
    /// Base directory holding config/ and defaults/.
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    /// Player catalog CSV. Overrides data.catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Budget in millions. Overrides squad.budget.
    #[arg(long)]
    budget: Option<f64>,

    /// Gameweek, 1 to 38. Overrides squad.gameweek.
    #[arg(long)]
    gameweek: Option<u32>,

    /// Print only this strategy: balanced, value or aggressive.
    #[arg(long, value_parser = parse_strategy)]
    strategy: Option<Strategy>,

    /// Export format: text or json. Overrides export.format.
    #[arg(long, value_parser = parse_format)]
    format: Option<ExportFormat>,

    /// Export directory. Overrides export.dir.
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Log directory. Defaults to logs/ under the config directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log every admission decision, not just per-squad results.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    Strategy::from_name(s).ok_or_else(|| format!("unknown strategy '{s}'"))
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    match s.trim().to_lowercase().as_str() {
        "text" => Ok(ExportFormat::Text),
        "json" => Ok(ExportFormat::Json),
        _ => Err(format!("unknown export format '{s}'")),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize tracing
    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| cli.config_dir.join("logs"));
    let log_path = init_tracing(&log_dir, cli.verbose)?;
    info!("Pitchside starting up, logging to {}", log_path.display());

    // 2. Load config and apply overrides
    let config = config::load_config(&cli.config_dir).context("failed to load configuration")?;
    let budget = cli.budget.unwrap_or(config.squad.budget);
    let gameweek = cli.gameweek.unwrap_or(config.squad.gameweek);
    config::validate_budget(budget).context("invalid --budget")?;
    config::validate_gameweek(gameweek).context("invalid --gameweek")?;
    let format = cli.format.unwrap_or(config.export.format);
    let export_dir = cli
        .export_dir
        .unwrap_or_else(|| cli.config_dir.join(&config.export.dir));
    info!("Config loaded: budget {:.1}m, gameweek {}", budget, gameweek);

    // 3. Load catalog
    let catalog_path = cli
        .catalog
        .unwrap_or_else(|| cli.config_dir.join(&config.data.catalog));
    let players = catalog::load_catalog(&catalog_path).context("failed to load player catalog")?;
    pitchside_core::catalog::check_clubs(&players, &config.league.clubs)
        .context("player catalog does not match the configured clubs")?;

    // 4. Build squads
    let set = build_all_squads(&players, budget).context("failed to build squads")?;

    // 5. Print and export
    let requested: Vec<Strategy> = match cli.strategy {
        Some(strategy) => vec![strategy],
        None => Strategy::ALL.to_vec(),
    };
    for strategy in requested {
        let squad = set.get(strategy);
        if !squad.is_complete() {
            let summary = squad.summary(budget);
            eprintln!(
                "warning: {} squad is incomplete ({} of 15 players, formation {})",
                strategy,
                summary.players_selected,
                squad.formation()
            );
            warn!("{} squad incomplete", strategy);
        }
        println!("{}", export::render_text(squad, budget, gameweek));
    }

    let written = export::write_exports(&export_dir, &set, budget, gameweek, format)
        .context("failed to write exports")?;
    for path in &written {
        println!("Saved {}", path.display());
    }

    info!("Pitchside finished");
    Ok(())
}

/// Filter used when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "pitchside_app=debug,pitchside_core=debug,warn"
    } else {
        "pitchside_app=info,pitchside_core=info,warn"
    }
}

/// Send logs to `<log_dir>/pitchside.log` so stdout carries only squads.
/// Returns the log file path.
fn init_tracing(log_dir: &Path, verbose: bool) -> anyhow::Result<PathBuf> {
    use tracing_subscriber::EnvFilter;

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let log_path = log_dir.join("pitchside.log");
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("failed to create {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;
    Ok(log_path)
}
