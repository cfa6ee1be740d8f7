use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pickleball_league::api::{build_router, state::AppState};
use pickleball_league::config::AppConfig;
use pickleball_league::export::build_export;
use pickleball_league::ingest::{ingest_roster, RosterReport};
use pickleball_league::models::{PoolId, ResultSubmission};
use pickleball_league::storage::{
    append_result, read_results, read_roster, write_export, StorageConfig,
};
use pickleball_league::{parse_lineup, League};

#[derive(Parser)]
#[command(name = "pickleball-league")]
#[command(about = "Round-robin pickleball league: fixtures, results, standings")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Roster file (JSONL, one team per line)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Results log (JSONL, one submission per line)
    #[arg(long)]
    results: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the roster and list rejected rows
    Validate,

    /// List fixtures
    Fixtures {
        /// Only show this pool
        #[arg(long)]
        pool: Option<String>,
    },

    /// Show a pool's standings
    Standings {
        #[arg(long)]
        pool: String,
    },

    /// Show a pool's player rotation tracker
    Players {
        #[arg(long)]
        pool: String,
    },

    /// Record a fixture result and append it to the results log
    Record {
        /// Fixture index as listed by `fixtures`
        #[arg(long)]
        fixture: usize,

        #[arg(long)]
        home_score: u32,

        #[arg(long)]
        away_score: u32,

        /// Comma-separated home players (e.g. "Ann,Bo")
        #[arg(long)]
        home_lineup: String,

        /// Comma-separated away players
        #[arg(long)]
        away_lineup: String,
    },

    /// Write every sheet (Teams, Matches, Standings_*, Players_*) as JSONL
    Export {
        /// Output directory (default: <data-dir>/export)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },
}

/// Rebuild the session: ingest the roster, then replay the results log.
///
/// Rejected roster rows are logged by the ingester and left out.
fn load_league(config: &AppConfig, roster: &Path, results: &Path) -> Result<League> {
    let rows = read_roster(roster).with_context(|| format!("reading roster {:?}", roster))?;
    let mut league = ingest_roster(&rows, &config.league)
        .into_league(config.league.clone())
        .context("building league")?;

    let submissions =
        read_results(results).with_context(|| format!("reading results {:?}", results))?;
    let applied = league
        .replay(&submissions)
        .context("replaying results log")?;
    tracing::info!("Session loaded: {} results replayed", applied);

    Ok(league)
}

fn print_report(report: &RosterReport) {
    println!("Accepted teams: {}", report.accepted.len());
    for team in &report.accepted {
        println!(
            "  #{:<4} {:<24} pool {:<4} rating {:.2}",
            team.id(),
            team.name(),
            team.pool(),
            team.total_rating()
        );
    }
    if !report.rejected.is_empty() {
        println!("Rejected rows: {}", report.rejected.len());
        for rejected in &report.rejected {
            println!(
                "  row {:<4} {:<24} {}",
                rejected.row, rejected.team, rejected.reason
            );
        }
    }
}

fn print_fixtures(league: &League, pool: Option<&PoolId>) -> Result<()> {
    println!(
        "{:>4}  {:<5} {:>5}  {:<20} {:<20} {}",
        "#", "Pool", "Round", "Home", "Away", "Result"
    );
    for row in league.fixture_rows(pool)? {
        let result = match (row.score_home, row.score_away) {
            (Some(h), Some(a)) => format!(
                "{}-{}  [{}] v [{}]",
                h,
                a,
                row.lineup_home.join(", "),
                row.lineup_away.join(", ")
            ),
            _ => "-".to_string(),
        };
        println!(
            "{:>4}  {:<5} {:>5}  {:<20} {:<20} {}",
            row.index, row.pool, row.round, row.home_team, row.away_team, result
        );
    }
    Ok(())
}

fn print_standings(league: &League, pool: &PoolId) -> Result<()> {
    println!("Pool {}", pool);
    println!(
        "{:>4}  {:<20} {:>3} {:>3} {:>3} {:>4} {:>5}",
        "Rank", "Team", "P", "W", "L", "Pts", "Diff"
    );
    for row in league.standings(pool)? {
        println!(
            "{:>4}  {:<20} {:>3} {:>3} {:>3} {:>4} {:>+5}",
            row.rank, row.team, row.played, row.wins, row.losses, row.points, row.score_differential
        );
    }
    Ok(())
}

fn print_players(league: &League, pool: &PoolId) -> Result<()> {
    let config = league.config();
    println!("Pool {}", pool);
    println!(
        "{:<20} {:<20} {:>6} {:>8} {:>8}",
        "Team",
        "Player",
        "Played",
        format!("ToMin{}", config.rotation_min),
        format!("ToMax{}", config.rotation_max)
    );
    for row in league.player_tracker(pool)? {
        println!(
            "{:<20} {:<20} {:>6} {:>8} {:>8}",
            row.team, row.player, row.played, row.remaining_min, row.remaining_max
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config {:?}", cli.config))?;
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }

    // Initialize tracing
    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!("Starting pickleball-league v{}", env!("CARGO_PKG_VERSION"));

    let storage = StorageConfig::new(config.data_dir.clone());
    let roster = cli.roster.clone().unwrap_or_else(|| storage.roster_path());
    let results = cli.results.clone().unwrap_or_else(|| storage.results_path());

    match cli.command {
        Commands::Validate => {
            let rows = read_roster(&roster)?;
            let report = ingest_roster(&rows, &config.league);
            print_report(&report);
            if !report.is_clean() {
                bail!("{} roster rows rejected", report.rejected.len());
            }
        }
        Commands::Fixtures { pool } => {
            let league = load_league(&config, &roster, &results)?;
            let pool = pool.map(PoolId::from);
            print_fixtures(&league, pool.as_ref())?;
        }
        Commands::Standings { pool } => {
            let league = load_league(&config, &roster, &results)?;
            print_standings(&league, &PoolId::from(pool))?;
        }
        Commands::Players { pool } => {
            let league = load_league(&config, &roster, &results)?;
            print_players(&league, &PoolId::from(pool))?;
        }
        Commands::Record {
            fixture,
            home_score,
            away_score,
            home_lineup,
            away_lineup,
        } => {
            let mut league = load_league(&config, &roster, &results)?;
            let submission = ResultSubmission {
                fixture_index: fixture,
                home_team_id: None,
                away_team_id: None,
                score_home: home_score,
                score_away: away_score,
                lineup_home: parse_lineup(&home_lineup),
                lineup_away: parse_lineup(&away_lineup),
            };

            // Only accepted results reach the log, and the log is written
            // before the result is applied.
            let submission = league.pin_result(submission)?;
            append_result(&results, &submission)?;
            league.submit(&submission)?;

            let pool = league
                .fixture(fixture)
                .map(|f| f.pool.clone())
                .context("fixture disappeared after recording")?;
            print_standings(&league, &pool)?;
        }
        Commands::Export { out } => {
            let league = load_league(&config, &roster, &results)?;
            let out = out.unwrap_or_else(|| storage.export_dir());
            let export = build_export(&league)?;
            for path in write_export(&out, &export)? {
                println!("{}", path.display());
            }
        }
        Commands::Serve { host, port } => {
            let league = load_league(&config, &roster, &results)?;
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(league).with_results_log(results.clone());
            let app = build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("League API: http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
