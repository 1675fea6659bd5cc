use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_history::api::state::AppState;
use league_history::calculate::{
    aggregate_head_to_head, all_power_rankings, back_to_back_champions, championship_leaderboard,
    championships_by_year, rank_labels,
};
use league_history::config::AppConfig;
use league_history::models::Outcome;
use league_history::storage::{LeagueDataset, StorageConfig};

#[derive(Parser)]
#[command(name = "league-history")]
#[command(about = "Fantasy football league history and power rankings")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
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
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,

        /// Directory of front-end assets
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Print a league report to stdout
    Report {
        #[arg(value_enum)]
        view: ReportView,
    },

    /// Check the dataset for duplicate years and malformed matchups
    Validate,

    /// Write the built-in datasets as JSONL into the data directory,
    /// keeping existing matchup and game files
    ExportData,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportView {
    Championships,
    HeadToHead,
    PowerRankings,
    Records,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting league-history v{}", env!("CARGO_PKG_VERSION"));

    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Serve {
            host,
            port,
            static_dir,
        } => {
            let server = config.server.clone();
            let host = host.unwrap_or(server.host);
            let port = port.unwrap_or(server.port);
            let static_dir = static_dir.or(server.static_dir);

            let dataset = LeagueDataset::load(&storage)?;
            for err in dataset.validate() {
                tracing::warn!("Dataset problem: {}", err);
            }

            let state = AppState {
                dataset: Arc::new(dataset),
                league: Arc::new(config.league.clone()),
            };
            let app = league_history::api::build_router_with_static(
                state,
                static_dir,
                &server.cors_origin,
            );
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Report { view } => {
            let dataset = LeagueDataset::load(&storage)?;
            match view {
                ReportView::Championships => print_championships(&dataset),
                ReportView::HeadToHead => print_head_to_head(&dataset),
                ReportView::PowerRankings => print_power_rankings(&dataset),
                ReportView::Records => print_records(&dataset),
            }
        }
        Commands::Validate => {
            let dataset = LeagueDataset::load(&storage)?;
            let errors = dataset.validate();
            if !errors.is_empty() {
                for err in &errors {
                    println!("  - {}", err);
                }
                bail!("Dataset has {} problem(s)", errors.len());
            }
            println!(
                "Dataset OK: {} seasons, {} matchups, {} games",
                dataset.championships.len(),
                dataset.matchups.len(),
                dataset.games.len()
            );
        }
        Commands::ExportData => {
            // Matchups and games have no built-in copy; keep whatever is on disk.
            let existing = LeagueDataset::load(&storage)?;
            let dataset = LeagueDataset {
                matchups: existing.matchups,
                games: existing.games,
                ..LeagueDataset::builtin()
            };
            let written = dataset.export(&storage)?;
            println!("Wrote {} records to {:?}", written, storage.data_dir);
        }
    }

    Ok(())
}

fn print_championships(dataset: &LeagueDataset) {
    println!("\n=== Championships ===");
    for record in championships_by_year(&dataset.championships, true) {
        println!(
            "{}  {}",
            record.year,
            record.champion.as_deref().unwrap_or("-")
        );
    }

    println!("\n=== Leaderboard ===");
    let board = championship_leaderboard(&dataset.championships);
    for (entry, rank) in board.iter().zip(rank_labels(&board)) {
        let rank = rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string());
        println!("{:>3}  {:<12} {}", rank, entry.name, entry.count);
    }

    let streaks = back_to_back_champions(&dataset.championships);
    if !streaks.is_empty() {
        println!("\n=== Streaks ===");
        for s in streaks {
            let badge = if s.is_three_peat_or_better() { "  *" } else { "" };
            println!(
                "{:<12} {}-{} ({} in a row){}",
                s.manager, s.start_year, s.end_year, s.count, badge
            );
        }
    }
}

fn print_head_to_head(dataset: &LeagueDataset) {
    let summaries = aggregate_head_to_head(&dataset.matchups);
    if summaries.is_empty() {
        println!("No head-to-head data in the data directory");
        return;
    }

    for summary in summaries {
        println!(
            "\n=== {} ({}, {:.1}%) ===",
            summary.manager,
            summary.record(),
            summary.win_percentage
        );
        for opp in &summary.opponent_records {
            let marker = match opp.outcome {
                Outcome::Winning => "+",
                Outcome::Losing => "-",
                Outcome::Even => "=",
            };
            println!("  {} vs {:<12} {}", marker, opp.opponent, opp.record);
        }
    }
}

fn print_power_rankings(dataset: &LeagueDataset) {
    let seasons = all_power_rankings(&dataset.games);
    if seasons.is_empty() {
        println!("No game data in the data directory");
        return;
    }

    for season in seasons {
        println!("\n=== {} (through week {}) ===", season.season, season.final_week);
        for m in &season.final_rankings {
            println!(
                "{:<12} {:>5.1}  {}-{}-{}  {:.2} pts",
                m.manager, m.total_rank, m.wins, m.losses, m.ties, m.total_points
            );
        }
    }
}

fn print_records(dataset: &LeagueDataset) {
    for board in &dataset.all_time_records {
        println!("\n=== {} ===", board.category);
        for holder in &board.top5 {
            println!(
                "{}. {:<12} {:<16} {}",
                holder.rank, holder.holder, holder.record, holder.details
            );
        }
    }
}
