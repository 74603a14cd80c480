mod arena_config;
mod match_runner;
mod report;

use std::path::PathBuf;

use arena_config::ArenaConfig;
use clap::Parser;
use match_runner::run_matchup;
use report::{ArenaReport, write_report};
use tictactoe_engine::config::{ConfigError, ConfigManager, Validate};
use tictactoe_engine::logger::{self, LogLevel};
use tictactoe_engine::{SessionRng, log, log_warn};

#[derive(Parser)]
#[command(name = "tictactoe_arena", about = "Pits tic-tac-toe AI difficulties against each other")]
struct Args {
    /// YAML config; defaults are used when the file does not exist
    #[arg(long, default_value = "arena.yaml")]
    config: PathBuf,

    #[arg(long)]
    games: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    /// Write the final tallies as YAML
    #[arg(long)]
    report: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager: ConfigManager<_, ArenaConfig> = ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(games) = args.games {
        config.games_per_matchup = games;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().map_err(ConfigError::Validation)?;

    let prefix = if args.use_log_prefix {
        Some("Arena".to_string())
    } else {
        None
    };
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    logger::init_logger(prefix, level);

    let mut base_rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Arena starting: {} matchups, {} games each, seed {}",
        config.matchups.len(),
        config.games_per_matchup,
        base_rng.seed()
    );

    let mut handles = Vec::with_capacity(config.matchups.len());
    for matchup in config.matchups.iter().copied() {
        let mut rng = base_rng.fork();
        let games = config.games_per_matchup;
        handles.push(tokio::task::spawn_blocking(move || {
            run_matchup(matchup, games, &mut rng)
        }));
    }

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        let report = handle.await??;
        log!("{}", report.summary());
        if report.hard_losses() > 0 {
            log_warn!(
                "Hard side lost {} games in {} (seed {})",
                report.hard_losses(),
                report.matchup,
                report.seed
            );
        }
        reports.push(report);
    }

    if let Some(path) = args.report {
        let arena_report = ArenaReport {
            seed: base_rng.seed(),
            games_per_matchup: config.games_per_matchup,
            matchups: reports,
        };
        write_report(&path, &arena_report)?;
        log!("Report written to {}", path.display());
    }

    log!("Arena finished");
    Ok(())
}
