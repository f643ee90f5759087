use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use mancala_sim::ai::agent_for;
use mancala_sim::config::AppConfig;
use mancala_sim::game::{PlayerKind, Side};
use mancala_sim::sim::{play_game, report_file_name, run_batch, write_report};

/// Simulate Mancala games under Kalah or Wari rules.
#[derive(Parser)]
#[command(name = "mancala-sim", about = "Mancala (Kalah/Wari) game simulator")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a single game with the board printed after every move
    Play {
        /// Who controls player 1: human, random, or search
        #[arg(long)]
        p1: Option<String>,

        /// Who controls player 2: human, random, or search
        #[arg(long)]
        p2: Option<String>,
    },
    /// Run a batch of games and write the summary report
    Simulate {
        /// Override number of games
        #[arg(long)]
        games: Option<usize>,

        /// Override search depth for both players
        #[arg(long)]
        depth: Option<u32>,

        /// Base seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Record each game's pit sequence in the report
        #[arg(long)]
        history: bool,

        /// Record per-game score rows in the report
        #[arg(long)]
        stats: bool,

        /// Report file path (defaults to a name derived from the matchup)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn parse_kind(value: &str) -> Result<PlayerKind> {
    match value {
        "human" => Ok(PlayerKind::Human),
        "random" => Ok(PlayerKind::Random),
        "search" => Ok(PlayerKind::Search),
        other => bail!("unknown player kind '{}' (expected 'human', 'random', or 'search')", other),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    match cli.command {
        Command::Play { p1, p2 } => {
            if let Some(kind) = p1.as_deref() {
                config.game.player1 = parse_kind(kind)?;
            }
            if let Some(kind) = p2.as_deref() {
                config.game.player2 = parse_kind(kind)?;
            }
            config.validate()?;
            run_play(&config)
        }
        Command::Simulate {
            games,
            depth,
            seed,
            history,
            stats,
            out,
        } => {
            if let Some(games) = games {
                config.sim.games = games;
            }
            if let Some(depth) = depth {
                config.search.depth_player1 = depth;
                config.search.depth_player2 = depth;
            }
            if let Some(seed) = seed {
                config.sim.seed = Some(seed);
            }
            config.sim.record_moves |= history;
            config.sim.record_stats |= stats;
            config.validate()?;
            run_simulate(&config, out)
        }
    }
}

fn run_play(config: &AppConfig) -> Result<()> {
    let mut p1 = agent_for(
        config.game.player1,
        config.search.depth_player1,
        config.sim.seed,
    );
    let mut p2 = agent_for(
        config.game.player2,
        config.search.depth_player2,
        config.sim.seed.map(|s| s.wrapping_add(1)),
    );

    let record = play_game(
        config.game.rules(),
        p1.as_mut(),
        p2.as_mut(),
        config.sim.stalemate_threshold,
        true,
    );

    println!(
        "\n{} ({}) vs {} ({}): {} - {} in {} moves{}",
        Side::One.name(),
        p1.name(),
        Side::Two.name(),
        p2.name(),
        record.p1_score,
        record.p2_score,
        record.move_count,
        if record.loop_flag { " (loop)" } else { "" }
    );
    Ok(())
}

fn run_simulate(config: &AppConfig, out: Option<PathBuf>) -> Result<()> {
    let path = out.unwrap_or_else(|| {
        PathBuf::from(report_file_name(
            &config.game,
            &config.search,
            &config.sim,
        ))
    });

    print!(
        "{}: 0% ",
        path.file_stem().unwrap_or_default().to_string_lossy()
    );

    let outcome = run_batch(&config.game, &config.search, &config.sim);

    let mut file = File::create(&path)
        .with_context(|| format!("creating report file {}", path.display()))?;
    write_report(&mut file, &config.game, &config.search, &config.sim, &outcome)
        .with_context(|| format!("writing report to {}", path.display()))?;

    println!(" - Finished. Check {} for results.", path.display());
    Ok(())
}
