//! tttgraph CLI - play and analyze generalized n-in-a-row games
//!
//! This CLI provides a unified interface for:
//! - Playing interactively against the minimax player
//! - Solving board definitions
//! - Inspecting winning lines
//! - Profiling the search on random boards

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tttgraph::cli::{commands, config::CommonConfig};

#[derive(Parser)]
#[command(name = "tttgraph")]
#[command(version, about = "Minimax player for generalized n-in-a-row games", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Hide progress spinners
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the automated player
    Play(commands::play::PlayArgs),

    /// Solve a board and report its value
    Solve(commands::solve::SolveArgs),

    /// Show box numbering and winning lines
    Lines(commands::lines::LinesArgs),

    /// Solve a random board and report timings
    Profile(commands::profile::ProfileArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let common = CommonConfig {
        progress: !cli.no_progress,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Play(args) => commands::play::execute(args, &common),
        Commands::Solve(args) => commands::solve::execute(args, &common),
        Commands::Lines(args) => commands::lines::execute(args),
        Commands::Profile(args) => commands::profile::execute(args, &common),
    }
}
