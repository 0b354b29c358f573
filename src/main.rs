//! Board-Odds: estimate the most visited squares of a simplified Monopoly board.
//!
//! ## Usage
//!
//! - `board-odds` - Print the square ranking
//! - `board-odds rank --seed 42 --modal` - Reproducible ranking plus modal string
//! - `board-odds matrix` - Print the normalized transition matrix

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use board_odds::board::square_name;
use board_odds::config::SimConfig;
use board_odds::constants::{DAMPING, N_ITERATIONS, N_SAMPLES, REPORT_TOP};
use board_odds::estimate::{estimate, transition_matrix};
use board_odds::report::{modal_string, render};

/// Board-Odds: Monte Carlo square visitation with PageRank refinement
#[derive(Parser)]
#[command(name = "board-odds")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank squares from most to least visited
    Rank {
        #[command(flatten)]
        run: RunArgs,
        /// Also print the modal string of the leading squares
        #[arg(long)]
        modal: bool,
        /// Number of squares in the modal string
        #[arg(long, default_value_t = REPORT_TOP)]
        top: usize,
    },
    /// Print the normalized transition matrix, one row per start square
    Matrix {
        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Turns sampled from each starting square
    #[arg(long, default_value_t = N_SAMPLES)]
    samples: usize,
    /// Power-iteration steps
    #[arg(long, default_value_t = N_ITERATIONS)]
    iterations: usize,
    /// Damping factor in [0, 1]
    #[arg(long, default_value_t = DAMPING)]
    damping: f64,
    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

impl RunArgs {
    fn config(&self) -> SimConfig {
        SimConfig {
            samples: self.samples,
            iterations: self.iterations,
            damping: self.damping,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Rank { run, modal, top }) => run_rank(&run.config(), modal.then_some(top)),
        Some(Commands::Matrix { run }) => run_matrix(&run.config()),
        None => run_rank(&SimConfig::default(), None),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_rank(cfg: &SimConfig, top: Option<usize>) -> Result<()> {
    cfg.validate()?;
    let seed = cfg.resolve_seed();
    info!(seed, "starting estimation");

    let est = estimate(cfg, &mut fastrand::Rng::with_seed(seed));
    print!("{}", render(&est.entries));

    if let Some(top) = top {
        println!("Modal string (top {top}): {}", modal_string(&est.entries, top));
    }
    Ok(())
}

fn run_matrix(cfg: &SimConfig) -> Result<()> {
    cfg.validate()?;
    let seed = cfg.resolve_seed();
    info!(seed, "starting estimation");

    let (_, matrix) = transition_matrix(cfg, &mut fastrand::Rng::with_seed(seed));
    for (i, line) in matrix.to_string().lines().enumerate() {
        println!("{:>4} {line}", square_name(i).to_string());
    }
    Ok(())
}
