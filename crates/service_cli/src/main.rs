//! lootconv - Loot-table convergence from the command line
//!
//! Draws from a weighted loot table using one of four [0, 1) sequences and
//! measures how quickly the observed drop frequencies approach the table.
//!
//! # Commands
//!
//! - `lootconv modes` - List the sequence modes
//! - `lootconv table [--regenerate]` - Print the normalised loot table
//! - `lootconv drop --mode <m> --count <n>` - Draw n items and print the histogram
//! - `lootconv converge --mode <m>` - Draw until the error meets the tolerance
//! - `lootconv compare` - Converge every mode side by side
//!
//! # Configuration
//!
//! Settings are read from `lootconv.toml` (see [`config::CliConfig`]) with
//! `LOOTCONV_*` environment overrides. `RUST_LOG` takes precedence over the
//! configured `log_level`; `--verbose` forces debug logging. Logs go to
//! stderr so JSON output on stdout stays machine-readable.

use std::path::Path;

use clap::{Parser, Subcommand};
use sequence_core::SequenceMode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::OutputFormat;
use config::CliConfig;
pub use error::{CliError, Result};

/// Loot-table convergence CLI
#[derive(Parser)]
#[command(name = "lootconv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "lootconv.toml")]
    config: String,

    /// Seed for randomised sequences and table generation
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available sequence modes
    Modes,

    /// Print the normalised loot table
    Table {
        /// Generate a random table from the configured ranges
        #[arg(short, long)]
        regenerate: bool,
    },

    /// Draw a fixed number of items and print the histogram
    Drop {
        /// Sequence mode (white, blue, golden, sobol)
        #[arg(short, long)]
        mode: SequenceMode,

        /// Number of draws
        #[arg(short = 'n', long, default_value = "100")]
        count: u64,
    },

    /// Draw until the L1 error meets the tolerance
    Converge {
        /// Sequence mode (white, blue, golden, sobol)
        #[arg(short, long)]
        mode: SequenceMode,

        /// Target L1 error (defaults to the configured tolerance)
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Draw cap (defaults to the configured max_converge_draws)
        #[arg(long)]
        max_draws: Option<u64>,
    },

    /// Converge every mode in parallel and compare draw counts
    Compare {
        /// Target L1 error (defaults to the configured tolerance)
        #[arg(short, long)]
        tolerance: Option<f64>,
    },
}

fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load_or_default(Path::new(&cli.config))?;
    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }

    // Initialise tracing
    init_tracing(cli.verbose, &config.log_level);
    debug!(config = %cli.config, "configuration loaded");

    match cli.command {
        Commands::Modes => commands::modes::run(cli.format),
        Commands::Table { regenerate } => commands::table::run(&config, regenerate, cli.format),
        Commands::Drop { mode, count } => commands::drop::run(&config, mode, count, cli.format),
        Commands::Converge {
            mode,
            tolerance,
            max_draws,
        } => commands::converge::run(&config, mode, tolerance, max_draws, cli.format),
        Commands::Compare { tolerance } => commands::compare::run(&config, tolerance, cli.format),
    }
}
