mod generate;
mod stats;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "distinct-gen")]
#[command(version)]
#[command(
    about = "Generate reproducible random integer streams for distinct-count estimation",
    long_about = None
)]
pub struct Cli {
    /// Defaults to `generate` with built-in settings
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write random integers to a file, one per line, and report distinct count
    Generate {
        /// Random seed for reproducibility (default: 31415)
        #[arg(long)]
        seed: Option<u64>,

        /// Output file, created or truncated (default: data.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of values to write (default: 100000)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Exclusive upper bound on values (default: 16777216)
        #[arg(long)]
        upper_bound: Option<u64>,

        /// YAML config file (flags override its settings)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show progress during generation
        #[arg(short, long)]
        progress: bool,

        /// Output results as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },

    /// Read a data file back: count lines, distinct values and estimate cardinality
    Stats {
        /// Data file to scan
        #[arg(default_value = "data.txt")]
        file: PathBuf,

        /// Values at or above this are reported as out of range
        #[arg(long, default_value = "16777216")]
        upper_bound: u64,

        /// Buffer size for the CVM estimator
        #[arg(long, default_value = "128")]
        buffer_size: usize,

        /// Seed for the estimator
        #[arg(long, default_value = "31415")]
        seed: u64,

        /// Show progress while scanning
        #[arg(short, long)]
        progress: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None => generate::run(None, None, None, None, None, false, false),
        Some(Commands::Generate {
            seed,
            output,
            count,
            upper_bound,
            config,
            progress,
            json,
        }) => generate::run(seed, output, count, upper_bound, config, progress, json),
        Some(Commands::Stats {
            file,
            upper_bound,
            buffer_size,
            seed,
            progress,
            json,
        }) => stats::run(file, upper_bound, buffer_size, seed, progress, json),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "distinct-gen", &mut io::stdout());
            Ok(())
        }
    }
}
