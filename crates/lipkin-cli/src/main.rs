//! Lipkin Command-Line Interface
//!
//! Runs LMG energy estimations against the statevector oracle, sweeps
//! random parameter sets, and replays recorded bitstring corpora.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lipkin_hal::CorpusFormat;
use lipkin_runner::LipkinConfig;

mod commands;

use commands::common::Couplings;
use commands::{replay, run, sweep, version};

/// Lipkin - LMG Hamiltonian energy estimation from sampled bitstrings
#[derive(Parser)]
#[command(name = "lipkin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate one energy level on the statevector simulator
    Run {
        /// Model size; the register has M qubits
        #[arg(long)]
        m: u32,

        /// Pair interaction strength
        #[arg(long, allow_negative_numbers = true)]
        v: f64,

        /// Pair exchange strength
        #[arg(long, allow_negative_numbers = true)]
        w: f64,

        /// Extra occupation of the lower shell (0 or 1)
        #[arg(long, default_value = "0")]
        nua: u8,

        /// Extra occupation of the upper shell (0 or 1)
        #[arg(long, default_value = "0")]
        nub: u8,

        /// Energy level, 0 being the ground state
        #[arg(short, long, default_value = "0")]
        level: usize,

        /// Shots per clique
        #[arg(short, long, default_value = "10000")]
        shots: u32,

        /// Sampling seed (overrides the config)
        #[arg(long)]
        seed: Option<u64>,

        /// Write the JSON report here
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Write the sampled bitstrings here, one clique per line
        #[arg(long)]
        save_bitstrings: Option<PathBuf>,
    },

    /// Run random parameter sets and summarise the pass rate
    Sweep {
        /// Number of trials
        #[arg(short, long)]
        trials: Option<usize>,

        /// Shots per clique and trial
        #[arg(short, long)]
        shots: Option<u32>,

        /// Largest model size drawn
        #[arg(long)]
        max_m: Option<u32>,

        /// Seed for the parameter draws and the sampler
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Re-estimate a recorded bitstring corpus
    Replay {
        /// Corpus file
        #[arg(long)]
        corpus: PathBuf,

        /// Corpus layout (lines, flat)
        #[arg(short, long, default_value = "lines")]
        format: CorpusFormat,

        /// Pair interaction strength
        #[arg(long, allow_negative_numbers = true)]
        v: f64,

        /// Pair exchange strength
        #[arg(long, allow_negative_numbers = true)]
        w: f64,

        /// Extra occupation of the lower shell (0 or 1)
        #[arg(long, default_value = "0")]
        nua: u8,

        /// Extra occupation of the upper shell (0 or 1)
        #[arg(long, default_value = "0")]
        nub: u8,

        /// Energy level the corpus was prepared for
        #[arg(short, long, default_value = "0")]
        level: usize,
    },

    /// Show version information
    Version,
}

fn init_logging(verbose: u8, configured: &str) {
    let filter = match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = LipkinConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(cli.verbose, &config.logging.level);
    debug!(file = ?cli.config, ?config, "configuration loaded");

    match cli.command {
        Commands::Run {
            m,
            v,
            w,
            nua,
            nub,
            level,
            shots,
            seed,
            export,
            save_bitstrings,
        } => run::execute(
            &config,
            run::RunArgs {
                m,
                couplings: Couplings { v, w, nua, nub },
                level,
                shots,
                seed,
            },
            export.as_deref(),
            save_bitstrings.as_deref(),
        ),

        Commands::Sweep {
            trials,
            shots,
            max_m,
            seed,
        } => sweep::execute(config, trials, shots, max_m, seed),

        Commands::Replay {
            corpus,
            format,
            v,
            w,
            nua,
            nub,
            level,
        } => replay::execute(&config, &corpus, format, Couplings { v, w, nua, nub }, level),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
