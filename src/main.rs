//! Campaign Graphs CLI
//!
//! Computes dashboard graphs of a fuzzing campaign from a campaign dump.
//! Charts are written as JSON documents for the charting frontend.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use campaign_graphs::commands::{
    display_properties, display_version, execute_graph, validate_args, validate_dataset_file,
    GraphArgs, GraphKind,
};
use campaign_graphs::model::{CrashFilter, DedupKey};
use campaign_graphs::utils::config::DATA_ENV_VAR;

/// Campaign Graphs - time-aligned fuzzing campaign series
#[derive(Parser, Debug)]
#[command(name = "campaign-graphs")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options shared by every graph
#[derive(clap::Args, Debug)]
struct GraphOpts {
    /// Campaign dump (JSON)
    #[arg(short, long, env = DATA_ENV_VAR)]
    data: PathBuf,

    /// Campaign id
    #[arg(short, long)]
    campaign: u64,

    /// Output path for the chart JSON (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write compact JSON
    #[arg(long)]
    compact: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Distinct crash addresses and backtraces over time
    Aggregated {
        #[command(flatten)]
        opts: GraphOpts,
    },

    /// One snapshot property over time, one series per fuzzer
    Property {
        #[command(flatten)]
        opts: GraphOpts,

        /// Snapshot property name (see `properties`)
        #[arg(short, long)]
        name: String,
    },

    /// Distinct crashes by a single key
    Distinct {
        #[command(flatten)]
        opts: GraphOpts,

        /// Dedup key: address or backtrace
        #[arg(short, long, default_value = "address")]
        key: DedupKey,

        /// Count crashes not reproduced in the debugger too
        #[arg(long)]
        all_crashes: bool,

        /// Only crashes from this fuzzer run
        #[arg(long)]
        run: Option<u64>,

        /// Only crashes raised by this signal
        #[arg(long)]
        signal: Option<i32>,
    },

    /// Validate a campaign dump file
    Validate {
        /// Path to campaign dump
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List graphable snapshot properties
    Properties,

    /// Display version information
    Version,
}

fn graph_args(opts: GraphOpts, kind: GraphKind) -> GraphArgs {
    GraphArgs {
        data: opts.data,
        campaign_id: opts.campaign,
        kind,
        output: opts.output,
        compact: opts.compact,
    }
}

fn run_graph(args: GraphArgs) -> Result<()> {
    validate_args(&args)?;
    execute_graph(args)
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Aggregated { opts } => {
            run_graph(graph_args(opts, GraphKind::Aggregated))?;
        }

        Commands::Property { opts, name } => {
            run_graph(graph_args(opts, GraphKind::Property(name)))?;
        }

        Commands::Distinct {
            opts,
            key,
            all_crashes,
            run,
            signal,
        } => {
            let mut filter = CrashFilter::new();
            if all_crashes {
                filter = filter.all_crashes();
            }
            if let Some(run) = run {
                filter = filter.with_run(run);
            }
            if let Some(signal) = signal {
                filter = filter.with_signal(signal);
            }

            run_graph(graph_args(opts, GraphKind::Distinct { key, filter }))?;
        }

        Commands::Validate { file } => {
            validate_dataset_file(file)?;
        }

        Commands::Properties => {
            display_properties();
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
