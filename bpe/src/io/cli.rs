use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,
    /// Where to write the JSON output, stdout if omitted
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info",
        global = true
    )]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print an instance together with its derived bin bounds
    Inspect {
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,
    },
    /// Score a solution (a JSON array of bin indices) against an instance
    Evaluate {
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        solution_file: PathBuf,
    },
    /// Draw random solutions and report how many of them are feasible
    Sample {
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,
        /// Overrides `n_samples` from the config
        #[arg(short, long)]
        n_samples: Option<usize>,
    },
}
