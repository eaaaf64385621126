use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use binpack::entities::BPInstance;
use binpack::io::export::{export_bounds, export_instance, export_solution};
use binpack::io::json_solution::{assignment_from_json, evaluate_json};
use bpe::config::BPEConfig;
use bpe::io;
use bpe::io::cli::{Cli, Command};
use bpe::io::output::{EvaluateOutput, InspectOutput, SampleOutput};
use bpe::sample::sample_solutions;
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use serde::Serialize;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BPEConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed BPEConfig: {config:?}");

    let instance_dir = config.instance_dir.as_deref();

    match args.command {
        Command::Inspect { input_file } => {
            let instance = load_instance(&input_file, instance_dir)?;
            let output = InspectOutput {
                instance: export_instance(&instance),
                bounds: export_bounds(&instance),
            };
            emit(&output, args.output_file.as_deref())
        }
        Command::Evaluate {
            input_file,
            solution_file,
        } => {
            let instance = load_instance(&input_file, instance_dir)?;
            let solution_path = io::resolve_path(&solution_file, instance_dir);
            let value = io::read_solution(&solution_path)?;

            let score = evaluate_json(&instance, &value);
            let solution = assignment_from_json(&value).map(|a| export_solution(&instance, &a));
            match &solution {
                Some(s) if s.feasible => info!("[MAIN] feasible solution using {score} bins"),
                Some(s) => warn!(
                    "[MAIN] infeasible solution: {}",
                    s.violation.as_deref().unwrap_or("-")
                ),
                None => warn!("[MAIN] solution is not a list of bin indices"),
            }

            let output = EvaluateOutput {
                bounds: export_bounds(&instance),
                score,
                solution,
            };
            emit(&output, args.output_file.as_deref())
        }
        Command::Sample {
            input_file,
            n_samples,
        } => {
            let instance = load_instance(&input_file, instance_dir)?;
            let n_samples = n_samples.unwrap_or(config.n_samples);
            ensure!(n_samples > 0, "at least one sample is required");

            let mut rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            let summary = sample_solutions(&instance, n_samples, &mut rng);

            let output = SampleOutput {
                bounds: export_bounds(&instance),
                n_samples: summary.n_samples,
                n_feasible: summary.n_feasible,
                best_score: summary.best_score,
                best: summary.best.map(|a| export_solution(&instance, &a)),
                config,
            };
            emit(&output, args.output_file.as_deref())
        }
    }
}

fn load_instance(input_file: &Path, instance_dir: Option<&Path>) -> Result<BPInstance> {
    let path = io::resolve_path(input_file, instance_dir);
    let instance = io::read_instance(&path)?;
    info!(
        "[MAIN] loaded {}: {} items, capacity {}, bins in [{}, {}]",
        path.display(),
        instance.item_count(),
        instance.bin_capacity(),
        instance.min_bins(),
        instance.max_bins()
    );
    Ok(instance)
}

fn emit(output: &impl Serialize, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => io::write_json(output, path),
        None => io::print_json(output),
    }
}
