use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use binpack::entities::BPInstance;
use binpack::io::ext_repr::ExtBPInstance;
use log::{Level, LevelFilter, info};
use serde::Serialize;

use crate::EPOCH;

pub mod cli;
pub mod output;

/// Resolves `path` against `base_dir` if it is relative, absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, base_dir: Option<&Path>) -> PathBuf {
    match base_dir {
        Some(base_dir) if path.is_relative() => base_dir.join(path),
        _ => path.to_path_buf(),
    }
}

/// Reads an instance from disk.
/// Files with a `.json` extension are read as an [`ExtBPInstance`], all others as a text description.
pub fn read_instance(path: &Path) -> Result<BPInstance> {
    let instance = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {
            let ext_instance = read_json_instance(path)?;
            binpack::io::import::import(&ext_instance)
        }
        _ => {
            let description = fs::read_to_string(path)
                .with_context(|| format!("could not read instance file: {}", path.display()))?;
            binpack::io::parser::parse_instance(&description)
        }
    };
    instance.with_context(|| format!("could not load instance file: {}", path.display()))
}

pub fn read_json_instance(path: &Path) -> Result<ExtBPInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("not a valid instance file: {}", path.display()))
}

/// Reads a solution as raw JSON, its shape is checked during evaluation.
pub fn read_solution(path: &Path) -> Result<serde_json::Value> {
    let file = File::open(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("solution file is not valid JSON: {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write output file: {}", path.display()))?;

    info!(
        "output written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn print_json(json: &impl Serialize) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, json).context("could not write output")?;
    writeln!(stdout)?;
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{:<27}{message}", log_prefix(record.level())))
        })
        .level(level_filter)
        // logs go to stderr, stdout is reserved for the JSON output
        .chain(std::io::stderr())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}

/// `[LEVEL] [hh:mm:ss] <thread>`, with the time measured since [`EPOCH`].
fn log_prefix(level: Level) -> String {
    let secs = EPOCH.elapsed().as_secs();
    let thread = std::thread::current();
    format!(
        "[{level}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        thread.name().unwrap_or("-")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_prefix_layout() {
        let prefix = log_prefix(Level::Warn);
        assert!(prefix.starts_with("[WARN] ["));
        assert_eq!(prefix.matches(':').count(), 2);
        assert!(prefix.ends_with('>'));
    }

    #[test]
    fn resolves_relative_paths_only() {
        let base = Path::new("/data/instances");
        assert_eq!(
            resolve_path(Path::new("u20.txt"), Some(base)),
            PathBuf::from("/data/instances/u20.txt")
        );
        assert_eq!(
            resolve_path(Path::new("/tmp/u20.txt"), Some(base)),
            PathBuf::from("/tmp/u20.txt")
        );
        assert_eq!(
            resolve_path(Path::new("u20.txt"), None),
            PathBuf::from("u20.txt")
        );
    }
}
