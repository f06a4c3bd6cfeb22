//! CLI entry point for the ordena import organizer
//!
//! Check mode (the default) reports files whose imports are out of order
//! and exits nonzero; `--write` rewrites them in place.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, warn};
use walkdir::WalkDir;

use ordena::config::{self, Config};
use ordena::orchestrator;

#[derive(Debug, Parser)]
#[command(
    name = "ordena",
    version,
    about = "Deterministic import reordering for JavaScript and TypeScript sources"
)]
struct Cli {
    /// Files or directories to process
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Rewrite files in place instead of only reporting
    #[arg(long)]
    write: bool,

    /// Explicit configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(dirty) if cli.write || dirty == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Process every selected file; returns how many needed reordering
fn run(cli: &Cli) -> Result<usize> {
    let config = config::load(cli.config.as_deref())?;
    let files = collect_files(&cli.paths, &config);

    let mut dirty = 0usize;
    let mut failures = 0usize;
    for file in &files {
        let result = if cli.write {
            orchestrator::fix_file(file)
        } else {
            orchestrator::check_file(file)
        };
        match result {
            Ok(true) => {
                dirty += 1;
                if !cli.write {
                    println!("{}: imports are not in canonical order", file.display());
                }
            }
            Ok(false) => {}
            Err(err) => {
                warn!("skipping {}: {err:#}", file.display());
                failures += 1;
            }
        }
    }

    if cli.write && dirty > 0 {
        println!("reordered imports in {dirty} file(s)");
    }
    anyhow::ensure!(failures == 0, "{failures} file(s) could not be processed");
    Ok(dirty)
}

/// Expand the argument list: directories are walked recursively and
/// filtered by configuration, explicit files are taken as given
fn collect_files(paths: &[PathBuf], config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let walker = WalkDir::new(path).into_iter().filter_entry(|entry| {
                !(entry.file_type().is_dir()
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| config.skips_directory(name)))
            });
            for entry in walker.flatten() {
                if entry.file_type().is_file() && config.matches_extension(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    files
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
