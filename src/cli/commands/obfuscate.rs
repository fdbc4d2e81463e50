//! Obfuscate command - replace class names and IDs with random tokens.
//!
//! Drives the two-pass pipeline over the configured file list: scan every
//! file for identifiers, build one global replacement map, then rewrite
//! every file in place with it. Use `--dry-run` to build and inspect the
//! mapping without touching any file.

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::args::ObfuscateCommand;
use crate::cli::exit_status::ExitStatus;
use crate::config;
use crate::pipeline::{self, RunOptions};
use crate::report;

pub fn obfuscate(cmd: ObfuscateCommand, verbose: bool) -> Result<ExitStatus> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd)?;

    if verbose && loaded.from_file {
        eprintln!("Using configuration from {}", config::CONFIG_FILE_NAME);
    }

    let files: Vec<PathBuf> = if cmd.files.is_empty() {
        loaded.config.files.iter().map(PathBuf::from).collect()
    } else {
        cmd.files
    };

    let token_length = cmd.token_length.unwrap_or(loaded.config.token_length);
    if token_length == 0 {
        anyhow::bail!("--token-length must be at least 1");
    }

    let options = RunOptions {
        files,
        token_length,
        dry_run: cmd.dry_run,
        verbose,
    };

    let summary = pipeline::run(&options)?;

    if cmd.dry_run {
        report::print_dry_run(&summary);
    } else {
        report::print_summary(&summary);
    }

    Ok(ExitStatus::Success)
}
