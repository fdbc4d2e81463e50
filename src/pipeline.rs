//! Two-pass scan/rewrite orchestration.
//!
//! Pass 1 scans every file in the list and merges all identifiers into one
//! set; the mapping phase assigns each identifier a random token; pass 2
//! re-reads every file and rewrites it in place with the full map. Files
//! that are missing or unreadable are reported and skipped in both passes;
//! any other failure aborts the run. There is no transactional guarantee
//! across the file set: a run killed partway leaves some files rewritten
//! and others not.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::namegen;
use crate::report;
use crate::rewriter::{self, ReplacementMap};
use crate::scanner::{self, FileKind};

/// Inputs to a single obfuscation run.
#[derive(Debug)]
pub struct RunOptions {
    /// Ordered list of files to process.
    pub files: Vec<PathBuf>,
    /// Length of generated replacement tokens.
    pub token_length: usize,
    /// Build the mapping but do not write any file.
    pub dry_run: bool,
    /// Emit per-file trace lines and the mapping to stderr.
    pub verbose: bool,
}

/// Phase in which a file was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Scan,
    Rewrite,
}

/// A file that could not be read or written and was skipped.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub phase: Phase,
    pub reason: String,
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_rewritten: usize,
    pub replacements: ReplacementMap,
    pub skipped: Vec<SkippedFile>,
}

/// Run the full scan/map/rewrite pipeline over `options.files`.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut identifiers: HashSet<String> = HashSet::new();

    // Scan phase: merge class names and ids from every readable file into
    // one namespace.
    for path in &options.files {
        if options.verbose {
            eprintln!("Scanning file: {}", path.display());
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if is_skippable(&err) => {
                skip(&mut summary, path, Phase::Scan, &err);
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        let scanned = scanner::scan(&content, FileKind::of(path));
        identifiers.extend(scanned.classes);
        identifiers.extend(scanned.ids);
        summary.files_scanned += 1;
    }

    // Mapping phase: a fresh token for every identifier not already mapped.
    for identifier in identifiers {
        summary
            .replacements
            .entry(identifier)
            .or_insert_with(|| namegen::random_token(options.token_length));
    }

    if options.verbose {
        report::print_mapping(&summary.replacements);
    }

    if options.dry_run {
        return Ok(summary);
    }

    // Rewrite phase: re-read, substitute with the full map, overwrite in
    // place. No backup copies, no atomic rename.
    for path in &options.files {
        if options.verbose {
            eprintln!("Processing file: {}", path.display());
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if is_skippable(&err) => {
                skip(&mut summary, path, Phase::Rewrite, &err);
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        let rewritten = rewriter::rewrite(&content, FileKind::of(path), &summary.replacements)?;

        match fs::write(path, rewritten) {
            Ok(()) => summary.files_rewritten += 1,
            Err(err) if is_skippable(&err) => {
                skip(&mut summary, path, Phase::Rewrite, &err);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to write {}", path.display()));
            }
        }
    }

    Ok(summary)
}

/// Only missing files and permission failures are tolerated; everything
/// else (non-UTF-8 content, disk full, ...) propagates.
fn is_skippable(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
    )
}

fn skip(summary: &mut RunSummary, path: &Path, phase: Phase, err: &io::Error) {
    report::print_file_error(path, err);
    summary.skipped.push(SkippedFile {
        path: path.to_path_buf(),
        phase,
        reason: err.to_string(),
    });
}
