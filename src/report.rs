//! Output formatting and printing utilities.
//!
//! Progress and error lines go to stderr; the final summary goes to stdout.

use std::io;
use std::path::Path;

use colored::Colorize;

use crate::pipeline::RunSummary;
use crate::rewriter::ReplacementMap;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a per-file read/write failure. The run continues past these.
pub fn print_file_error(path: &Path, err: &io::Error) {
    eprintln!("{} {}: {}", "error:".bold().red(), path.display(), err);
}

/// Dump the replacement map, sorted for readability (verbose mode only).
pub fn print_mapping(replacements: &ReplacementMap) {
    let mut entries: Vec<_> = replacements.iter().collect();
    entries.sort();

    eprintln!("Replacement map ({} identifiers):", entries.len());
    for (old, new) in entries {
        eprintln!("  {} -> {}", old, new);
    }
}

/// Print the completion summary for an applied run.
pub fn print_summary(summary: &RunSummary) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Replaced {} identifier{} across {} file{}",
            summary.replacements.len(),
            if summary.replacements.len() == 1 { "" } else { "s" },
            summary.files_rewritten,
            if summary.files_rewritten == 1 { "" } else { "s" }
        )
        .green()
    );
    print_skip_note(summary);
}

/// Print what an applied run would have done (dry-run mode).
pub fn print_dry_run(summary: &RunSummary) {
    println!(
        "{} {} identifier{} across {} file{}.",
        "Would replace".yellow().bold(),
        summary.replacements.len(),
        if summary.replacements.len() == 1 { "" } else { "s" },
        summary.files_scanned,
        if summary.files_scanned == 1 { "" } else { "s" }
    );
    println!(
        "Run without {} to rewrite the files in place.",
        "--dry-run".cyan()
    );
    print_skip_note(summary);
}

fn print_skip_note(summary: &RunSummary) {
    if !summary.skipped.is_empty() {
        eprintln!(
            "{} {} file operation(s) skipped (see errors above)",
            "warning:".bold().yellow(),
            summary.skipped.len()
        );
    }
}
