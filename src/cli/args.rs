//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `obfuscate`: Replace class names and IDs with random tokens across the
//!   file set
//! - `init`: Initialize a shroud configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Obfuscate(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output (per-file trace and the replacement map)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ObfuscateCommand {
    /// Files to process, in order (overrides the config file list)
    pub files: Vec<PathBuf>,

    /// Length of generated replacement tokens (overrides config)
    #[arg(long)]
    pub token_length: Option<usize>,

    /// Scan and build the mapping without rewriting any file
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace class names and IDs with random tokens across HTML, JS, and CSS files
    Obfuscate(ObfuscateCommand),
    /// Initialize a new .shroudrc.json configuration file
    Init,
}
