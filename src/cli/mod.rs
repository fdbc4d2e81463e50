use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Obfuscate(cmd)) => commands::obfuscate::obfuscate(cmd, verbose),
        Some(Command::Init) => commands::init::init(),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
