//! Init command - write a default `.shroudrc.json` in the current directory.

use std::fs;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::exit_status::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use crate::report::SUCCESS_MARK;

pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    println!("{} Created {}", SUCCESS_MARK.green(), CONFIG_FILE_NAME);

    Ok(ExitStatus::Success)
}
