use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::namegen::DEFAULT_TOKEN_LENGTH;

pub const CONFIG_FILE_NAME: &str = ".shroudrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Ordered list of files to process.
    #[serde(default = "default_files")]
    pub files: Vec<String>,
    /// Length of generated replacement tokens.
    #[serde(default = "default_token_length")]
    pub token_length: usize,
}

fn default_files() -> Vec<String> {
    ["index.html", "script.js", "style.css"]
        .map(String::from)
        .to_vec()
}

fn default_token_length() -> usize {
    DEFAULT_TOKEN_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: default_files(),
            token_length: default_token_length(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            anyhow::bail!("'files' must list at least one file");
        }
        if self.token_length == 0 {
            anyhow::bail!("'tokenLength' must be at least 1");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
