//! Command-line options and the optional TOML config file
//!
//! Precedence for every setting: command-line flag, then config file, then
//! the built-in default.

use crate::algorithms::Algorithm;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default delay between auto-play steps
pub const DEFAULT_PLAY_INTERVAL_MS: u64 = 1000;

/// Default log file name, created in the system temp directory
pub const DEFAULT_LOG_FILE_NAME: &str = "algostep.log";

/// Step through linear search, binary search and bubble sort in the terminal
#[derive(Debug, Clone, Parser)]
#[command(name = "algostep", version, about)]
pub struct Cli {
    /// Algorithm to open directly instead of the algorithm list
    #[arg(short, long, value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Comma separated input array, e.g. "5, 1, 4, 2, 8"
    #[arg(long, allow_hyphen_values = true)]
    pub array: Option<String>,

    /// Number to search for (searches only)
    #[arg(short, long, allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Delay between steps in auto-play mode
    #[arg(long, value_name = "MS")]
    pub play_interval_ms: Option<u64>,

    /// Path to a TOML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where to write logs
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the step sequence as JSON and exit instead of starting the TUI
    #[arg(long, requires = "array")]
    pub dump: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings as written in the config file; everything is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub play_interval_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub default_algorithm: Option<Algorithm>,
}

impl FileConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub play_interval: Duration,
    pub log_file: PathBuf,
    /// Algorithm to preselect (or open, together with an array)
    pub algorithm: Option<Algorithm>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            play_interval: Duration::from_millis(DEFAULT_PLAY_INTERVAL_MS),
            log_file: std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME),
            algorithm: None,
        }
    }
}

impl Config {
    /// Resolve the configuration for `cli`, reading its config file if given
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    /// Layer `cli` over `file` over the defaults
    pub fn merge(cli: &Cli, file: FileConfig) -> Self {
        let defaults = Config::default();
        Config {
            play_interval: cli
                .play_interval_ms
                .or(file.play_interval_ms)
                .map(Duration::from_millis)
                .unwrap_or(defaults.play_interval),
            log_file: cli
                .log_file
                .clone()
                .or(file.log_file)
                .unwrap_or(defaults.log_file),
            algorithm: cli.algorithm.or(file.default_algorithm),
        }
    }
}
