use crate::config::cli::Args;
use crate::error::{BadgeError, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

pub mod cli;

/// Folder scanned when no root is given, relative to the working directory.
pub const DEFAULT_ROOT_DIR: &str = "Logos";
/// Manifest location consumers of the badge list read from.
pub const DEFAULT_OUTPUT_FILE: &str = "Logos/badge-list.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub root_dir: PathBuf,
    pub output_file: PathBuf,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let log_level = Level::from_str(&args.log_level)
            .map_err(|_| BadgeError::Config(format!("invalid log level '{}'", args.log_level)))?;

        Ok(Self {
            root_dir: args.root_dir,
            output_file: args.output_file,
            log_level,
        })
    }
}
