use super::{DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_FILE, DEFAULT_ROOT_DIR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Folder holding one subdirectory of badge images per league
    #[arg(long, default_value = DEFAULT_ROOT_DIR)]
    pub root_dir: PathBuf,

    /// Where the generated badge database is written
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}
