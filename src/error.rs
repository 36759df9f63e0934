use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("Logos folder not found at {}", .0.display())]
    MissingInput(PathBuf),
    #[error("No badges found under {}", .0.display())]
    EmptyResult(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BadgeError>;
