use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File '{}' not found.", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error reading file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error reading file '{}': bytes are not valid {encoding}", path.display())]
    Undecodable { path: PathBuf, encoding: String },

    #[error("Error writing to file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing to file '{}': text cannot be represented in {encoding}", path.display())]
    Unmappable { path: PathBuf, encoding: String },

    #[error("Unknown encoding: {label}")]
    UnknownEncoding { label: String },
}

pub type Result<T> = std::result::Result<T, HexentError>;
