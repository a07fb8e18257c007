use thiserror::Error;

use super::{CommandError, ParseError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Command(#[from] CommandError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a valid data file: {source}")]
    Corrupted {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("serde_json serialize student book: {0}")]
    Serialize(#[source] serde_json::Error),
}
