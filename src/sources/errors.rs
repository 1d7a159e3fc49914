use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unable to read [{path}]: {source}")]
    Io {
        path: PathBuf,
        source: io::Error
    },
    #[error("Malformed JSON in [{path}]: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error
    },
    #[error("Invalid {column} [{value}] in record [{id}]")]
    InvalidCell {
        id: String,
        column: &'static str,
        value: String
    },
    #[error("Record store request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Record source task did not complete: {0}")]
    Task(#[from] JoinError)
}
