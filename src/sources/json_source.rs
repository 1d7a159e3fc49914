use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tokio::task::spawn_blocking;

use crate::models::Transaction;
use crate::sources::{RecordSource, SourceError};

/// Reads a JSON array of transactions, the shape the record store API hands out.
pub struct JsonSource {
    path: PathBuf
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonSource {
    fn key(&self) -> String {
        format!("json:{}", self.path.display())
    }

    async fn fetch(&self) -> Result<Vec<Transaction>, SourceError> {
        let path = self.path.clone();
        spawn_blocking(move || read_json(&path)).await?
    }
}

fn read_json(path: &Path) -> Result<Vec<Transaction>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Io { path: path.to_path_buf(), source })?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| SourceError::Json { path: path.to_path_buf(), source })
}
