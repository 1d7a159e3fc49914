use std::sync::Arc;

use thiserror::Error;

use crate::models::LedgerError;
use crate::sources::SourceError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to fetch transactions: {0}")]
    Fetch(#[from] Arc<SourceError>),
    #[error(transparent)]
    Ledger(#[from] LedgerError)
}
