mod airtable_source;
mod csv_source;
mod errors;
mod json_source;

use std::future::Future;

use crate::models::Transaction;

pub use airtable_source::{AirtableConfig, AirtableSource};
pub use csv_source::CsvSource;
pub use errors::SourceError;
pub use json_source::JsonSource;

/// Read-only access to the record store holding the spending list.
pub trait RecordSource: Send + Sync + 'static {
    /// Identifies the source in logs and in the fetch cache.
    fn key(&self) -> String;
    /// Fetches the complete transaction list.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Transaction>, SourceError>> + Send;
}
