use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use tokio::task::spawn_blocking;
use tracing::error;

use crate::models::Transaction;
use crate::sources::{RecordSource, SourceError};

/// Reads a CSV export of the record store. Header names match the `Transaction` fields.
pub struct CsvSource {
    path: PathBuf
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvSource {
    fn key(&self) -> String {
        format!("csv:{}", self.path.display())
    }

    async fn fetch(&self) -> Result<Vec<Transaction>, SourceError> {
        let path = self.path.clone();
        spawn_blocking(move || read_csv(&path)).await?
    }
}

/// One CSV row with every cell kept as text.
///
/// Cells are parsed here rather than by serde so that money never passes through the
/// reader's numeric type guessing.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    id: String,
    #[serde(default)]
    name: String,
    amount: String,
    #[serde(default)]
    cost: String,
    #[serde(default)]
    income: String,
    month: String,
    #[serde(default)]
    store: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    bought: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    priority: String
}

impl TryFrom<CsvRecord> for Transaction {
    type Error = SourceError;

    fn try_from(record: CsvRecord) -> Result<Self, Self::Error> {
        let amount = parse_decimal(&record, "amount", &record.amount)?
            .ok_or_else(|| invalid_cell(&record, "amount", &record.amount))?;
        let cost = parse_decimal(&record, "cost", &record.cost)?.unwrap_or_default();
        let income = parse_decimal(&record, "income", &record.income)?.unwrap_or_default();

        let bought = match record.bought.to_lowercase().as_str() {
            "" | "false" => false,
            "true" => true,
            _ => return Err(invalid_cell(&record, "bought", &record.bought))
        };

        let priority = match record.priority.as_str() {
            "" => None,
            value => Some(value.parse().map_err(|_| invalid_cell(&record, "priority", value))?)
        };

        Ok(Transaction {
            id: record.id,
            name: record.name,
            amount,
            cost,
            income,
            month: record.month,
            store: record.store,
            category: record.category,
            notes: record.notes,
            bought,
            link: Some(record.link).filter(|link| !link.is_empty()),
            priority
        })
    }
}

/// Parses a money cell exactly. Blank cells are `None`.
fn parse_decimal(record: &CsvRecord, column: &'static str, value: &str) -> Result<Option<Decimal>, SourceError> {
    if value.is_empty() {
        return Ok(None);
    }

    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map(Some)
        .map_err(|_| invalid_cell(record, column, value))
}

fn invalid_cell(record: &CsvRecord, column: &'static str, value: &str) -> SourceError {
    SourceError::InvalidCell {
        id: record.id.clone(),
        column,
        value: value.to_string()
    }
}

fn read_csv(path: &Path) -> Result<Vec<Transaction>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Io { path: path.to_path_buf(), source })?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut transactions = Vec::new();

    //NOTE: A bad row should not hide the rest of the ledger, so it is logged and skipped
    for result in reader.deserialize::<CsvRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                error!("CSV deserialization error in [{}]: {error}", path.display());
                continue;
            }
        };

        match Transaction::try_from(record) {
            Ok(transaction) => transactions.push(transaction),
            Err(error) => error!("Skipping CSV row in [{}]: {error}", path.display())
        }
    }

    Ok(transactions)
}
