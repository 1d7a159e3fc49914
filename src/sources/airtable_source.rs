use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::Transaction;
use crate::sources::{RecordSource, SourceError};

const DEFAULT_ENDPOINT: &str = "https://api.airtable.com/v0";
const DEFAULT_BASE_ID: &str = "appLs2g5V4ZowwOJ9";
const DEFAULT_TABLE: &str = "Spending";
const DEFAULT_VIEW: &str = "Planned By Month";

/// Where the spending table lives and how to authenticate against it.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub api_key: String,
    pub endpoint: String,
    pub base_id: String,
    pub table: String,
    pub view: String
}

impl AirtableConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            base_id: DEFAULT_BASE_ID.to_string(),
            table: DEFAULT_TABLE.to_string(),
            view: DEFAULT_VIEW.to_string()
        }
    }

    fn table_url(&self) -> String {
        format!("{}/{}/{}", self.endpoint.trim_end_matches('/'), self.base_id, self.table)
    }
}

/// Lists every record of an Airtable view, following the pagination cursor.
pub struct AirtableSource {
    client: Client,
    config: AirtableConfig
}

impl AirtableSource {
    pub fn new(config: AirtableConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: AirtableConfig) -> Self {
        Self { client, config }
    }

    async fn fetch_page(&self, offset: Option<&str>) -> Result<AirtablePage, SourceError> {
        let mut request = self.client
            .get(self.config.table_url())
            .bearer_auth(&self.config.api_key)
            .query(&[("view", self.config.view.as_str())]);

        if let Some(offset) = offset {
            request = request.query(&[("offset", offset)]);
        }

        let page = request
            .send()
            .await?
            .error_for_status()?
            .json::<AirtablePage>()
            .await?;

        Ok(page)
    }
}

impl RecordSource for AirtableSource {
    fn key(&self) -> String {
        format!("airtable:{}/{}/{}", self.config.base_id, self.config.table, self.config.view)
    }

    async fn fetch(&self) -> Result<Vec<Transaction>, SourceError> {
        let mut transactions = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let page = self.fetch_page(offset.as_deref()).await?;
            debug!("Received {} records from [{}]", page.records.len(), self.config.table);

            transactions.extend(page.records.into_iter().filter_map(AirtableRecord::into_transaction));

            match page.offset {
                Some(next) => offset = Some(next),
                None => break
            }
        }

        Ok(transactions)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirtablePage {
    pub records: Vec<AirtableRecord>,
    #[serde(default)]
    pub offset: Option<String>
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirtableRecord {
    pub id: String,
    #[serde(default)]
    pub fields: AirtableFields
}

/// Cells of one spending row. Airtable omits empty cells entirely.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct AirtableFields {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub income: Option<Decimal>,
    pub month: Option<String>,
    pub store: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub bought: Option<bool>,
    pub link: Option<String>,
    pub priority: Option<i64>
}

impl AirtableRecord {
    /// Records without a month cannot be placed in the ledger and are dropped.
    pub(crate) fn into_transaction(self) -> Option<Transaction> {
        let fields = self.fields;

        let Some(month) = fields.month.filter(|month| !month.trim().is_empty()) else {
            warn!("Skipping record [{}] without a month", self.id);
            return None;
        };

        Some(Transaction {
            id: self.id,
            name: fields.name.unwrap_or_default(),
            amount: fields.amount.unwrap_or_default(),
            cost: fields.cost.unwrap_or_default(),
            income: fields.income.unwrap_or_default(),
            month,
            store: fields.store.unwrap_or_default(),
            category: fields.category.unwrap_or_default(),
            notes: fields.notes.unwrap_or_default(),
            bought: fields.bought.unwrap_or_default(),
            link: fields.link,
            priority: fields.priority
        })
    }
}
