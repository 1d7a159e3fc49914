use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use tracing::level_filters::LevelFilter;

use crate::engine::LedgerSettings;
use crate::render::TableOptions;
use crate::sources::AirtableConfig;
use crate::types::{MonthKey, TotalsMode};

#[derive(Debug, Parser)]
#[command(name = "spending-ledger")]
#[command(about = "Monthly discretionary spending ledger with running balances", long_about = None)]
pub struct Cli {
    /// Where transactions come from. Inferred from the --input extension when omitted.
    #[arg(long, value_enum, env = "LEDGER_SOURCE")]
    pub source: Option<SourceKind>,

    /// CSV or JSON file exported from the record store.
    #[arg(long, short = 'i', env = "LEDGER_INPUT")]
    pub input: Option<PathBuf>,

    /// Amount added to the balance at the start of every month.
    #[arg(long, env = "LEDGER_MONTHLY_BUDGET", default_value = "30")]
    pub budget: Decimal,

    /// Which group total feeds the running balance: planned or spent.
    #[arg(long, env = "LEDGER_MODE", default_value = "planned")]
    pub mode: TotalsMode,

    /// Leave out months before this key (YYYY-MM). Their amounts still count.
    #[arg(long, env = "LEDGER_HIDE_MONTHS_BEFORE")]
    pub hide_months_before: Option<MonthKey>,

    #[arg(long)]
    pub show_category: bool,

    #[arg(long)]
    pub show_store: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Re-render every SECONDS until interrupted.
    #[arg(long, value_name = "SECONDS")]
    pub watch: Option<u64>,

    /// How long a fetched transaction list is reused.
    #[arg(long, value_name = "SECONDS", default_value_t = 60)]
    pub cache_ttl: u64,

    #[arg(long, env = "LEDGER_LOG_LEVEL", default_value = "error")]
    pub log_level: LevelFilter,

    #[arg(long, env = "AIRTABLE_API_KEY", hide_env_values = true)]
    pub airtable_api_key: Option<String>,

    /// Airtable REST root, e.g. a proxy in front of the API.
    #[arg(long, env = "AIRTABLE_ENDPOINT")]
    pub airtable_endpoint: Option<String>,

    #[arg(long, env = "AIRTABLE_BASE_ID")]
    pub airtable_base: Option<String>,

    #[arg(long, env = "AIRTABLE_TABLE")]
    pub airtable_table: Option<String>,

    #[arg(long, env = "AIRTABLE_VIEW")]
    pub airtable_view: Option<String>
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum SourceKind {
    Csv,
    Json,
    Airtable
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv
}

impl Cli {
    /// Resolves the source to read from: explicit flag, then input extension, then Airtable.
    pub fn source_kind(&self) -> Result<SourceKind> {
        if let Some(kind) = self.source {
            return Ok(kind);
        }

        let Some(input) = &self.input else {
            return Ok(SourceKind::Airtable);
        };

        match extension(input).as_deref() {
            Some("csv") => Ok(SourceKind::Csv),
            Some("json") => Ok(SourceKind::Json),
            _ => bail!("Cannot infer the source type of [{}], pass --source", input.display())
        }
    }

    pub fn input_path(&self) -> Result<&Path> {
        match &self.input {
            Some(path) => Ok(path),
            None => bail!("--input is required for file sources")
        }
    }

    pub fn airtable_config(&self) -> Result<AirtableConfig> {
        let Some(api_key) = &self.airtable_api_key else {
            bail!("AIRTABLE_API_KEY (or --airtable-api-key) is required for the airtable source");
        };

        let mut config = AirtableConfig::new(api_key.as_str());

        if let Some(endpoint) = &self.airtable_endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(base) = &self.airtable_base {
            config.base_id = base.clone();
        }
        if let Some(table) = &self.airtable_table {
            config.table = table.clone();
        }
        if let Some(view) = &self.airtable_view {
            config.view = view.clone();
        }

        Ok(config)
    }

    pub fn settings(&self) -> LedgerSettings {
        LedgerSettings {
            monthly_budget: self.budget,
            mode: self.mode,
            hide_months_before: self.hide_months_before.clone()
        }
    }

    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            show_category: self.show_category,
            show_store: self.show_store
        }
    }

    pub fn cache_timeout(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn watch_interval(&self) -> Option<Duration> {
        self.watch.filter(|seconds| *seconds > 0).map(Duration::from_secs)
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_lowercase)
}
