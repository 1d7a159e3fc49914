use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::future::Cache;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::engine::{calculate_running_totals, group_by_month, EngineError, RunningTotals};
use crate::models::{MonthGroup, Transaction};
use crate::sources::{RecordSource, SourceError};
use crate::types::{MonthKey, TotalsMode};

const DEFAULT_MONTHLY_BUDGET: i64 = 30;
const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_secs(60);
const CACHE_CAPACITY: u64 = 16;

/// Inputs to the running total and the month filter applied on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSettings {
    pub monthly_budget: Decimal,
    pub mode: TotalsMode,
    /// Months with a key before this one are left out of the view. Their
    /// amounts still count towards later balances.
    pub hide_months_before: Option<MonthKey>
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            monthly_budget: Decimal::from(DEFAULT_MONTHLY_BUDGET),
            mode: TotalsMode::default(),
            hide_months_before: None
        }
    }
}

/// What the presentation layer gets: visible month groups plus the balance after every month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerView {
    pub groups: Vec<MonthGroup>,
    pub running_totals: RunningTotals,
    pub mode: TotalsMode
}

/// Fetches transactions from a record source and turns them into a ledger view.
///
/// Fetched lists are cached per source for a short time, so repeated loads (the
/// watch loop) reuse the previous fetch until it goes stale.
pub struct LedgerEngine<S: RecordSource> {
    source: S,
    settings: LedgerSettings,
    cache: Cache<String, Arc<Vec<Transaction>>>
}

impl<S: RecordSource> LedgerEngine<S> {
    pub fn new(source: S, settings: LedgerSettings) -> Self {
        Self {
            source,
            settings,
            cache: build_cache(DEFAULT_CACHE_TIMEOUT)
        }
    }

    pub fn with_cache_timeout(mut self, timeout: Duration) -> Self {
        self.cache = build_cache(timeout);
        self
    }

    /// Fetches (or reuses) the transaction list and builds the view.
    ///
    /// # Errors
    /// Fails if the fetch fails, if grouping breaks the month invariant or if a total
    /// overflows. No partial
    /// view is returned in either case.
    pub async fn load(&self) -> Result<LedgerView, EngineError> {
        let transactions = self.transactions().await?;
        let groups = group_by_month(transactions.iter().cloned())?;

        debug!("Grouped {} transactions into {} months", transactions.len(), groups.len());

        let running_totals = calculate_running_totals(&groups, self.settings.monthly_budget, self.settings.mode)?;
        debug!("Computed {} running balances", running_totals.len());

        let groups = match &self.settings.hide_months_before {
            Some(cutoff) => groups.into_iter().filter(|group| group.month() >= cutoff.as_str()).collect(),
            None => groups
        };

        Ok(LedgerView {
            groups,
            running_totals,
            mode: self.settings.mode
        })
    }

    async fn transactions(&self) -> Result<Arc<Vec<Transaction>>, EngineError> {
        let key = self.source.key();

        if let Some(cached) = self.cache.get(&key).await {
            debug!("Using cached transactions for [{key}]");
            return Ok(cached);
        }

        let transactions = self.cache
            .try_get_with(key.clone(), async {
                let timer = Instant::now();
                let transactions = self.source.fetch().await?;
                info!("Fetched {} transactions from [{key}] in {:?}", transactions.len(), timer.elapsed());
                Ok::<_, SourceError>(Arc::new(transactions))
            })
            .await?;

        Ok(transactions)
    }
}

fn build_cache(timeout: Duration) -> Cache<String, Arc<Vec<Transaction>>> {
    Cache::builder()
        .max_capacity(CACHE_CAPACITY)
        .time_to_live(timeout)
        .build()
}
