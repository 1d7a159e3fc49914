use std::collections::BTreeMap;

use crate::models::{LedgerError, MonthGroup, Transaction};
use crate::types::MonthKey;

/// Partitions transactions into one `MonthGroup` per distinct month, oldest month first.
///
/// Every input transaction ends up in exactly one group. Keys are compared as plain
/// strings, which orders `YYYY-MM` keys chronologically.
pub fn group_by_month<I>(transactions: I) -> Result<Vec<MonthGroup>, LedgerError>
where
    I: IntoIterator<Item = Transaction>,
{
    let mut by_month = BTreeMap::<MonthKey, Vec<Transaction>>::new();

    for transaction in transactions {
        by_month.entry(transaction.month.clone()).or_default().push(transaction);
    }

    by_month.into_iter()
        .map(|(month, transactions)| MonthGroup::new(month, transactions))
        .collect()
}
