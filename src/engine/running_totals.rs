use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{LedgerError, MonthGroup};
use crate::types::{MonthKey, TotalsMode};

/// Cumulative balance after each month, keyed and iterated in month order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunningTotals {
    balances: BTreeMap<MonthKey, Decimal>
}

impl RunningTotals {
    pub fn get(&self, month: &str) -> Option<Decimal> {
        self.balances.get(month).copied()
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, MonthKey, Decimal> {
        self.balances.iter()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

/// Carries a balance forward month by month.
///
/// `balance[i] = balance[i - 1] + monthly_budget + group[i].signed_total(mode)`, starting
/// from zero. Group totals are signed (income positive, spend negative), so they are added.
/// `groups` must already be in month order, as returned by `group_by_month`.
///
/// # Errors
/// Returns `LedgerError::Overflow` naming the first month whose balance does not fit.
pub fn calculate_running_totals(groups: &[MonthGroup], monthly_budget: Decimal, mode: TotalsMode) -> Result<RunningTotals, LedgerError> {
    let mut balance = Decimal::ZERO;
    let mut balances = BTreeMap::new();

    for group in groups {
        balance = balance.checked_add(monthly_budget)
            .and_then(|balance| balance.checked_add(group.signed_total(mode)))
            .ok_or_else(|| LedgerError::overflow(group.month()))?;
        balances.insert(group.month().to_string(), balance);
    }

    Ok(RunningTotals { balances })
}
