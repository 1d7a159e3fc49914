use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::models::{LedgerError, Transaction};
use crate::types::{MonthKey, TotalsMode};

/// All transactions of one calendar month, kept in display order.
///
/// Display order is: bought before not bought, then higher priority first, then
/// smaller (more negative) amount first. Ties keep their original order.
///
/// Totals are accumulated with checked arithmetic when members are added, so a group
/// that exists always has representable totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    month: MonthKey,
    transactions: Vec<Transaction>,
    totals: GroupTotals
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct GroupTotals {
    planned_amount: Decimal,
    spent_amount: Decimal,
    planned_cost: Decimal,
    spent_cost: Decimal
}

impl GroupTotals {
    /// Totals with `tx` added, or `None` on overflow.
    fn with(self, tx: &Transaction) -> Option<Self> {
        let (spent_amount, spent_cost) = if tx.bought {
            (self.spent_amount.checked_add(tx.amount)?, self.spent_cost.checked_add(tx.cost)?)
        } else {
            (self.spent_amount, self.spent_cost)
        };

        Some(Self {
            planned_amount: self.planned_amount.checked_add(tx.amount)?,
            spent_amount,
            planned_cost: self.planned_cost.checked_add(tx.cost)?,
            spent_cost
        })
    }
}

impl MonthGroup {
    /// Builds a group from transactions that all belong to `month`.
    ///
    /// # Errors
    /// Returns `LedgerError::Consistency` naming the first transaction whose month
    /// differs from `month`, or `LedgerError::Overflow` if a total does not fit.
    pub fn new(month: impl Into<MonthKey>, mut transactions: Vec<Transaction>) -> Result<Self, LedgerError> {
        let month = month.into();

        if let Some(stray) = transactions.iter().find(|tx| tx.month != month) {
            return Err(LedgerError::consistency(stray, &month));
        }

        let totals = transactions.iter()
            .try_fold(GroupTotals::default(), GroupTotals::with)
            .ok_or_else(|| LedgerError::overflow(&month))?;

        transactions.sort_by(display_order);

        Ok(Self { month, transactions, totals })
    }

    /// Adds one transaction at its display position. On error the group is left untouched.
    #[allow(dead_code)]
    pub fn push(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        if transaction.month != self.month {
            return Err(LedgerError::consistency(&transaction, &self.month));
        }

        let totals = self.totals.with(&transaction)
            .ok_or_else(|| LedgerError::overflow(&self.month))?;

        let index = self.transactions
            .partition_point(|existing| display_order(existing, &transaction) != Ordering::Greater);
        self.transactions.insert(index, transaction);
        self.totals = totals;

        Ok(())
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn total_planned_amount(&self) -> Decimal {
        self.totals.planned_amount
    }

    pub fn total_spent_amount(&self) -> Decimal {
        self.totals.spent_amount
    }

    pub fn total_planned_cost(&self) -> Decimal {
        self.totals.planned_cost
    }

    pub fn total_spent_cost(&self) -> Decimal {
        self.totals.spent_cost
    }

    pub fn has_income(&self) -> bool {
        self.transactions.iter().any(Transaction::has_income)
    }

    /// The group total that feeds the running balance for `mode`.
    pub fn signed_total(&self, mode: TotalsMode) -> Decimal {
        match mode {
            TotalsMode::Planned => self.total_planned_amount(),
            TotalsMode::Spent => self.total_spent_amount()
        }
    }
}

fn display_order(left: &Transaction, right: &Transaction) -> Ordering {
    right.bought.cmp(&left.bought)
        .then_with(|| right.effective_priority().cmp(&left.effective_priority()))
        .then_with(|| left.amount.cmp(&right.amount))
}
