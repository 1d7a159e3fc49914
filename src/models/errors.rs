use crate::models::Transaction;
use crate::types::{MonthKey, TransactionId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// A transaction was offered to a group for a different month. Always a caller bug.
    #[error("Transaction [{transaction_id}] month [{transaction_month}] does not match group month [{group_month}]")]
    Consistency {
        transaction_id: TransactionId,
        transaction_month: MonthKey,
        group_month: MonthKey
    },
    #[error("Totals for month [{month}] overflowed")]
    Overflow {
        month: MonthKey
    },
    #[error("Invalid totals mode [{mode}], expected 'planned' or 'spent'")]
    InvalidMode {
        mode: String
    }
}

impl LedgerError {
    pub fn consistency(tx: &Transaction, group_month: &str) -> Self {
        Self::Consistency {
            transaction_id: tx.id.clone(),
            transaction_month: tx.month.clone(),
            group_month: group_month.to_string()
        }
    }

    pub fn overflow(month: &str) -> Self {
        Self::Overflow { month: month.to_string() }
    }

    pub fn invalid_mode(mode: &str) -> Self {
        Self::InvalidMode { mode: mode.to_string() }
    }
}
