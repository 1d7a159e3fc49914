use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::types::{MonthKey, TransactionId};

/// One planned or actual purchase (or income) as stored in the record store.
///
/// Only `id`, `amount` and `month` are mandatory. Everything else falls back to
/// an empty/zero value when the record leaves it blank, which the record store
/// does for any cell nobody filled in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    /// Signed amount: positive is income, negative is planned spend.
    pub amount: Decimal,
    /// What was actually paid, which can differ from the planned `amount`.
    #[serde(default, deserialize_with = "or_default")]
    pub cost: Decimal,
    #[serde(default, deserialize_with = "or_default")]
    pub income: Decimal,
    pub month: MonthKey,
    #[serde(default, deserialize_with = "or_default")]
    pub store: String,
    #[serde(default, deserialize_with = "or_default")]
    pub category: String,
    #[serde(default, deserialize_with = "or_default")]
    pub notes: String,
    #[serde(default, deserialize_with = "or_default")]
    pub bought: bool,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub priority: Option<i64>
}

impl Transaction {
    /// Sort priority, treating an unset priority as 0.
    pub fn effective_priority(&self) -> i64 {
        self.priority.unwrap_or(0)
    }

    pub fn has_income(&self) -> bool {
        self.income > Decimal::ZERO
    }
}

/// Deserializes `null` and empty cells to the type's default.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
