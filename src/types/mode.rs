use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::models::LedgerError;

/// Which group total feeds the running balance.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum TotalsMode {
    /// Everything on the list, bought or not.
    #[default]
    Planned,
    /// Only what has actually been bought.
    Spent
}

impl Display for TotalsMode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TotalsMode::Planned => write!(formatter, "planned"),
            TotalsMode::Spent => write!(formatter, "spent")
        }
    }
}

impl FromStr for TotalsMode {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "planned" => Ok(TotalsMode::Planned),
            "spent" => Ok(TotalsMode::Spent),
            _ => Err(LedgerError::invalid_mode(value))
        }
    }
}
