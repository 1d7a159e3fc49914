mod errors;
mod mode;
mod money;
mod month;
#[cfg(test)]
mod tests;

pub use mode::TotalsMode;
pub use money::format_money;
pub use month::format_month_label;

/// Record store identifier of a transaction.
pub type TransactionId = String;
/// Calendar month key in `YYYY-MM` (or `YYYY-MM-DD`) form.
pub type MonthKey = String;
