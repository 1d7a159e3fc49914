mod errors;
mod month_group;
mod transaction;

pub use errors::LedgerError;
pub use month_group::MonthGroup;
pub use transaction::Transaction;
