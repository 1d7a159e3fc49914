mod errors;
mod grouping;
mod ledger_engine;
mod running_totals;

pub use errors::EngineError;
pub use grouping::group_by_month;
pub use ledger_engine::{LedgerEngine, LedgerSettings, LedgerView};
pub use running_totals::{calculate_running_totals, RunningTotals};
