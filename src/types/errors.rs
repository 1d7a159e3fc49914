use chrono::ParseError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonthKeyError {
    #[error("Month key error: '{key}' is not a YYYY-MM or YYYY-MM-DD date")]
    InvalidFormat {
        key: String,
        #[source]
        source: ParseError
    }
}
