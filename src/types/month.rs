use chrono::NaiveDate;

use crate::types::errors::MonthKeyError;

const LABEL_FORMAT: &str = "%b %Y";

/// Formats a month key as a short human label, e.g. `2022-03` becomes `Mar 2022`.
///
/// Accepts both `YYYY-MM` and `YYYY-MM-DD`. An absent or blank key formats to an
/// empty string.
pub fn format_month_label(key: Option<&str>) -> Result<String, MonthKeyError> {
    let Some(key) = key.map(str::trim).filter(|key| !key.is_empty()) else {
        return Ok(String::new());
    };

    let date = match NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d")
            .map_err(|source| MonthKeyError::InvalidFormat { key: key.to_string(), source })?
    };

    Ok(date.format(LABEL_FORMAT).to_string())
}
