use super::errors::MonthKeyError;
use super::{format_money, format_month_label, TotalsMode};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::LedgerError;

#[test]
fn test_month_label_formats_month_and_day_keys() -> Result<()> {
    assert_eq!(format_month_label(Some("2022-03"))?, "Mar 2022");
    assert_eq!(format_month_label(Some("2022-03-15"))?, "Mar 2022");
    assert_eq!(format_month_label(Some("2021-12"))?, "Dec 2021");

    Ok(())
}

#[test]
fn test_month_label_is_empty_for_absent_or_blank_keys() -> Result<()> {
    assert_eq!(format_month_label(None)?, "");
    assert_eq!(format_month_label(Some(""))?, "");
    assert_eq!(format_month_label(Some("   "))?, "");

    Ok(())
}

#[test]
fn test_month_label_rejects_keys_that_are_not_dates() {
    assert!(matches!(format_month_label(Some("March")), Err(MonthKeyError::InvalidFormat { .. })));
    assert!(matches!(format_month_label(Some("2022-13")), Err(MonthKeyError::InvalidFormat { .. })));
    assert!(matches!(format_month_label(Some("2022-02-30")), Err(MonthKeyError::InvalidFormat { .. })));
}

#[test]
fn test_totals_mode_parses_known_values() -> Result<()> {
    assert_eq!(TotalsMode::from_str("planned")?, TotalsMode::Planned);
    assert_eq!(TotalsMode::from_str("Spent")?, TotalsMode::Spent);
    assert_eq!(TotalsMode::from_str(" spent ")?, TotalsMode::Spent);
    assert_eq!(TotalsMode::default(), TotalsMode::Planned);

    Ok(())
}

#[test]
fn test_totals_mode_rejects_unknown_values_naming_the_value() {
    let result = TotalsMode::from_str("actual");

    assert!(matches!(&result, Err(LedgerError::InvalidMode { mode }) if mode == "actual"));
    assert!(result.unwrap_err().to_string().contains("actual"));
}

#[test]
fn test_totals_mode_display_round_trips() -> Result<()> {
    for mode in [TotalsMode::Planned, TotalsMode::Spent] {
        assert_eq!(TotalsMode::from_str(&mode.to_string())?, mode);
    }

    Ok(())
}

#[test]
fn test_money_formats_in_currency_style() -> Result<()> {
    let test_cases = vec![
        ("0", "$0.00"),
        ("5", "$5.00"),
        ("5.5", "$5.50"),
        ("-5", "-$5.00"),
        ("999.999", "$1,000.00"),
        ("1234.5", "$1,234.50"),
        ("-1234567.891", "-$1,234,567.89"),
        ("0.005", "$0.01"),
        ("-0.001", "$0.00"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(format_money(Decimal::from_str(input)?), expected, "formatting {input}");
    }

    Ok(())
}
