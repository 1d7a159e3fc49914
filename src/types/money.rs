use rust_decimal::{Decimal, RoundingStrategy};

const CURRENCY_SYMBOL: &str = "$";

/// Formats an amount in US currency style: `$1,234.50`, `-$5.00`.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    //NOTE: Decimal keeps the scale it was rounded to, so pad explicitly for values like "5" or "5.5"
    let plain = format!("{:.2}", rounded.abs());
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!("{sign}{CURRENCY_SYMBOL}{}.{fraction}", group_thousands(integer))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
