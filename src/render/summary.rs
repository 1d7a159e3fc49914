use std::io::Write;

use anyhow::Result;
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::engine::LedgerView;

const HEADER: [&str; 7] = ["month", "planned", "spent", "planned_cost", "spent_cost", "has_income", "balance"];

#[derive(Debug, Serialize)]
struct MonthSummaryRow<'a> {
    month: &'a str,
    planned: Decimal,
    spent: Decimal,
    planned_cost: Decimal,
    spent_cost: Decimal,
    has_income: bool,
    balance: Option<Decimal>
}

/// Writes one CSV row per visible month with its totals and running balance.
pub fn write_summary<W: Write>(output: W, view: &LedgerView) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(HEADER)?;

    for group in &view.groups {
        writer.serialize(MonthSummaryRow {
            month: group.month(),
            planned: group.total_planned_amount(),
            spent: group.total_spent_amount(),
            planned_cost: group.total_planned_cost(),
            spent_cost: group.total_spent_cost(),
            has_income: group.has_income(),
            balance: view.running_totals.get(group.month())
        })?;
    }

    writer.flush()?;

    Ok(())
}
