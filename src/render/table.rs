use std::io::Write;

use anyhow::Result;
use tracing::warn;

use crate::engine::LedgerView;
use crate::models::{MonthGroup, Transaction};
use crate::types::{format_money, format_month_label};

const COLUMN_SEPARATOR: &str = " | ";

/// Optional columns of the ledger table.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableOptions {
    pub show_category: bool,
    pub show_store: bool
}

enum Row {
    Cells(Vec<String>),
    Rule
}

/// Writes the ledger as a plain-text table.
///
/// Each month opens with its label and group total on the first transaction row and
/// closes with a `Total` row holding the running balance after that month.
pub fn write_table<W: Write>(output: &mut W, view: &LedgerView, options: &TableOptions) -> Result<()> {
    let mut rows = vec![Row::Cells(header(options)), Row::Rule];

    for group in &view.groups {
        let label = month_label(group.month());

        for (index, transaction) in group.transactions().iter().enumerate() {
            let (month, total) = if index == 0 {
                (label.clone(), group_total(group))
            } else {
                (String::new(), String::new())
            };
            rows.push(Row::Cells(transaction_cells(month, total, transaction, options)));
        }

        let balance = view.running_totals.get(group.month()).map(format_money).unwrap_or_default();
        rows.push(Row::Cells(vec!["Total".to_string(), balance]));
        rows.push(Row::Rule);
    }

    let widths = column_widths(&rows);

    for row in &rows {
        let line = match row {
            Row::Cells(cells) => widths.iter()
                .copied()
                .enumerate()
                .map(|(column, width)| {
                    let cell = cells.get(column).map(String::as_str).unwrap_or("");
                    format!("{cell:<width$}")
                })
                .collect::<Vec<_>>()
                .join(COLUMN_SEPARATOR),
            Row::Rule => widths.iter()
                .map(|width| "-".repeat(*width))
                .collect::<Vec<_>>()
                .join("-+-")
        };
        writeln!(output, "{}", line.trim_end())?;
    }

    output.flush()?;

    Ok(())
}

/// The human label for a month, or the raw key when it is not a date.
fn month_label(month: &str) -> String {
    format_month_label(Some(month)).unwrap_or_else(|error| {
        warn!("Showing raw month key: {error}");
        month.to_string()
    })
}

fn header(options: &TableOptions) -> Vec<String> {
    let mut header = vec!["Month", "Total", "Name", "Amount", "Bought"];

    if options.show_category {
        header.push("Category");
    }
    if options.show_store {
        header.push("Store");
    }
    header.push("Notes");

    header.into_iter().map(str::to_string).collect()
}

fn transaction_cells(month: String, total: String, transaction: &Transaction, options: &TableOptions) -> Vec<String> {
    let bought = if transaction.bought { "[x]" } else { "[ ]" };
    let mut cells = vec![month, total, transaction.name.clone(), format_money(transaction.amount), bought.to_string()];

    if options.show_category {
        cells.push(transaction.category.clone());
    }
    if options.show_store {
        cells.push(transaction.store.clone());
    }
    cells.push(transaction.notes.clone());

    cells
}

/// Spent and planned when they differ, otherwise just planned.
fn group_total(group: &MonthGroup) -> String {
    let planned = group.total_planned_amount();
    let spent = group.total_spent_amount();

    if spent == planned {
        format_money(planned)
    } else {
        format!("{} / {}", format_money(spent), format_money(planned))
    }
}

fn column_widths(rows: &[Row]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();

    for row in rows {
        let Row::Cells(cells) = row else { continue };

        for (column, cell) in cells.iter().enumerate() {
            let width = cell.chars().count();
            match widths.get_mut(column) {
                Some(current) => *current = (*current).max(width),
                None => widths.push(width)
            }
        }
    }

    widths
}
