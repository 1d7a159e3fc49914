use std::process::Command;
use std::path::Path;
use anyhow::{anyhow, Result};

fn run_ledger(args: &[&str]) -> Result<std::process::Output> {
    let binary_path = env!("CARGO_BIN_EXE_spending-ledger");

    Ok(Command::new(binary_path)
        .args(args)
        .env_remove("LEDGER_MONTHLY_BUDGET")
        .env_remove("LEDGER_MODE")
        .env_remove("LEDGER_HIDE_MONTHS_BEFORE")
        .env_remove("LEDGER_SOURCE")
        .output()?)
}

fn fixture(name: &str) -> Result<String> {
    Path::new("samples").join(name).to_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("fixture path is not valid UTF-8"))
}

#[test]
fn test_cli_renders_sample_table() -> Result<()> {
    let output = run_ledger(&["--input", &fixture("sample.csv")?, "--show-category"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let header = stdout.lines().next().ok_or_else(|| anyhow!("no output"))?;

    assert!(header.starts_with("Month"));
    assert!(header.contains("Category"));
    assert!(!header.contains("Store"));

    for label in ["Jan 2022", "Feb 2022", "Mar 2022"] {
        assert!(stdout.contains(label), "missing {label}");
    }

    assert_eq!(stdout.lines().filter(|line| line.starts_with("Total")).count(), 3);

    Ok(())
}

#[test]
fn test_cli_outputs_correct_planned_balances() -> Result<()> {
    let output = run_ledger(&["--input", &fixture("fixed.csv")?, "--format", "csv"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines, vec![
        "month,planned,spent,planned_cost,spent_cost,has_income,balance",
        "2022-03,-28,-8,0,0,false,2",
        "2022-04,12,12,0,0,false,44",
        "2022-05,-40,0,0,0,false,34"
    ]);

    Ok(())
}

#[test]
fn test_cli_outputs_correct_spent_balances_with_custom_budget() -> Result<()> {
    let output = run_ledger(&[
        "--input", &fixture("fixed.csv")?,
        "--format", "csv",
        "--mode", "spent",
        "--budget", "10",
        "--hide-months-before", "2022-04"
    ])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let balances: Vec<&str> = stdout.lines()
        .skip(1)
        .filter_map(|line| line.rsplit(',').next())
        .collect();

    assert_eq!(balances, vec!["24", "34"]);

    Ok(())
}

#[test]
fn test_cli_rejects_unknown_mode() -> Result<()> {
    let output = run_ledger(&["--input", &fixture("fixed.csv")?, "--mode", "actual"])?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("actual"));

    Ok(())
}

#[test]
fn test_cli_fails_for_missing_input() -> Result<()> {
    let output = run_ledger(&["--input", "samples/missing.csv"])?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("missing.csv"));

    Ok(())
}
