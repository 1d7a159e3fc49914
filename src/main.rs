mod cli;
mod engine;
mod models;
mod render;
mod sources;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use tokio::time::interval;
use tracing::{error, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::{Cli, OutputFormat, SourceKind};
use crate::engine::LedgerEngine;
use crate::render::{write_summary, write_table};
use crate::sources::{AirtableSource, CsvSource, JsonSource, RecordSource};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level);

    match cli.source_kind()? {
        SourceKind::Csv => run(CsvSource::new(cli.input_path()?), &cli).await,
        SourceKind::Json => run(JsonSource::new(cli.input_path()?), &cli).await,
        SourceKind::Airtable => run(AirtableSource::new(cli.airtable_config()?), &cli).await
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the ledger, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

async fn run<S: RecordSource>(source: S, cli: &Cli) -> Result<()> {
    let engine = LedgerEngine::new(source, cli.settings())
        .with_cache_timeout(cli.cache_timeout());

    let Some(period) = cli.watch_interval() else {
        return render_once(&engine, cli).await;
    };

    let mut ticker = interval(period);

    loop {
        ticker.tick().await;

        //NOTE: In watch mode a failed refresh is reported and the next tick tries again
        if let Err(error) = render_once(&engine, cli).await {
            error!("{error:#}");
        }
    }
}

async fn render_once<S: RecordSource>(engine: &LedgerEngine<S>, cli: &Cli) -> Result<()> {
    let view = engine.load().await?;
    info!("Rendering {} months in {} mode", view.groups.len(), view.mode);

    let mut output = BufWriter::new(stdout().lock());

    match cli.format {
        OutputFormat::Table => write_table(&mut output, &view, &cli.table_options())?,
        OutputFormat::Csv => write_summary(&mut output, &view)?
    }

    output.flush()?;

    Ok(())
}
