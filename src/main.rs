use std::io::{self, Write};
use std::process;

use log::{error, info};
use retail_charts::{all_series, monthly_transactions, write_bar_chart, Result};
use tracing_subscriber::EnvFilter;

/// Blank lines printed before the first chart
const LEADING_BLANK_LINES: usize = 6;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        error!("{}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let transactions = monthly_transactions();
    info!(
        "retail-charts {}: {} transactions",
        retail_charts::VERSION,
        transactions.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all("\n".repeat(LEADING_BLANK_LINES).as_bytes())?;

    for series in all_series(&transactions) {
        info!("printing '{}' ({} bars)", series.title(), series.len());
        write_bar_chart(&mut out, series.title(), series.labels(), series.values())?;
    }

    out.flush()?;
    Ok(())
}
