//! # Last News Collector
//!
//! Collects the latest articles from a paginated news listing and saves them
//! as a labeled text file and a CSV file.
//!
//! ## Features
//!
//! - Follows the listing's "load more" links until enough articles are held
//! - Skips feed items that lack a title, description, link or image
//! - Prints a table of the collected articles
//! - Runs once, or forever on a fixed cadence with timestamped exports
//!
//! ## Usage
//!
//! ```sh
//! last_news_collector --limit 40
//! last_news_collector --loop --interval-secs 600
//! ```
//!
//! ## Architecture
//!
//! 1. **Collection**: [`collector::Collector`] fetches pages one at a time and
//!    extracts records with [`scrapers::feed`]
//! 2. **Display**: [`outputs::console`] renders the records as a table
//! 3. **Export**: [`outputs::text`] and [`outputs::csv_file`] write the files

use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod collector;
mod error;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use collector::{Collector, CollectorConfig};
use error::ExportError;
use models::ArticleRecord;
use outputs::{console, csv_file, text, OutputLayout};
use scrapers::source::HttpPageSource;
use utils::export_stamp_now;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let layout = OutputLayout::new(&args.output_dir);
    if let Err(e) = layout.prepare().await {
        error!(
            path = %layout.root().display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    let config = CollectorConfig {
        start_url: args.url.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
        ..CollectorConfig::default()
    };
    let collector = Collector::from_config(&config)?;
    info!(start_url = %collector.start_url(), limit = args.limit, "Collector ready");

    if args.run_loop {
        info!(interval_secs = args.interval_secs, "Starting news collection in loop mode");
        run_in_loop(&collector, &layout, args.limit, Duration::from_secs(args.interval_secs)).await
    } else {
        info!("Starting a single news collection");
        run_once(&collector, &layout, args.limit).await
    }
}

/// Collect once, print the table and write both exports.
///
/// Any failure is returned and ends the process.
#[instrument(level = "info", skip_all)]
async fn run_once(
    collector: &Collector<HttpPageSource>,
    layout: &OutputLayout,
    limit: usize,
) -> Result<(), Box<dyn Error>> {
    let start_time = std::time::Instant::now();

    let news = collector.collect(limit).await?;
    println!("{}", console::render(&news));

    export(&news, &layout.one_time_text(), &layout.one_time_csv()).await?;

    info!(elapsed = ?start_time.elapsed(), count = news.len(), "Execution complete");
    Ok(())
}

/// Collect on a fixed cadence, forever.
///
/// A failed cycle is logged and skipped; the next one runs after the usual
/// wait. Cycles never overlap.
async fn run_in_loop(
    collector: &Collector<HttpPageSource>,
    layout: &OutputLayout,
    limit: usize,
    interval: Duration,
) -> Result<(), Box<dyn Error>> {
    loop {
        run_cycle(collector, layout, limit).await;

        info!(wait = ?interval, "Waiting before the next collection");
        tokio::time::sleep(interval).await;
    }
}

#[instrument(level = "info", skip_all)]
async fn run_cycle(collector: &Collector<HttpPageSource>, layout: &OutputLayout, limit: usize) {
    let news = match collector.collect(limit).await {
        Ok(news) => news,
        Err(e) => {
            error!(error = %e, "Collection cycle failed; will retry on the next cycle");
            return;
        }
    };
    println!("{}", console::render(&news));

    let stamp = export_stamp_now();
    let text_path = layout.loop_text(&stamp);
    let csv_path = layout.loop_csv(&stamp);
    match export(&news, &text_path, &csv_path).await {
        Ok(()) => info!(
            text = %text_path.display(),
            csv = %csv_path.display(),
            count = news.len(),
            "Saved exports"
        ),
        Err(e) => warn!(error = %e, "Export failed for this cycle"),
    }
}

async fn export(news: &[ArticleRecord], text_path: &Path, csv_path: &Path) -> Result<(), ExportError> {
    text::write_text(news, text_path).await?;
    csv_file::write_csv(news, csv_path).await?;
    Ok(())
}
