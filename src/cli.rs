//! Command-line interface definitions.
//!
//! Every option can be given as a flag or through the environment.

use crate::collector::DEFAULT_START_URL;
use clap::Parser;

/// Collect the latest news articles and save them as text and CSV.
///
/// # Examples
///
/// ```sh
/// # One collection of 40 articles into ./data/one_time
/// last_news_collector
///
/// # Collect 20 articles every 10 minutes
/// last_news_collector --loop --limit 20
///
/// # Custom output directory and cadence
/// last_news_collector --loop -o /srv/news --interval-secs 300
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Keep collecting on a fixed cadence instead of running once
    #[arg(long = "loop", env = "NEWS_LOOP")]
    pub run_loop: bool,

    /// Maximum number of articles per collection
    #[arg(short, long, env = "NEWS_LIMIT", default_value_t = 40)]
    pub limit: usize,

    /// Root directory for text and CSV exports
    #[arg(short, long, env = "NEWS_OUTPUT_DIR", default_value = "data")]
    pub output_dir: String,

    /// Seconds to wait between collections in loop mode
    #[arg(long, env = "NEWS_INTERVAL_SECS", default_value_t = 600)]
    pub interval_secs: u64,

    /// Listing page the collection starts from
    #[arg(long, env = "NEWS_URL", default_value = DEFAULT_START_URL)]
    pub url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "NEWS_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}
