//! Small helpers for file naming, string display and output directories.

use chrono::{DateTime, Local, TimeZone};
use std::fs as stdfs;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Timestamp used to name the exports of one loop cycle, e.g.
/// `2025-05-06_14-30`.
pub fn export_stamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y-%m-%d_%H-%M").to_string()
}

/// [`export_stamp`] for the current local time.
pub fn export_stamp_now() -> String {
    export_stamp(&Local::now())
}

/// Shorten `s` to at most `max` characters, ending with `…` when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_chars("short", 10), "short");
/// assert_eq!(truncate_chars("abcdef", 4), "abc…");
/// ```
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory (and its parents) if needed, then creates and
/// removes a probe file.
///
/// # Errors
///
/// Returns the underlying I/O error if the directory cannot be created or
/// written to.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path).await?;

    let probe_path = path.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    if let Err(e) = stdfs::remove_file(&probe_path) {
        debug!(error = %e, "Could not remove write probe");
    }

    info!("Output directory is writable");
    Ok(())
}
