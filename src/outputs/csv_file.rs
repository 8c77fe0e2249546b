//! Comma-delimited export.
//!
//! Header row `title,description,link,image`, then one row per record in the
//! same column order. Quoting follows the usual rules: fields containing a
//! comma, quote or newline are wrapped in quotes and inner quotes doubled.

use crate::error::ExportError;
use crate::models::ArticleRecord;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Column names, in output order.
pub const HEADER: [&str; 4] = ["title", "description", "link", "image"];

/// Render all records as CSV bytes.
///
/// The header is always present, even for an empty slice.
pub fn render_csv(records: &[ArticleRecord]) -> Result<Vec<u8>, csv::Error> {
    // Header is written by hand so it survives an empty record list.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

/// Write `records` to `path` as UTF-8 CSV, replacing any existing file.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_csv(records: &[ArticleRecord], path: &Path) -> Result<(), ExportError> {
    let bytes = render_csv(records).map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    if let Err(source) = fs::write(path, bytes).await {
        error!(error = %source, "Failed to write CSV export");
        return Err(ExportError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    info!(count = records.len(), "Wrote CSV export");
    Ok(())
}
