//! Human-readable text export.
//!
//! One block per record, four labeled lines and a blank separator:
//!
//! ```text
//! Title: ...
//! Description: ...
//! Link: ...
//! Image: ...
//!
//! ```

use crate::error::ExportError;
use crate::models::ArticleRecord;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Render all records into the text export format.
pub fn render_text(records: &[ArticleRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!("Title: {}\n", record.title));
        out.push_str(&format!("Description: {}\n", record.description));
        out.push_str(&format!("Link: {}\n", record.link));
        out.push_str(&format!("Image: {}\n\n", record.image));
    }
    out
}

/// Write `records` to `path` as UTF-8 text, replacing any existing file.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_text(records: &[ArticleRecord], path: &Path) -> Result<(), ExportError> {
    let body = render_text(records);

    if let Err(source) = fs::write(path, body).await {
        error!(error = %source, "Failed to write text export");
        return Err(ExportError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    info!(count = records.len(), "Wrote text export");
    Ok(())
}
