//! Output generation: text and CSV exports plus the console table.
//!
//! # Submodules
//!
//! - [`text`]: labeled, human-readable text export
//! - [`csv_file`]: comma-delimited export with a header row
//! - [`console`]: fixed-width table printed after each collection
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── one_time/
//! │   ├── datanews.txt
//! │   └── datanews.csv
//! └── loop/
//!     ├── txt/datanews_2025-05-06_14-30.txt
//!     └── csv/datanews_2025-05-06_14-30.csv
//! ```

pub mod console;
pub mod csv_file;
pub mod text;

use crate::utils::ensure_writable_dir;
use std::io;
use std::path::{Path, PathBuf};

const EXPORT_STEM: &str = "datanews";

/// Where exports are written, relative to a root output directory.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create every export directory and check that each one is writable.
    pub async fn prepare(&self) -> io::Result<()> {
        for dir in [self.one_time_dir(), self.loop_dir("txt"), self.loop_dir("csv")] {
            ensure_writable_dir(&dir).await?;
        }
        Ok(())
    }

    pub fn one_time_text(&self) -> PathBuf {
        self.one_time_dir().join(format!("{EXPORT_STEM}.txt"))
    }

    pub fn one_time_csv(&self) -> PathBuf {
        self.one_time_dir().join(format!("{EXPORT_STEM}.csv"))
    }

    /// Text export for the loop cycle identified by `stamp`.
    pub fn loop_text(&self, stamp: &str) -> PathBuf {
        self.loop_dir("txt").join(format!("{EXPORT_STEM}_{stamp}.txt"))
    }

    /// CSV export for the loop cycle identified by `stamp`.
    pub fn loop_csv(&self, stamp: &str) -> PathBuf {
        self.loop_dir("csv").join(format!("{EXPORT_STEM}_{stamp}.csv"))
    }

    fn one_time_dir(&self) -> PathBuf {
        self.root.join("one_time")
    }

    fn loop_dir(&self, kind: &str) -> PathBuf {
        self.root.join("loop").join(kind)
    }
}
