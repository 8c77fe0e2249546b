//! Console table of collected articles.

use crate::models::ArticleRecord;
use crate::utils::truncate_chars;

const TITLE: &str = "Latest News";
const COLUMNS: [(&str, usize); 4] = [
    ("Title", 48),
    ("Description", 56),
    ("Link", 40),
    ("Image", 40),
];

/// Render records as a fixed-width table, one row per record.
///
/// Cells wider than their column are cut and end with `…`.
pub fn render(records: &[ArticleRecord]) -> String {
    let rule = separator();
    let mut out = String::new();

    out.push_str(&format!("{TITLE} ({} articles)\n", records.len()));
    out.push_str(&rule);
    out.push_str(&row(COLUMNS.map(|(name, _)| name)));
    out.push_str(&rule);
    for record in records {
        out.push_str(&row([
            record.title.as_str(),
            record.description.as_str(),
            record.link.as_str(),
            record.image.as_str(),
        ]));
    }
    out.push_str(&rule);
    out
}

fn row(cells: [&str; 4]) -> String {
    let mut line = String::from("|");
    for (cell, (_, width)) in cells.iter().zip(COLUMNS) {
        let text = truncate_chars(cell, width);
        line.push_str(&format!(" {text:<width$} |"));
    }
    line.push('\n');
    line
}

fn separator() -> String {
    let mut line = String::from("+");
    for (_, width) in COLUMNS {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}
