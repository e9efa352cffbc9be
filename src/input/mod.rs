//! Tabular input reading.
//!
//! The input file is comma-delimited with no header row: the first field is
//! the target (URL or `host:port`), the optional second field an override IP
//! address. Blank lines and `#` comment lines are skipped; everything else
//! becomes an [`Entry`], including rows that will fail validation later, so
//! each one is accounted for in the final count.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// One input row, immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The original line, kept for diagnostics on malformed rows.
    pub raw: String,
    /// First field: URL or `host:port` target, trimmed.
    pub target: String,
    /// Optional second field: override IP literal, trimmed; `None` when the
    /// field is absent or empty.
    pub ip_override: Option<String>,
}

/// Parses a single comma-delimited row into an [`Entry`].
///
/// Fields beyond the second are ignored. The caller is expected to have
/// skipped blank lines and comments; an all-whitespace line still yields an
/// entry (with an empty target) so the classifier can report it.
pub fn parse_row(line: &str) -> Entry {
    let mut fields = line.split(',');
    let target = fields.next().unwrap_or_default().trim().to_string();
    let ip_override = fields
        .next()
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string);
    Entry {
        raw: line.to_string(),
        target,
        ip_override,
    }
}

/// Reads all entries from a comma-delimited input file.
///
/// Blank lines and lines whose first non-whitespace character is `#` are
/// skipped; every other line becomes one [`Entry`] in input order.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be opened or read.
pub async fn read_entries(path: &Path) -> Result<Vec<Entry>, std::io::Error> {
    let file = File::open(path).await?;
    let mut lines = BufReader::new(file).lines();

    let mut entries = Vec::new();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        entries.push(parse_row(&line));
    }
    Ok(entries)
}
