//! CSV loading: first record is the header row, the rest are data rows.

use anyhow::{Context, Result};
use std::path::Path;

use super::{normalize_cell, Table};

/// Reads a CSV file into a [`Table`].
///
/// Records shorter than the header row are padded with missing cells; extra
/// trailing cells are dropped.
pub(super) fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read CSV file: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read CSV header row: {}", path.display()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("read CSV record {} of {}", idx + 2, path.display()))?;
        let mut cells: Vec<Option<String>> = record.iter().map(normalize_cell).collect();
        cells.resize(headers.len(), None);
        rows.push(cells);
    }

    tracing::debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(Table { headers, rows })
}
