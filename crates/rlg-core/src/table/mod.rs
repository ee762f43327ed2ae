//! Tabular input: CSV and workbook files loaded into a uniform [`Table`].
//!
//! Cell values are normalized once at this boundary: trimmed, with empty and
//! case-insensitive `"nan"` cells mapped to `None`. Downstream code only ever
//! sees present-or-missing cells.

mod columns;
mod csv_file;
mod workbook;

pub use columns::{resolve_columns, ColumnError, ColumnMap, ColumnSpec};

use anyhow::Result;
use std::path::Path;

/// In-memory table: header names plus rows of optional cells.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Normalizes a raw cell value: trim, then treat empty and `"nan"` as missing.
pub(crate) fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Loads a table from `path`: `.csv` via the CSV reader, anything else as a
/// workbook. Workbook sheets carry no trusted header row, so the requested
/// source/target column names (when given) become the synthesized headers.
pub fn load_table(
    path: &Path,
    source_name: Option<&str>,
    target_name: Option<&str>,
) -> Result<Table> {
    let is_csv = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        csv_file::load_csv(path)
    } else {
        workbook::load_workbook(path, source_name, target_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_cell_trims() {
        assert_eq!(normalize_cell("  /a  ").as_deref(), Some("/a"));
    }

    #[test]
    fn normalize_cell_empty_is_missing() {
        assert_eq!(normalize_cell(""), None);
        assert_eq!(normalize_cell("   "), None);
    }

    #[test]
    fn normalize_cell_nan_is_missing() {
        assert_eq!(normalize_cell("nan"), None);
        assert_eq!(normalize_cell("NaN"), None);
        assert_eq!(normalize_cell(" NAN "), None);
    }

    #[test]
    fn normalize_cell_nan_must_match_whole_value() {
        assert_eq!(normalize_cell("nankai.edu").as_deref(), Some("nankai.edu"));
    }
}
