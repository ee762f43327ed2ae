//! Workbook loading: every sheet contributes its first two columns.

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use super::{normalize_cell, Table};

/// Reads every sheet of a workbook into a two-column [`Table`], skipping the
/// first row of each sheet as a header.
///
/// The headers are synthesized from the requested column names so that
/// explicit column selection still resolves against workbook input. Workbook
/// tables never carry a status column.
pub(super) fn load_workbook(
    path: &Path,
    source_name: Option<&str>,
    target_name: Option<&str>,
) -> Result<Table> {
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("open workbook: {}", path.display()))?;

    let mut rows = Vec::new();
    let sheets = workbook.sheet_names().to_owned();
    for sheet in sheets {
        let range = workbook
            .worksheet_range(&sheet)
            .with_context(|| format!("read sheet '{}' of {}", sheet, path.display()))?;
        let before = rows.len();
        for row in range.rows().skip(1) {
            rows.push(vec![cell_text(row.first()), cell_text(row.get(1))]);
        }
        tracing::debug!("sheet '{}': {} data rows", sheet, rows.len() - before);
    }

    Ok(Table {
        headers: vec![
            source_name.unwrap_or("source").to_string(),
            target_name.unwrap_or("target").to_string(),
        ],
        rows,
    })
}

/// Renders a workbook cell as text; empty and error cells are missing.
/// Integral floats render without a fractional part.
fn cell_text(cell: Option<&Data>) -> Option<String> {
    match cell? {
        Data::Empty | Data::Error(_) => None,
        other => normalize_cell(&other.to_string()),
    }
}
