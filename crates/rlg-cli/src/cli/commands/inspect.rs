//! `rlg inspect <input>` – dry run: resolved columns and per-host counts.

use anyhow::Result;
use rlg_core::config::RlgConfig;
use rlg_core::table::{self, ColumnSpec};
use rlg_core::transform;
use std::path::Path;

pub fn run_inspect(cfg: &RlgConfig, input: &Path, spec: ColumnSpec) -> Result<()> {
    let table = table::load_table(input, spec.source.as_deref(), spec.target.as_deref())?;
    let columns = table::resolve_columns(&table, &spec)?;

    let name = |idx: usize| table.headers.get(idx).cloned().unwrap_or_default();
    let status = columns
        .status
        .map(|idx| format!("'{}'", name(idx)))
        .unwrap_or_else(|| "none".to_string());
    println!(
        "Using columns -> source: '{}', target: '{}', status: {}",
        name(columns.source),
        name(columns.target),
        status
    );

    let groups = transform::group_rows(&table, &columns, &cfg.default_scheme);
    if groups.is_empty() {
        println!("No convertible rows.");
    } else {
        println!("{:<40} {}", "HOST", "LINES");
        for (host, lines) in groups.iter() {
            println!("{:<40} {}", host, lines.len());
        }
    }
    if groups.skipped() > 0 {
        println!(
            "Skipped {} row(s) with missing source or target",
            groups.skipped()
        );
    }
    Ok(())
}
