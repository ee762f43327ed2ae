//! `rlg convert <input> <output_dir>` – write per-host redirect lists.

use anyhow::Result;
use rlg_core::config::RlgConfig;
use rlg_core::export;
use rlg_core::table::{self, ColumnSpec};
use rlg_core::transform;
use std::path::Path;

pub fn run_convert(
    cfg: &RlgConfig,
    input: &Path,
    output_dir: &Path,
    spec: ColumnSpec,
) -> Result<()> {
    let table = table::load_table(input, spec.source.as_deref(), spec.target.as_deref())?;
    println!("Loaded {} rows from {}", table.rows.len(), input.display());

    let columns = table::resolve_columns(&table, &spec)?;
    let groups = transform::group_rows(&table, &columns, &cfg.default_scheme);

    let reports = export::write_host_files(&groups, output_dir, &export::input_stem(input))?;
    for report in &reports {
        println!("Wrote {} entries to {}", report.lines, report.path.display());
    }
    if groups.skipped() > 0 {
        println!(
            "Skipped {} row(s) with missing source or target",
            groups.skipped()
        );
    }
    Ok(())
}
