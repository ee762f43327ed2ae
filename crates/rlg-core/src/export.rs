//! Per-host redirect list files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::transform::HostGroups;

/// One written host file: where it went and how many lines it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFileReport {
    pub host: String,
    pub path: PathBuf,
    pub lines: usize,
}

/// Writes one `<host>_<stem>.txt` per host group into `output_dir`, creating
/// the directory if needed. Lines keep insertion order; each ends with `\n`.
pub fn write_host_files(
    groups: &HostGroups,
    output_dir: &Path,
    input_stem: &str,
) -> Result<Vec<HostFileReport>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory: {}", output_dir.display()))?;

    let mut reports = Vec::with_capacity(groups.len());
    for (host, lines) in groups.iter() {
        let path = output_dir.join(format!("{host}_{input_stem}.txt"));
        let mut body = String::new();
        for line in lines {
            body.push_str(line);
            body.push('\n');
        }
        fs::write(&path, body).with_context(|| format!("write host file: {}", path.display()))?;
        tracing::info!("wrote {} entries to {}", lines.len(), path.display());
        reports.push(HostFileReport {
            host: host.to_string(),
            path,
            lines: lines.len(),
        });
    }

    Ok(reports)
}

/// File stem used in output names; `unnamed` when the path has none.
pub fn input_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_stem_drops_extension() {
        assert_eq!(input_stem(Path::new("/tmp/mappings.csv")), "mappings");
        assert_eq!(input_stem(Path::new("redirects.xlsx")), "redirects");
    }

    #[test]
    fn input_stem_without_extension() {
        assert_eq!(input_stem(Path::new("/tmp/mappings")), "mappings");
    }
}
