//! Column resolution: explicit names validated against headers, positional
//! fallback otherwise. Runs once, before row iteration begins.

use thiserror::Error;

use super::Table;

/// Requested column names; any may be left to the positional fallback.
#[derive(Debug, Clone, Default)]
pub struct ColumnSpec {
    pub source: Option<String>,
    pub target: Option<String>,
    pub status: Option<String>,
}

/// Fixed column indices produced by [`resolve_columns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub source: usize,
    pub target: usize,
    pub status: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ColumnError {
    #[error("column '{0}' not found in input file")]
    Missing(String),

    #[error("input file has {0} column(s), need at least 2")]
    TooFew(usize),
}

/// Resolves requested column names against the table headers.
///
/// Explicit names must exist. Without explicit names the first column is the
/// source and the second the target; a third column becomes the status when
/// none was named.
pub fn resolve_columns(table: &Table, spec: &ColumnSpec) -> Result<ColumnMap, ColumnError> {
    let find = |name: &str| {
        table
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ColumnError::Missing(name.to_string()))
    };

    if table.headers.len() < 2 {
        return Err(ColumnError::TooFew(table.headers.len()));
    }

    let source = match &spec.source {
        Some(name) => find(name)?,
        None => 0,
    };
    let target = match &spec.target {
        Some(name) => find(name)?,
        None => 1,
    };
    let status = match &spec.status {
        Some(name) => Some(find(name)?),
        None if table.headers.len() > 2 => Some(2),
        None => None,
    };

    Ok(ColumnMap {
        source,
        target,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str]) -> Table {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    #[test]
    fn positional_fallback_two_columns() {
        let map = resolve_columns(&table(&["a", "b"]), &ColumnSpec::default()).unwrap();
        assert_eq!(
            map,
            ColumnMap {
                source: 0,
                target: 1,
                status: None
            }
        );
    }

    #[test]
    fn positional_fallback_uses_third_column_as_status() {
        let map = resolve_columns(&table(&["a", "b", "c"]), &ColumnSpec::default()).unwrap();
        assert_eq!(map.status, Some(2));
    }

    #[test]
    fn explicit_names_are_looked_up() {
        let spec = ColumnSpec {
            source: Some("Source URLs".into()),
            target: Some("Target URLs".into()),
            status: Some("Status".into()),
        };
        let map = resolve_columns(&table(&["Status", "Source URLs", "Target URLs"]), &spec).unwrap();
        assert_eq!(
            map,
            ColumnMap {
                source: 1,
                target: 2,
                status: Some(0)
            }
        );
    }

    #[test]
    fn explicit_missing_name_fails() {
        let spec = ColumnSpec {
            source: Some("missing".into()),
            ..Default::default()
        };
        let err = resolve_columns(&table(&["a", "b"]), &spec).unwrap_err();
        assert!(matches!(err, ColumnError::Missing(name) if name == "missing"));
    }

    #[test]
    fn explicit_missing_status_fails() {
        let spec = ColumnSpec {
            status: Some("Status".into()),
            ..Default::default()
        };
        assert!(resolve_columns(&table(&["a", "b"]), &spec).is_err());
    }

    #[test]
    fn single_column_table_fails() {
        let err = resolve_columns(&table(&["only"]), &ColumnSpec::default()).unwrap_err();
        assert!(matches!(err, ColumnError::TooFew(1)));
    }
}
