//! Row transformation and host grouping.
//!
//! Turns table rows into redirect rule lines (`<source-path> <target-url>
//! [status]`) and groups them by source hostname, preserving first-seen order
//! per host.

use indexmap::IndexMap;
use url::Url;

use crate::encode::{encode_path, encode_request_line};
use crate::host::{self, UNKNOWN_HOST};
use crate::table::{ColumnMap, Table};

/// Redirect lines grouped by hostname, insertion order preserved.
#[derive(Debug, Default)]
pub struct HostGroups {
    groups: IndexMap<String, Vec<String>>,
    skipped: usize,
}

impl HostGroups {
    /// Iterates groups in first-seen order; lines keep table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(host, lines)| (host.as_str(), lines.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Rows dropped for a missing source or target.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn lines(&self, host: &str) -> Option<&[String]> {
        self.groups.get(host).map(|lines| lines.as_slice())
    }

    fn push(&mut self, host: String, line: String) {
        self.groups.entry(host).or_default().push(line);
    }
}

/// Prepends `<scheme>://` when the string carries no scheme separator.
pub fn ensure_scheme(s: &str, default_scheme: &str) -> String {
    if s.contains("://") {
        s.to_string()
    } else {
        format!("{default_scheme}://{s}")
    }
}

/// Transforms every table row and groups the resulting lines by hostname.
///
/// Rows with a missing source or target are skipped and logged; everything
/// else yields exactly one line, appended to its host group in table order.
pub fn group_rows(table: &Table, columns: &ColumnMap, default_scheme: &str) -> HostGroups {
    let mut groups = HostGroups::default();

    for (idx, row) in table.rows.iter().enumerate() {
        let source = row.get(columns.source).and_then(|c| c.as_deref());
        let target = row.get(columns.target).and_then(|c| c.as_deref());
        let (source, target) = match (source, target) {
            (Some(s), Some(t)) => (s, t),
            _ => {
                tracing::warn!("skipping row {}: missing source or target", idx + 1);
                groups.skipped += 1;
                continue;
            }
        };

        let (hostname, request) = source_parts(source, default_scheme);
        let target_url = encode_target(target, default_scheme);

        let mut line = format!("{request} {target_url}");
        if let Some(status_idx) = columns.status {
            if let Some(status) = row.get(status_idx).and_then(|c| c.as_deref()) {
                check_status(status, idx + 1);
                line.push(' ');
                line.push_str(status);
            }
        }

        tracing::debug!("row {}: host={hostname} path={request}", idx + 1);
        groups.push(hostname, line);
    }

    groups
}

/// Builds the grouping key and the encoded request line for a source URL.
fn source_parts(source: &str, default_scheme: &str) -> (String, String) {
    let absolute = ensure_scheme(source, default_scheme);
    match Url::parse(&absolute) {
        Ok(url) => {
            let mut request = String::from(url.path());
            if request.is_empty() {
                request.push('/');
            }
            if let Some(query) = url.query().filter(|q| !q.is_empty()) {
                request.push('?');
                request.push_str(query);
            }
            if let Some(fragment) = url.fragment().filter(|f| !f.is_empty()) {
                request.push('#');
                request.push_str(fragment);
            }
            (host::host_key(&url), encode_request_line(&request))
        }
        Err(err) => {
            // Strings the parser rejects (e.g. spaces in the authority) are
            // still emitted, under the unknown-host group.
            tracing::debug!("source fell back to syntactic split: {absolute}: {err}");
            let raw = split_raw(&absolute);
            let mut request =
                String::from(if raw.path.is_empty() { "/" } else { raw.path });
            if !raw.query.is_empty() {
                request.push('?');
                request.push_str(raw.query);
            }
            if !raw.fragment.is_empty() {
                request.push('#');
                request.push_str(raw.fragment);
            }
            (UNKNOWN_HOST.to_string(), encode_request_line(&request))
        }
    }
}

/// Rebuilds the target as a full URL with encoded path, query and fragment.
/// The authority and any `;params` of the last path segment pass through
/// unencoded; empty query and fragment are omitted entirely.
fn encode_target(target: &str, default_scheme: &str) -> String {
    let absolute = ensure_scheme(target, default_scheme);
    match Url::parse(&absolute) {
        Ok(url) => assemble_target(
            url.scheme(),
            url.authority(),
            url.path(),
            url.query().unwrap_or(""),
            url.fragment().unwrap_or(""),
        ),
        Err(err) => {
            tracing::debug!("target fell back to syntactic split: {absolute}: {err}");
            let raw = split_raw(&absolute);
            assemble_target(raw.scheme, raw.authority, raw.path, raw.query, raw.fragment)
        }
    }
}

fn assemble_target(
    scheme: &str,
    authority: &str,
    path: &str,
    query: &str,
    fragment: &str,
) -> String {
    let (path, params) = split_path_params(path);
    let mut out = format!("{}://{}{}", scheme, authority, encode_path(path));
    if !params.is_empty() {
        out.push(';');
        out.push_str(params);
    }
    if !query.is_empty() {
        out.push('?');
        out.push_str(&encode_request_line(query));
    }
    if !fragment.is_empty() {
        out.push('#');
        out.push_str(&encode_request_line(fragment));
    }
    out
}

/// Splits `;params` off the last path segment; earlier segments keep theirs.
fn split_path_params(path: &str) -> (&str, &str) {
    let last_segment = path.rfind('/').map_or(0, |i| i + 1);
    match path[last_segment..].find(';') {
        Some(i) => {
            let at = last_segment + i;
            (&path[..at], &path[at + 1..])
        }
        None => (path, ""),
    }
}

/// Syntactic URL components for strings the parser rejects.
struct RawComponents<'a> {
    scheme: &'a str,
    authority: &'a str,
    path: &'a str,
    query: &'a str,
    fragment: &'a str,
}

fn split_raw(url: &str) -> RawComponents<'_> {
    let (scheme, rest) = match url.find("://") {
        Some(i) => (&url[..i], &url[i + 3..]),
        None => ("http", url),
    };
    let (rest, fragment) = match rest.find('#') {
        Some(i) => (&rest[..i], &rest[i + 1..]),
        None => (rest, ""),
    };
    let (rest, query) = match rest.find('?') {
        Some(i) => (&rest[..i], &rest[i + 1..]),
        None => (rest, ""),
    };
    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    RawComponents {
        scheme,
        authority,
        path,
        query,
        fragment,
    }
}

/// Redirect rules normally carry a 3xx status; anything else is passed
/// through verbatim with a warning.
fn check_status(status: &str, row: usize) {
    match status.parse::<u16>() {
        Ok(code) if (300..400).contains(&code) => {}
        _ => tracing::warn!("row {row}: status '{status}' is not a 3xx code"),
    }
}
