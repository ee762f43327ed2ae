//! Hostname grouping key derivation.
//!
//! Redirect lines are grouped per origin host so that each web server gets
//! its own rule file. `www.` and bare variants of a domain share a group.

use url::Url;

/// Group key used when no hostname can be derived from a source URL.
pub const UNKNOWN_HOST: &str = "unknown";

/// Derives the grouping key for a parsed URL.
pub fn host_key(url: &Url) -> String {
    match url.host_str() {
        Some(host) => normalize_host(host),
        None => UNKNOWN_HOST.to_string(),
    }
}

/// ASCII-lowercases a hostname and strips one leading `www.`.
///
/// A host that is empty after stripping keys as [`UNKNOWN_HOST`].
pub fn normalize_host(host: &str) -> String {
    let lowered = host.to_ascii_lowercase();
    let stripped = lowered.strip_prefix("www.").unwrap_or(&lowered);
    if stripped.is_empty() {
        UNKNOWN_HOST.to_string()
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_www() {
        assert_eq!(normalize_host("WWW.Example.com"), "example.com");
        assert_eq!(normalize_host("example.com"), "example.com");
    }

    #[test]
    fn strips_only_one_leading_www() {
        assert_eq!(normalize_host("www.www.example.com"), "www.example.com");
        assert_eq!(normalize_host("shop.www.example.com"), "shop.www.example.com");
    }

    #[test]
    fn bare_www_is_unknown() {
        assert_eq!(normalize_host("www."), UNKNOWN_HOST);
    }

    #[test]
    fn host_key_from_parsed_url() {
        let url = Url::parse("http://WWW.Example.com/a").unwrap();
        assert_eq!(host_key(&url), "example.com");
    }
}
