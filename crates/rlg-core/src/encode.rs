//! Percent-encoding for redirect rule components.
//!
//! Two safe sets: request lines keep URL structure characters (`/ ? = & # +`)
//! raw, target paths keep only `/`. Both keep `%` raw, so a pass over input
//! that is already percent-encoded is a no-op.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Escape everything except unreserved characters (ALPHA / DIGIT / `-._~`).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Request-line set: `/ ? = & # + %` stay raw.
const REQUEST_LINE: &AsciiSet = &COMPONENT
    .remove(b'/')
    .remove(b'?')
    .remove(b'=')
    .remove(b'&')
    .remove(b'#')
    .remove(b'+')
    .remove(b'%');

/// Path-only set: `/` and `%` stay raw.
const PATH_ONLY: &AsciiSet = &COMPONENT.remove(b'/').remove(b'%');

/// Encodes a source request line (path with optional `?query` and `#fragment`).
///
/// The input is trimmed first; a literal space always becomes `%20`.
pub fn encode_request_line(s: &str) -> String {
    utf8_percent_encode(s.trim(), REQUEST_LINE).to_string()
}

/// Encodes a target URL path, escaping everything but `/`, `%` and unreserved.
pub fn encode_path(s: &str) -> String {
    utf8_percent_encode(s.trim(), PATH_ONLY).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_becomes_percent_20() {
        assert_eq!(encode_request_line("/a b"), "/a%20b");
        assert_eq!(encode_path("/a b"), "/a%20b");
    }

    #[test]
    fn structure_characters_stay_raw_in_request_lines() {
        assert_eq!(
            encode_request_line("/p?x=1&y=2+3#frag"),
            "/p?x=1&y=2+3#frag"
        );
    }

    #[test]
    fn path_only_escapes_structure_characters() {
        assert_eq!(encode_path("/p?x=1&y=2+3"), "/p%3Fx%3D1%26y%3D2%2B3");
    }

    #[test]
    fn encoding_is_idempotent() {
        assert_eq!(encode_request_line("/a%20b"), "/a%20b");
        assert_eq!(encode_path("/a%20b"), "/a%20b");
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(encode_request_line("  /a  "), "/a");
    }

    #[test]
    fn non_ascii_is_utf8_percent_encoded() {
        assert_eq!(encode_request_line("/中"), "/%E4%B8%AD");
    }
}
