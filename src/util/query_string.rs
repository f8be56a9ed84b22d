//! Query-string assembly for filter and sort navigation targets.
//!
//! Every control on the directory page is an `<a href>` whose target is the
//! directory path with the six selection params re-serialized in a fixed
//! order. Building the strings here keeps the components free of string
//! plumbing and makes the href shapes testable natively.

#[cfg(test)]
#[path = "query_string_test.rs"]
mod query_string_test;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode a query value per RFC 3986.
///
/// Unreserved characters pass through untouched; everything else becomes
/// `%XX` with uppercase hex. Spaces are `%20`, not `+`.
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(HEX_UPPER[usize::from(byte >> 4)] as char);
                out.push(HEX_UPPER[usize::from(byte & 0x0F)] as char);
            }
        }
    }
    out
}

/// Build `path?k=v&…` from the given pairs, skipping absent values.
///
/// Keys are fixed identifiers and are written verbatim; values are
/// percent-encoded. With no present values the bare path comes back, so
/// a cleared selection links to a clean URL.
pub fn href(path: &str, pairs: &[(&str, Option<&str>)]) -> String {
    let query: Vec<String> = pairs
        .iter()
        .filter_map(|(key, value)| value.map(|value| format!("{key}={}", percent_encode(value))))
        .collect();
    if query.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{}", query.join("&"))
    }
}
