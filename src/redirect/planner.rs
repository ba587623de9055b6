//! Request path rewriting

use crate::version::catalog::VersionCatalog;

/// Index of the version segment when an in-scope path is split on `/`
const VERSION_SEGMENT: usize = 2;

/// Outcome of planning a redirect for one request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// The request is out of scope, already served, or nothing can serve it
    NoRedirect,
    /// Serve the request from `path` instead
    Redirect { path: String },
}

/// Percent-encode a version name so it occupies exactly one path segment.
///
/// Bytes outside the RFC 3986 `pchar` set are escaped, as is `%` itself, so
/// `/`, `?`, `#` and spaces in a manifest entry cannot reach other parts of
/// the URL.
fn encode_segment(version: &str) -> String {
    let mut encoded = String::with_capacity(version.len());
    for byte in version.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'.'
            | b'_'
            | b'~'
            | b'!'
            | b'$'
            | b'&'
            | b'\''
            | b'('
            | b')'
            | b'*'
            | b'+'
            | b','
            | b';'
            | b'='
            | b':'
            | b'@' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

/// Whether `path` lives under `/<prefix>/`
pub fn is_in_scope(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_matches('/');
    let mut segments = path.split('/');
    segments.next() == Some("") && segments.next() == Some(prefix)
}

/// Decide whether `request_path` must move to another published version.
///
/// Only the version segment is replaced; every other segment, including empty
/// ones from trailing or doubled slashes, is kept as is.
pub fn plan_redirect(request_path: &str, catalog: &VersionCatalog, prefix: &str) -> RedirectDecision {
    if !is_in_scope(request_path, prefix) {
        return RedirectDecision::NoRedirect;
    }

    let mut segments: Vec<&str> = request_path.split('/').collect();

    let Some(requested) = segments
        .get(VERSION_SEGMENT)
        .copied()
        .filter(|segment| !segment.is_empty())
    else {
        return RedirectDecision::NoRedirect;
    };

    let Some(selected) = catalog.select_closest(requested) else {
        return RedirectDecision::NoRedirect;
    };

    let selected = encode_segment(selected);
    if selected == requested {
        return RedirectDecision::NoRedirect;
    }

    segments[VERSION_SEGMENT] = &selected;

    RedirectDecision::Redirect {
        path: segments.join("/"),
    }
}
