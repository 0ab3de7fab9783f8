//! RFC 6901 JSON Pointer formatting and parsing.
//!
//! A pointer renders a property path as a single string token: each segment
//! prefixed with `/`, with `~` escaped to `~0` and `/` escaped to `~1`
//! inside a segment. The empty pointer denotes the empty path.

use thiserror::Error;

/// Errors produced when decoding a pointer token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    /// A non-empty pointer must start with `/`.
    #[error("missing token prefix")]
    MissingTokenPrefix,
}

/// Escape one path segment for embedding in a pointer token.
pub fn escape_segment(segment: &str) -> String {
    if !segment.contains('~') && !segment.contains('/') {
        return segment.to_string();
    }
    segment.replace('~', "~0").replace('/', "~1")
}

/// Unescape one pointer token segment. `~1` must be decoded before `~0` so
/// that `~01` yields a literal `~1` rather than a separator.
pub fn unescape_segment(segment: &str) -> String {
    if !segment.contains('~') {
        return segment.to_string();
    }
    segment.replace("~1", "/").replace("~0", "~")
}

/// Format a path as an RFC 6901 pointer token.
///
/// # Examples
///
/// ```
/// assert_eq!(jera_pointer::format(&[]), "");
/// assert_eq!(
///     jera_pointer::format(&["a/b".to_string(), "~k".to_string()]),
///     "/a~1b/~0k"
/// );
/// ```
pub fn format(path: &[String]) -> String {
    let mut token = String::new();
    for segment in path {
        token.push('/');
        token.push_str(&escape_segment(segment));
    }
    token
}

/// Parse an RFC 6901 pointer token into its path segments.
///
/// The empty token parses to the empty path. Any other token must start
/// with `/`, otherwise [`PointerError::MissingTokenPrefix`] is returned.
pub fn parse(pointer: &str) -> Result<Vec<String>, PointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let rest = pointer
        .strip_prefix('/')
        .ok_or(PointerError::MissingTokenPrefix)?;
    Ok(rest.split('/').map(unescape_segment).collect())
}
