//! Catalog path helpers.
//!
//! # Path Convention
//!
//! - Root: empty string `""`
//! - Nested: `"tech"`, `"tech/api"`
//! - No leading or trailing slashes

/// Path segment separator.
pub const SEPARATOR: char = '/';

/// Join a child segment onto a parent path with exactly one separator.
///
/// Root (empty) parents produce the bare child.
pub fn join(parent: &str, child: &str) -> String {
    let parent = parent.trim_end_matches(SEPARATOR);
    let child = child.trim_start_matches(SEPARATOR);

    if parent.is_empty() {
        child.to_string()
    } else if child.is_empty() {
        parent.to_string()
    } else {
        format!("{}{}{}", parent, SEPARATOR, child)
    }
}

/// Get the parent of a path.
///
/// Returns empty string for root or single-segment paths.
pub fn parent(path: &str) -> &str {
    match path.rsplit_once(SEPARATOR) {
        Some((parent, _)) => parent,
        None => "",
    }
}

/// Last segment of a path (empty for root).
pub fn file_name(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or("")
}

/// Non-empty segments of a path, paired with their cumulative prefix.
///
/// `"tech/api"` yields `[("tech", "tech"), ("api", "tech/api")]`.
pub fn prefixes(path: &str) -> Vec<(&str, String)> {
    let mut out = Vec::new();
    let mut acc = String::new();
    for segment in path.split(SEPARATOR).filter(|s| !s.is_empty()) {
        acc = join(&acc, segment);
        out.push((segment, acc.clone()));
    }
    out
}
