//! Breadcrumb trail for a catalog path.

use serde::Serialize;

use crate::path;

/// Label of the root crumb.
pub const ROOT_LABEL: &str = "Home";

/// One clickable step of the breadcrumb.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Segment text (folder id), or [`ROOT_LABEL`] for the root
    pub label: String,
    /// Cumulative path this crumb navigates to
    pub path: String,
}

impl Crumb {
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// Build the breadcrumb for `current`.
///
/// Always starts with the root crumb; each following crumb carries the
/// prefix of `current` up to and including its segment. Empty segments are
/// skipped.
pub fn breadcrumb(current: &str) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: ROOT_LABEL.to_string(),
        path: String::new(),
    }];

    crumbs.extend(path::prefixes(current).into_iter().map(|(segment, prefix)| Crumb {
        label: segment.to_string(),
        path: prefix,
    }));

    crumbs
}
