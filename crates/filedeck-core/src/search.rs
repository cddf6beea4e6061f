//! Case-insensitive substring search over names and descriptions.

/// A search term, lowercased once at construction.
///
/// An empty term matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    needle: String,
}

impl SearchTerm {
    pub fn new(term: impl Into<String>) -> Self {
        let raw = term.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The term as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check whether `name` or `description` contains the term.
    pub fn matches(&self, name: &str, description: &str) -> bool {
        self.is_empty()
            || name.to_lowercase().contains(&self.needle)
            || description.to_lowercase().contains(&self.needle)
    }
}

impl From<String> for SearchTerm {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for SearchTerm {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_matches_everything() {
        let term = SearchTerm::default();
        assert!(term.matches("anything", ""));
        assert!(term.matches("", ""));
    }

    #[test]
    fn test_case_insensitive() {
        let term = SearchTerm::new("API");
        assert!(term.matches("REST api docs.pdf", ""));
        assert!(SearchTerm::new("rest").matches("REST API.pdf", ""));
    }

    #[test]
    fn test_matches_description_only() {
        let term = SearchTerm::new("guide");
        assert!(term.matches("install.pdf", "Installation Guide"));
        assert!(!term.matches("install.pdf", "Setup notes"));
    }

    #[test]
    fn test_non_ascii() {
        let term = SearchTerm::new("指南");
        assert!(term.matches("安装指南.pdf", ""));
        assert!(!term.matches("开发规范.pdf", "编码规范"));
    }

    #[test]
    fn test_keeps_raw_text() {
        let term = SearchTerm::new("MiXeD");
        assert_eq!(term.as_str(), "MiXeD");
    }
}
