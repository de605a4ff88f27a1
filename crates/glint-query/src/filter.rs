//! Name filtering for member queries.

/// Matches member names against a query name.
///
/// An absent filter (callers pass `Option<&NameFilter>`) matches every
/// name. Case-insensitive matching is an ordinal, locale-invariant
/// character fold, not culture-sensitive casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    /// Exact, case-sensitive equality
    CaseSensitive(String),
    /// Ordinal case-insensitive equality; the needle is stored
    /// pre-folded
    CaseInsensitive(String),
}

impl NameFilter {
    /// Create a case-sensitive filter.
    pub fn case_sensitive(name: &str) -> Self {
        NameFilter::CaseSensitive(name.to_string())
    }

    /// Create a case-insensitive filter.
    pub fn case_insensitive(name: &str) -> Self {
        NameFilter::CaseInsensitive(fold(name))
    }

    /// Create a filter for the given case mode.
    pub fn new(name: &str, ignore_case: bool) -> Self {
        if ignore_case {
            Self::case_insensitive(name)
        } else {
            Self::case_sensitive(name)
        }
    }

    /// Whether `candidate` matches the filter.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            NameFilter::CaseSensitive(name) => name == candidate,
            NameFilter::CaseInsensitive(folded) => {
                candidate.chars().flat_map(char::to_lowercase).eq(folded.chars())
            }
        }
    }
}

fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_sensitive() {
        let filter = NameFilter::case_sensitive("Render");
        assert!(filter.matches("Render"));
        assert!(!filter.matches("render"));
        assert!(!filter.matches("Render2"));
    }

    #[test]
    fn test_case_insensitive() {
        let filter = NameFilter::case_insensitive("Render");
        assert!(filter.matches("Render"));
        assert!(filter.matches("render"));
        assert!(filter.matches("RENDER"));
        assert!(!filter.matches("Rende"));
    }

    #[test]
    fn test_case_insensitive_unicode_fold() {
        let filter = NameFilter::case_insensitive("änderung");
        assert!(filter.matches("ÄNDERUNG"));
        assert!(filter.matches("Änderung"));
    }

    #[test]
    fn test_new_selects_mode() {
        assert_eq!(
            NameFilter::new("x", false),
            NameFilter::case_sensitive("x")
        );
        assert_eq!(NameFilter::new("X", true), NameFilter::case_insensitive("X"));
    }
}
