//! Case-insensitive substring matching over names.

/// Matches names containing a fragment, ignoring case.
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    fragment: String,
}

impl SubstringMatcher {
    /// Creates a matcher for `fragment`. An empty fragment matches everything.
    pub fn new(fragment: &str) -> Self {
        Self { fragment: fragment.to_lowercase() }
    }

    /// Returns true if `name` contains the fragment.
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.fragment)
    }

    /// Filters `names`, keeping their order.
    pub fn filter<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        names.into_iter().filter(|name| self.matches(name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let matcher = SubstringMatcher::new("gin");
        assert!(matcher.matches("Ginger"));
        assert!(matcher.matches("ORGANIC GINGER"));
        assert!(!matcher.matches("Cherry"));

        let matcher = SubstringMatcher::new("CHERRY");
        assert!(matcher.matches("Organic Cherry"));
    }

    #[test]
    fn test_empty_fragment_matches_all() {
        let matcher = SubstringMatcher::new("");
        assert!(matcher.matches(""));
        assert!(matcher.matches("anything"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let names = ["Organic Cherry", "Ginger", "Black Cherry", "Kale"];
        let matcher = SubstringMatcher::new("cherry");

        assert_eq!(matcher.filter(names), vec!["Organic Cherry", "Black Cherry"]);
    }

    #[test]
    fn test_fragment_with_symbols() {
        let matcher = SubstringMatcher::new("+ cher");
        assert!(matcher.matches("Acai + Cherry"));
        assert!(!matcher.matches("Acai Cherry"));
    }
}
