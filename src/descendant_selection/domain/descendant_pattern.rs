use regex::Regex;

/// Compiled `node_modules` path pattern covering a set of packages
#[derive(Debug, Clone)]
pub struct DescendantPattern {
    regex: Regex,
    names: Vec<String>,
}

impl DescendantPattern {
    pub fn new(regex: Regex, names: Vec<String>) -> Self {
        Self { regex, names }
    }

    /// True when no package contributed an alternative; such a pattern never matches.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Bare package names, one per alternative
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn into_regex(self) -> Regex {
        self.regex
    }
}

impl std::fmt::Display for DescendantPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.regex.as_str())
    }
}
