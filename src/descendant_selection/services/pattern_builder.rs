use crate::descendant_selection::domain::{DescendantPattern, PackageKey};
use crate::shared::error::DescendantError;
use crate::shared::Result;
use regex::Regex;
use std::collections::HashSet;

/// Matches a `node_modules` directory followed by either path separator
const NODE_MODULES_PREFIX: &str = r"node_modules[\\/]";

/// Accepts either separator inside scoped names (`@scope/pkg`, `@scope\pkg`)
const SEPARATOR: &str = r"[\\/]";

/// Empty character class; never matches in Rust or JavaScript regex syntax
const NEVER_MATCHES: &str = r"[^\s\S]";

/// Characters that are special outside a class in both Rust and JavaScript
const METACHARACTERS: &[char] = &[
    '\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$',
];

/// PatternBuilder service turning collected keys into one `node_modules` pattern
pub struct PatternBuilder;

impl PatternBuilder {
    /// Builds the pattern `node_modules[\\/](?:name1|name2|...)`
    ///
    /// Names are the bare package names of `keys`, deduplicated in first-seen
    /// order. An empty `keys` slice yields a pattern that never matches.
    pub fn build(keys: &[PackageKey]) -> Result<DescendantPattern> {
        let names = Self::bare_names(keys);

        let alternation = if names.is_empty() {
            NEVER_MATCHES.to_string()
        } else {
            names
                .iter()
                .map(|name| Self::alternative(name))
                .collect::<Vec<_>>()
                .join("|")
        };

        let source = format!("{}(?:{})", NODE_MODULES_PREFIX, alternation);
        let regex = Regex::new(&source).map_err(|e| DescendantError::InvalidPattern {
            pattern: source.clone(),
            details: e.to_string(),
        })?;

        Ok(DescendantPattern::new(regex, names))
    }

    /// Bare package names of `keys`, without duplicates
    pub fn bare_names(keys: &[PackageKey]) -> Vec<String> {
        let mut seen = HashSet::new();
        keys.iter()
            .map(PackageKey::bare_name)
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }

    /// Regex alternative for one name; `/` may be written as either separator
    fn alternative(name: &str) -> String {
        name.split('/')
            .map(escape)
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

/// Escapes only what both Rust and JavaScript treat as special.
///
/// `regex::escape` also escapes `-`, which JavaScript rejects under the `u` flag.
fn escape(segment: &str) -> String {
    let mut escaped = String::with_capacity(segment.len());
    for c in segment.chars() {
        if METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(keys: &[&str]) -> Vec<PackageKey> {
        keys.iter()
            .map(|k| PackageKey::new(k.to_string()).unwrap())
            .collect()
    }

    #[test]
    fn test_build_matches_collected_packages() {
        let pattern = PatternBuilder::build(&keys(&["foo@1.0.0", "bar@2.0.0"])).unwrap();

        assert!(pattern.is_match("node_modules/foo"));
        assert!(pattern.is_match("node_modules/bar"));
        assert!(pattern.is_match(r"C:\app\node_modules\bar\index.js"));
        assert!(!pattern.is_match("node_modules/baz"));
        assert!(!pattern.is_match("src/foo"));
        assert_eq!(pattern.as_str(), r"node_modules[\\/](?:foo|bar)");
    }

    #[test]
    fn test_build_scoped_package_either_separator() {
        let pattern = PatternBuilder::build(&keys(&["@scope/pkg@1.0.0"])).unwrap();

        assert!(pattern.is_match("node_modules/@scope/pkg"));
        assert!(pattern.is_match(r"node_modules\@scope\pkg"));
        assert!(!pattern.is_match("node_modules/@scope/other"));
        assert_eq!(pattern.names(), &["@scope/pkg".to_string()]);
    }

    #[test]
    fn test_build_escapes_regex_metacharacters() {
        let pattern = PatternBuilder::build(&keys(&["lodash.merge@4.6.2"])).unwrap();

        assert!(pattern.is_match("node_modules/lodash.merge/index.js"));
        assert!(!pattern.is_match("node_modules/lodashXmerge/index.js"));
        assert_eq!(pattern.as_str(), r"node_modules[\\/](?:lodash\.merge)");
    }

    #[test]
    fn test_build_keeps_hyphens_unescaped() {
        let pattern =
            PatternBuilder::build(&keys(&["loose-envify@1.4.0", "js-tokens@4.0.0"])).unwrap();

        assert_eq!(
            pattern.as_str(),
            r"node_modules[\\/](?:loose-envify|js-tokens)"
        );
        assert!(pattern.is_match("node_modules/loose-envify/index.js"));
    }

    #[test]
    fn test_escape_metacharacters_only() {
        assert_eq!(escape("a-b_c~d!e"), "a-b_c~d!e");
        assert_eq!(escape("a.b+c*"), r"a\.b\+c\*");
        assert_eq!(escape("(x)|[y]{z}^$?"), r"\(x\)\|\[y\]\{z\}\^\$\?");
        assert_eq!(escape(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_build_deduplicates_names_across_versions() {
        let pattern =
            PatternBuilder::build(&keys(&["foo@1.0.0", "bar@2.0.0", "foo@2.0.0"])).unwrap();
        assert_eq!(pattern.names(), &["foo".to_string(), "bar".to_string()]);
        assert_eq!(pattern.as_str(), r"node_modules[\\/](?:foo|bar)");
    }

    #[test]
    fn test_build_strips_peer_suffix() {
        let pattern =
            PatternBuilder::build(&keys(&["react-dom@18.2.0(react@18.2.0)"])).unwrap();
        assert_eq!(pattern.names(), &["react-dom".to_string()]);
        assert!(pattern.is_match("node_modules/react-dom/client.js"));
    }

    #[test]
    fn test_build_empty_never_matches() {
        let pattern = PatternBuilder::build(&[]).unwrap();

        assert!(pattern.is_empty());
        assert_eq!(pattern.as_str(), r"node_modules[\\/](?:[^\s\S])");
        assert!(!pattern.is_match("node_modules/"));
        assert!(!pattern.is_match("node_modules/anything"));
    }
}
