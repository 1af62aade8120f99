use crate::shared::Result;

/// Maximum length for package keys (security limit)
///
/// pnpm appends peer-dependency suffixes to keys, so this is generous.
const MAX_PACKAGE_KEY_LENGTH: usize = 4096;

/// NewType wrapper for a lockfile package key with validation
///
/// A key is a package name followed by `@` and a version or resolution
/// descriptor, optionally followed by pnpm's peer suffix:
/// `react-dom@18.2.0(react@18.2.0)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageKey(String);

impl PackageKey {
    pub fn new(key: String) -> Result<Self> {
        if key.is_empty() {
            anyhow::bail!("Package key cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if key.len() > MAX_PACKAGE_KEY_LENGTH {
            anyhow::bail!(
                "Package key is too long ({} bytes). Maximum allowed: {} bytes",
                key.len(),
                MAX_PACKAGE_KEY_LENGTH
            );
        }

        if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!(
                "Package key '{}' contains whitespace or control characters",
                key.escape_debug()
            );
        }

        Ok(Self(key))
    }

    /// Key of a declared dependency: `name@version`
    pub fn for_dependency(name: &str, version: &str) -> Result<Self> {
        Self::new(format!("{}@{}", name, version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Package name without the version suffix.
    ///
    /// The name is the leading run of characters up to the first `@` that is
    /// not a scope marker: `@scope/pkg@1.0.0` becomes `@scope/pkg`.
    pub fn bare_name(&self) -> &str {
        let start = usize::from(self.0.starts_with('@'));
        match self.0[start..].find('@') {
            Some(offset) => &self.0[..start + offset],
            None => &self.0,
        }
    }

    /// Whether this key is one of the keys `name` may refer to.
    ///
    /// `name` matches when the key begins with `name@`. A version-qualified
    /// name additionally matches the peer-suffixed variants `name(...)`.
    pub fn is_candidate_for(&self, name: &str) -> bool {
        let Some(rest) = self.0.strip_prefix(name) else {
            return false;
        };
        rest.starts_with('@') || (rest.starts_with('(') && has_version_qualifier(name))
    }
}

/// Whether `name` already carries a `@version` suffix
fn has_version_qualifier(name: &str) -> bool {
    let start = usize::from(name.starts_with('@'));
    name[start..].contains('@')
}

impl std::fmt::Display for PackageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PackageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for PackageKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> PackageKey {
        PackageKey::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_package_key_new_valid() {
        assert_eq!(key("foo@1.0.0").as_str(), "foo@1.0.0");
    }

    #[test]
    fn test_package_key_new_empty() {
        assert!(PackageKey::new(String::new()).is_err());
    }

    #[test]
    fn test_package_key_rejects_whitespace() {
        assert!(PackageKey::new("foo @1.0.0".to_string()).is_err());
        assert!(PackageKey::new("foo@1.0.0\n".to_string()).is_err());
    }

    #[test]
    fn test_package_key_too_long() {
        let long = format!("a@{}", "1".repeat(MAX_PACKAGE_KEY_LENGTH));
        assert!(PackageKey::new(long).is_err());
    }

    #[test]
    fn test_for_dependency() {
        let dep = PackageKey::for_dependency("bar", "2.0.0").unwrap();
        assert_eq!(dep.as_str(), "bar@2.0.0");
    }

    #[test]
    fn test_bare_name_plain() {
        assert_eq!(key("foo@1.0.0").bare_name(), "foo");
    }

    #[test]
    fn test_bare_name_scoped() {
        assert_eq!(key("@scope/pkg@1.0.0").bare_name(), "@scope/pkg");
    }

    #[test]
    fn test_bare_name_with_peer_suffix() {
        assert_eq!(
            key("react-dom@18.2.0(react@18.2.0)").bare_name(),
            "react-dom"
        );
        assert_eq!(
            key("@tanstack/react-query@5.0.0(react@18.2.0)").bare_name(),
            "@tanstack/react-query"
        );
    }

    #[test]
    fn test_bare_name_without_version() {
        assert_eq!(key("foo").bare_name(), "foo");
    }

    #[test]
    fn test_is_candidate_for_bare_name() {
        assert!(key("foo@1.0.0").is_candidate_for("foo"));
        assert!(!key("foobar@1.0.0").is_candidate_for("foo"));
        assert!(!key("foo@1.0.0").is_candidate_for("fo"));
    }

    #[test]
    fn test_is_candidate_for_scoped_name() {
        assert!(key("@scope/pkg@1.0.0").is_candidate_for("@scope/pkg"));
        assert!(!key("@scope/pkg-extra@1.0.0").is_candidate_for("@scope/pkg"));
    }

    #[test]
    fn test_is_candidate_for_version_qualified_name() {
        assert!(key("foo@1.0.0(react@18.2.0)").is_candidate_for("foo@1.0.0"));
        assert!(!key("foo@1.0.0").is_candidate_for("foo@1.0.0"));
        // A bare name never reaches into peer suffixes
        assert!(!key("foo(bar)").is_candidate_for("foo"));
    }
}
