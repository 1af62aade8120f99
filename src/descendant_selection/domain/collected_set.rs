use super::PackageKey;
use std::collections::HashSet;

/// Keys already emitted by a collector session.
///
/// Grows monotonically; there is deliberately no `remove` or `clear`.
#[derive(Debug, Clone, Default)]
pub struct CollectedSet {
    keys: HashSet<PackageKey>,
}

impl CollectedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as collected. Returns false if it was already present.
    pub fn insert(&mut self, key: PackageKey) -> bool {
        self.keys.insert(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = CollectedSet::new();
        let key = PackageKey::new("foo@1.0.0".to_string()).unwrap();

        assert!(set.insert(key.clone()));
        assert!(!set.insert(key));
        assert_eq!(set.len(), 1);
        assert!(set.contains("foo@1.0.0"));
        assert!(!set.contains("foo@2.0.0"));
    }
}
