use super::PackageKey;
use crate::shared::Result;
use std::collections::HashMap;

/// A dependency declared by a snapshot: name and version descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    name: String,
    version: String,
}

impl Dependency {
    pub fn new(name: String, version: String) -> Self {
        Self { name, version }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Key of the snapshot this dependency points at
    pub fn key(&self) -> Result<PackageKey> {
        PackageKey::for_dependency(&self.name, &self.version)
    }
}

/// One `snapshots` entry: a resolved package and its dependencies in declared order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    key: PackageKey,
    dependencies: Vec<Dependency>,
}

impl SnapshotEntry {
    pub fn new(key: PackageKey, dependencies: Vec<Dependency>) -> Self {
        Self { key, dependencies }
    }

    pub fn key(&self) -> &PackageKey {
        &self.key
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn is_leaf(&self) -> bool {
        self.dependencies.is_empty()
    }
}

/// LockfileSnapshot aggregate: the immutable package graph of one lockfile
///
/// Entries keep document order so that listings and error messages are stable.
#[derive(Debug, Clone, Default)]
pub struct LockfileSnapshot {
    lockfile_version: Option<String>,
    entries: Vec<SnapshotEntry>,
    index: HashMap<PackageKey, usize>,
}

impl LockfileSnapshot {
    /// Builds the index, rejecting duplicate keys
    pub fn new(lockfile_version: Option<String>, entries: Vec<SnapshotEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.key.clone(), position).is_some() {
                anyhow::bail!("Duplicate snapshot key: {}", entry.key);
            }
        }

        Ok(Self {
            lockfile_version,
            entries,
            index,
        })
    }

    pub fn lockfile_version(&self) -> Option<&str> {
        self.lockfile_version.as_deref()
    }

    /// All package keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &PackageKey> {
        self.entries.iter().map(SnapshotEntry::key)
    }

    pub fn get(&self, key: &str) -> Option<&SnapshotEntry> {
        self.index.get(key).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dependency_count(&self) -> usize {
        self.entries.iter().map(|e| e.dependencies.len()).sum()
    }
}
