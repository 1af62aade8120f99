use crate::descendant_selection::domain::{DescendantPattern, PackageKey};
use crate::descendant_selection::services::ModuleTest;
use std::path::PathBuf;

/// Result of evaluating one group
#[derive(Debug, Clone)]
pub struct GroupResult {
    pub name: String,
    pub roots: Vec<String>,
    /// Packages claimed by this group, in discovery order
    pub packages: Vec<PackageKey>,
    /// `node_modules` pattern over `packages`
    pub pattern: DescendantPattern,
    /// Predicate combining `pattern` with the group's extra test patterns
    pub test: ModuleTest,
}

/// Which group, if any, claimed a module identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatch {
    pub module_id: String,
    pub group: Option<String>,
}

/// PatternResponse - Internal response DTO from the build-patterns use case
#[derive(Debug, Clone)]
pub struct PatternResponse {
    pub lockfile_path: PathBuf,
    pub lockfile_version: Option<String>,
    /// Number of snapshots in the lockfile
    pub package_count: usize,
    pub groups: Vec<GroupResult>,
    pub module_matches: Vec<ModuleMatch>,
}

impl PatternResponse {
    /// True when some requested module identifier matched no group
    pub fn has_unmatched_modules(&self) -> bool {
        self.module_matches.iter().any(|m| m.group.is_none())
    }

    pub fn group(&self, name: &str) -> Option<&GroupResult> {
        self.groups.iter().find(|g| g.name == name)
    }
}
