//! Pattern read model for query operations

/// Main read model for generated patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternReadModel {
    pub lockfile: LockfileView,
    /// Groups in evaluation order
    pub groups: Vec<GroupView>,
    /// Classified module identifiers, in request order
    pub modules: Vec<ModuleMatchView>,
}

/// View of the lockfile the patterns were built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockfileView {
    pub path: String,
    pub version: Option<String>,
    pub package_count: usize,
}

/// View of one evaluated group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub name: String,
    pub roots: Vec<String>,
    /// Regular expression source
    pub pattern: String,
    /// Bare package names covered by `pattern`
    pub names: Vec<String>,
    /// Full snapshot keys claimed by the group
    pub packages: Vec<String>,
}

impl GroupView {
    /// True when earlier groups claimed every package this group reaches
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatchView {
    pub module_id: String,
    pub group: Option<String>,
}
