use std::path::PathBuf;

/// Named set of root packages, evaluated in request order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    /// Group name, e.g. the bundler cache group it feeds
    pub name: String,
    /// Root package names, bare or version-qualified
    pub roots: Vec<String>,
    /// Extra module patterns matched alongside the descendant pattern
    pub test_patterns: Vec<String>,
}

impl GroupSpec {
    pub fn new(name: impl Into<String>, roots: Vec<String>) -> Self {
        Self {
            name: name.into(),
            roots,
            test_patterns: Vec::new(),
        }
    }

    pub fn with_test_patterns(mut self, test_patterns: Vec<String>) -> Self {
        self.test_patterns = test_patterns;
        self
    }
}

/// PatternRequest - Internal request DTO for the build-patterns use case
#[derive(Debug, Clone)]
pub struct PatternRequest {
    /// Path to the project directory containing the lockfile
    pub project_path: PathBuf,
    /// Groups in evaluation order; earlier groups claim shared packages first
    pub groups: Vec<GroupSpec>,
    /// Module identifiers to classify against the groups
    pub module_ids: Vec<String>,
}

impl PatternRequest {
    pub fn new(project_path: PathBuf, groups: Vec<GroupSpec>) -> Self {
        Self {
            project_path,
            groups,
            module_ids: Vec::new(),
        }
    }

    pub fn with_module_ids(mut self, module_ids: Vec<String>) -> Self {
        self.module_ids = module_ids;
        self
    }
}
