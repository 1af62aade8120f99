use std::path::{Path, PathBuf};
use pnpm_descendants::prelude::*;

/// Mock LockfileReader decoding an in-memory pnpm-lock.yaml
pub struct MockLockfileReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockLockfileReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl LockfileReader for MockLockfileReader {
    fn lockfile_path(&self, project_path: &Path) -> PathBuf {
        project_path.join("pnpm-lock.yaml")
    }

    fn read_lockfile(&self, _project_path: &Path) -> Result<LockfileSnapshot> {
        if self.should_fail {
            anyhow::bail!("Mock lockfile read failure");
        }
        PnpmLockfileParser::parse(&self.content)
    }
}
