use crate::adapters::outbound::pnpm::PnpmLockfileParser;
use crate::descendant_selection::domain::LockfileSnapshot;
use crate::ports::outbound::LockfileReader;
use crate::shared::error::DescendantError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Lockfile written by pnpm at the workspace root
pub const DEFAULT_LOCKFILE_NAME: &str = "pnpm-lock.yaml";

/// FileSystemReader adapter for reading the pnpm lockfile from disk
///
/// The lockfile location is resolved relative to the project directory.
pub struct FileSystemReader {
    lockfile_name: PathBuf,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            lockfile_name: PathBuf::from(DEFAULT_LOCKFILE_NAME),
        }
    }

    /// Reads a lockfile at a custom location relative to the project directory
    pub fn with_lockfile_name(lockfile_name: impl Into<PathBuf>) -> Self {
        Self {
            lockfile_name: lockfile_name.into(),
        }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn lockfile_path(&self, project_path: &Path) -> PathBuf {
        project_path.join(&self.lockfile_name)
    }

    fn read_lockfile(&self, project_path: &Path) -> Result<LockfileSnapshot> {
        let lockfile_path = self.lockfile_path(project_path);

        if !lockfile_path.exists() {
            return Err(DescendantError::LockfileNotFound {
                path: lockfile_path,
                suggestion: format!(
                    "{} does not exist in project directory \"{}\".\n   \
                     Please run in the root directory of a pnpm workspace, or specify the correct path with the --path option.",
                    self.lockfile_name.display(),
                    project_path.display()
                ),
            }
            .into());
        }

        let content = read_regular_file(&lockfile_path, "pnpm-lock.yaml").map_err(|e| {
            DescendantError::FileReadError {
                path: lockfile_path.clone(),
                details: e.to_string(),
            }
        })?;

        PnpmLockfileParser::parse(&content).map_err(|e| {
            DescendantError::LockfileParseError {
                path: lockfile_path,
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}
