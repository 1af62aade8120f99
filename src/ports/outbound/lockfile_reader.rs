use crate::descendant_selection::domain::LockfileSnapshot;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// LockfileReader port for loading the lockfile of a project
///
/// This port abstracts the file system and the lockfile format: the
/// application only ever sees the decoded [`LockfileSnapshot`].
pub trait LockfileReader {
    /// Location of the lockfile for the given project directory
    fn lockfile_path(&self, project_path: &Path) -> PathBuf;

    /// Reads and decodes the lockfile of the project at `project_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The lockfile does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The content is not a valid lockfile
    fn read_lockfile(&self, project_path: &Path) -> Result<LockfileSnapshot>;
}
