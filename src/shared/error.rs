use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - patterns generated, every `--match` identifier was claimed by a group
    Success = 0,
    /// At least one `--match` identifier did not match any group
    UnmatchedModules = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing lockfile, unknown package, malformed config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnmatchedModules => write!(f, "Unmatched Modules (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for descendant pattern generation.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Every variant is fatal to the configuration build that triggered it.
#[derive(Debug, Error)]
pub enum DescendantError {
    #[error("pnpm-lock.yaml file not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse pnpm-lock.yaml file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the lockfile was written by pnpm 9 or later and contains a 'snapshots' section")]
    LockfileParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Package not found: {name}\n\n💡 Hint: Check the spelling, or run `pnpm install` so the package is recorded in pnpm-lock.yaml")]
    PackageNotFound { name: String },

    #[error("Package ambiguous: {}\n\n💡 Hint: Qualify \"{name}\" with a version, e.g. \"{name}@<version>\"", .matches.join(", "))]
    AmbiguousPackage { name: String, matches: Vec<String> },

    #[error("Missing snapshot for {key} (referenced by {parent})\n\n💡 Hint: The lockfile appears to be out of date; run `pnpm install` to regenerate it")]
    MissingDependencyRecord { key: String, parent: String },

    #[error("Invalid pattern: {pattern}\nDetails: {details}")]
    InvalidPattern { pattern: String, details: String },

    /// Validation error for configuration and requests
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ExitCode tests
    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::UnmatchedModules.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::UnmatchedModules),
            "Unmatched Modules (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    // DescendantError tests
    #[test]
    fn test_lockfile_not_found_display() {
        let error = DescendantError::LockfileNotFound {
            path: PathBuf::from("/test/path/pnpm-lock.yaml"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("pnpm-lock.yaml file not found"));
        assert!(display.contains("/test/path/pnpm-lock.yaml"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_lockfile_parse_error_display() {
        let error = DescendantError::LockfileParseError {
            path: PathBuf::from("/test/pnpm-lock.yaml"),
            details: "missing field `snapshots`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse pnpm-lock.yaml file"));
        assert!(display.contains("missing field `snapshots`"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_package_not_found_display() {
        let error = DescendantError::PackageNotFound {
            name: "left-pad".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.starts_with("Package not found: left-pad"));
    }

    #[test]
    fn test_ambiguous_package_lists_every_match() {
        let error = DescendantError::AmbiguousPackage {
            name: "react".to_string(),
            matches: vec!["react@17.0.2".to_string(), "react@18.2.0".to_string()],
        };
        let display = format!("{}", error);
        assert!(display.starts_with("Package ambiguous: react@17.0.2, react@18.2.0"));
        assert!(display.contains("\"react@<version>\""));
    }

    #[test]
    fn test_missing_dependency_record_display() {
        let error = DescendantError::MissingDependencyRecord {
            key: "bar@2.0.0".to_string(),
            parent: "foo@1.0.0".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Missing snapshot for bar@2.0.0"));
        assert!(display.contains("referenced by foo@1.0.0"));
    }

    #[test]
    fn test_invalid_pattern_display() {
        let error = DescendantError::InvalidPattern {
            pattern: "(".to_string(),
            details: "unclosed group".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid pattern: ("));
        assert!(display.contains("unclosed group"));
    }

    #[test]
    fn test_security_error_display() {
        let error = DescendantError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }
}
