mod cli;

use cli::Args;
use pnpm_descendants::adapters::outbound::console::StderrProgressReporter;
use pnpm_descendants::adapters::outbound::filesystem::FileSystemReader;
use pnpm_descendants::application::dto::{GroupSpec, PatternRequest};
use pnpm_descendants::application::factories::{FormatterFactory, PresenterFactory};
use pnpm_descendants::application::read_models::PatternReadModelBuilder;
use pnpm_descendants::application::use_cases::BuildPatternsUseCase;
use pnpm_descendants::config::{self, ConfigFile};
use pnpm_descendants::shared::error::{DescendantError, ExitCode};
use pnpm_descendants::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

/// Name of the group formed by positional root arguments
const DEFAULT_GROUP: &str = "default";

fn main() {
    // Parse errors exit with code 2 from clap itself
    let args = Args::parse_args();

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    // Validate project directory
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let config = load_config(&args, &project_path)?;

    // Create adapters (Dependency Injection)
    let lockfile_reader = match config.lockfile.as_deref() {
        Some(lockfile) => FileSystemReader::with_lockfile_name(lockfile),
        None => FileSystemReader::new(),
    };
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = BuildPatternsUseCase::new(lockfile_reader, progress_reporter);

    // Positional roots take precedence over config groups
    let groups = if args.roots.is_empty() {
        config.group_specs()
    } else {
        vec![GroupSpec::new(DEFAULT_GROUP, args.roots)]
    };
    let request = PatternRequest::new(project_path, groups).with_module_ids(args.matches);

    let response = use_case.execute(request)?;

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(args.format));
    }

    let model = PatternReadModelBuilder::build(&response);
    let formatted_output = FormatterFactory::create(args.format, args.list).format(&model)?;

    PresenterFactory::create(args.output.into()).present(&formatted_output)?;

    if response.has_unmatched_modules() {
        Ok(ExitCode::UnmatchedModules)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Explicit `--config` must exist; otherwise the project directory is searched
fn load_config(args: &Args, project_path: &Path) -> Result<ConfigFile> {
    match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(project_path)?.unwrap_or_default()),
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DescendantError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| DescendantError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(DescendantError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(DescendantError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
