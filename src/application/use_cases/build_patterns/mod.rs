use crate::application::dto::{GroupResult, GroupSpec, ModuleMatch, PatternRequest, PatternResponse};
use crate::descendant_selection::domain::{LockfileSnapshot, ModuleInfo};
use crate::descendant_selection::services::{DescendantCollector, ModuleTest, PatternBuilder};
use crate::ports::outbound::{LockfileReader, ProgressReporter};
use crate::shared::error::DescendantError;
use crate::shared::Result;
use std::collections::HashSet;

/// BuildPatternsUseCase - turns lockfile groups into bundler patterns
///
/// All groups of one request share a single [`DescendantCollector`], so a
/// package reachable from several groups belongs to the first group that
/// reaches it.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildPatternsUseCase<LR, PR> {
    lockfile_reader: LR,
    progress_reporter: PR,
}

impl<LR, PR> BuildPatternsUseCase<LR, PR>
where
    LR: LockfileReader,
    PR: ProgressReporter,
{
    pub fn new(lockfile_reader: LR, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Fails on the first invalid group, unreadable lockfile, or unresolvable
    /// package. No partial response is returned.
    pub fn execute(&self, request: PatternRequest) -> Result<PatternResponse> {
        // Step 1: Validate groups and compile their extra patterns before any I/O
        let tests = Self::validate_groups(&request.groups)?;

        // Step 2: Read and parse lockfile
        let snapshot = self.read_and_report_lockfile(&request)?;

        // Step 3: Evaluate groups in order through one collector session
        let groups = self.evaluate_groups(&snapshot, request.groups, tests)?;

        // Step 4: Classify requested modules
        let module_matches = self.classify_modules(&groups, &request.module_ids);

        self.progress_reporter.report_completion(&format!(
            "✅ Generated {} pattern(s) covering {} package(s)",
            groups.len(),
            groups.iter().map(|g| g.packages.len()).sum::<usize>()
        ));

        Ok(PatternResponse {
            lockfile_path: self.lockfile_reader.lockfile_path(&request.project_path),
            lockfile_version: snapshot.lockfile_version().map(str::to_string),
            package_count: snapshot.len(),
            groups,
            module_matches,
        })
    }

    /// Checks group names and roots, and compiles each group's extra patterns
    fn validate_groups(groups: &[GroupSpec]) -> Result<Vec<ModuleTest>> {
        if groups.is_empty() {
            return Err(validation(
                "No groups to build. Pass root packages on the command line or define 'groups' in the config file.",
            ));
        }

        let mut names = HashSet::new();
        groups
            .iter()
            .enumerate()
            .map(|(i, group)| {
                if group.name.trim().is_empty() {
                    return Err(validation(format!("groups[{}].name must not be empty", i)));
                }
                if !names.insert(group.name.as_str()) {
                    return Err(validation(format!(
                        "Duplicate group name '{}'",
                        group.name
                    )));
                }
                if group.roots.is_empty() {
                    return Err(validation(format!(
                        "Group '{}' must list at least one root package",
                        group.name
                    )));
                }
                ModuleTest::from_sources(&group.test_patterns)
            })
            .collect()
    }

    fn read_and_report_lockfile(&self, request: &PatternRequest) -> Result<LockfileSnapshot> {
        self.progress_reporter.report(&format!(
            "📖 Loading lockfile from: {}",
            self.lockfile_reader
                .lockfile_path(&request.project_path)
                .display()
        ));

        let snapshot = self.lockfile_reader.read_lockfile(&request.project_path)?;

        let version = snapshot
            .lockfile_version()
            .map(|v| format!(" (lockfileVersion {})", v))
            .unwrap_or_default();
        self.progress_reporter.report(&format!(
            "✅ Detected {} package snapshot(s){}",
            snapshot.len(),
            version
        ));

        Ok(snapshot)
    }

    fn evaluate_groups(
        &self,
        snapshot: &LockfileSnapshot,
        specs: Vec<GroupSpec>,
        tests: Vec<ModuleTest>,
    ) -> Result<Vec<GroupResult>> {
        let mut collector = DescendantCollector::new(snapshot);
        let total = specs.len();
        let mut results = Vec::with_capacity(total);

        for (i, (spec, test)) in specs.into_iter().zip(tests).enumerate() {
            self.progress_reporter
                .report_progress(i + 1, total, Some(spec.name.as_str()));

            let packages = collector.collect_descendants(&spec.roots)?;
            let pattern = PatternBuilder::build(&packages)?;

            if pattern.is_empty() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Group '{}' has no packages left; earlier groups already claimed every descendant of {}. Its pattern matches nothing.",
                    spec.name,
                    spec.roots.join(", ")
                ));
            }

            results.push(GroupResult {
                test: test.with_descendants(&pattern),
                name: spec.name,
                roots: spec.roots,
                packages,
                pattern,
            });
        }

        Ok(results)
    }

    /// First group whose test matches wins
    fn classify_modules(&self, groups: &[GroupResult], module_ids: &[String]) -> Vec<ModuleMatch> {
        module_ids
            .iter()
            .map(|module_id| {
                let module = ModuleInfo::new(module_id.as_str());
                let group = groups
                    .iter()
                    .find(|g| g.test.test(&module))
                    .map(|g| g.name.clone());
                if group.is_none() {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Module '{}' did not match any group.",
                        module_id
                    ));
                }
                ModuleMatch {
                    module_id: module_id.clone(),
                    group,
                }
            })
            .collect()
    }
}

fn validation(message: impl Into<String>) -> anyhow::Error {
    DescendantError::Validation {
        message: message.into(),
    }
    .into()
}
