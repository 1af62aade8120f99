use crate::descendant_selection::domain::{Dependency, LockfileSnapshot, PackageKey, SnapshotEntry};
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};

/// Top-level shape of `pnpm-lock.yaml`; only the fields this tool reads
#[derive(Debug, Deserialize)]
struct PnpmLock {
    #[serde(default, rename = "lockfileVersion")]
    lockfile_version: Option<Value>,
    snapshots: Mapping,
}

/// A `snapshots` value. Other fields (`optional`, `transitivePeerDependencies`, ...) are ignored.
#[derive(Debug, Deserialize)]
struct PnpmSnapshot {
    #[serde(default)]
    dependencies: Option<Mapping>,
}

/// PnpmLockfileParser - decodes `pnpm-lock.yaml` into a [`LockfileSnapshot`]
///
/// Everything the traversal relies on is checked here, so a malformed
/// lockfile fails at load time instead of halfway through a walk.
pub struct PnpmLockfileParser;

impl PnpmLockfileParser {
    pub fn parse(content: &str) -> Result<LockfileSnapshot> {
        let lockfile: PnpmLock =
            serde_yaml_ng::from_str(content).context("Failed to parse pnpm-lock.yaml")?;

        let lockfile_version = lockfile.lockfile_version.as_ref().and_then(display_scalar);

        let entries = lockfile
            .snapshots
            .into_iter()
            .map(|(key, value)| Self::parse_entry(key, value))
            .collect::<Result<Vec<_>>>()?;

        LockfileSnapshot::new(lockfile_version, entries)
    }

    fn parse_entry(key: Value, value: Value) -> Result<SnapshotEntry> {
        let key = match key {
            Value::String(key) => PackageKey::new(key)?,
            other => anyhow::bail!("Snapshot key must be a string, found {:?}", other),
        };

        // `pkg@1.0.0: {}` and a bare `pkg@1.0.0:` are both leaves
        let snapshot: Option<PnpmSnapshot> = serde_yaml_ng::from_value(value)
            .with_context(|| format!("Invalid snapshot for {}", key))?;

        let dependencies = match snapshot.and_then(|s| s.dependencies) {
            Some(mapping) => Self::parse_dependencies(&key, mapping)?,
            None => Vec::new(),
        };

        Ok(SnapshotEntry::new(key, dependencies))
    }

    fn parse_dependencies(owner: &PackageKey, mapping: Mapping) -> Result<Vec<Dependency>> {
        mapping
            .into_iter()
            .map(|(name, version)| {
                let Value::String(name) = name else {
                    anyhow::bail!("Dependency name of {} must be a string, found {:?}", owner, name);
                };
                let version = match version {
                    Value::String(version) => version,
                    // `1.10` would come back as 1.1 and point at a snapshot that does not exist
                    Value::Number(_) | Value::Bool(_) => anyhow::bail!(
                        "Dependency {} of {} has an unquoted version {}; quote it so the text is kept",
                        name,
                        owner,
                        display_scalar(&version).unwrap_or_default()
                    ),
                    other => anyhow::bail!(
                        "Dependency {} of {} must have a scalar version, found {:?}",
                        name,
                        owner,
                        other
                    ),
                };
                Ok(Dependency::new(name, version))
            })
            .collect()
    }
}

/// Renders a scalar for display only. Older lockfiles write `lockfileVersion: 5.4` unquoted.
fn display_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
