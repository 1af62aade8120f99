//! Configuration file support for pnpm-descendants.
//!
//! Provides YAML-based configuration through `pnpm-descendants.config.yml`
//! files: the lockfile location and the ordered list of groups to build.

use anyhow::{bail, Context};
use regex::Regex;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::application::dto::GroupSpec;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pnpm-descendants.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Lockfile path, relative to the project directory.
    pub lockfile: Option<String>,
    /// Groups in evaluation order.
    pub groups: Option<Vec<GroupConfig>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// One named group of root packages.
#[derive(Debug, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    pub roots: Vec<String>,
    /// Extra module patterns matched alongside the descendant pattern.
    pub test: Option<Vec<String>>,
}

impl ConfigFile {
    /// Configured groups as use case input, in file order.
    pub fn group_specs(&self) -> Vec<GroupSpec> {
        self.groups
            .iter()
            .flatten()
            .map(|group| {
                GroupSpec::new(group.name.clone(), group.roots.clone())
                    .with_test_patterns(group.test.clone().unwrap_or_default())
            })
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref lockfile) = config.lockfile {
        if lockfile.trim().is_empty() {
            bail!(
                "Invalid config: lockfile must not be empty.\n\n\
                 💡 Hint: Remove the field to use pnpm-lock.yaml, or give a path relative to the project directory."
            );
        }
    }

    let Some(ref groups) = config.groups else {
        return Ok(());
    };

    let mut names = HashSet::new();
    for (i, group) in groups.iter().enumerate() {
        if group.name.trim().is_empty() {
            bail!(
                "Invalid config: groups[{}].name must not be empty.\n\n\
                 💡 Hint: Each group needs a name, e.g. the cache group it feeds (\"react\").",
                i
            );
        }
        if !names.insert(group.name.as_str()) {
            bail!(
                "Invalid config: duplicate group name '{}'.\n\n\
                 💡 Hint: Group names must be unique.",
                group.name
            );
        }
        if group.roots.is_empty() {
            bail!(
                "Invalid config: groups[{}].roots must list at least one package.\n\n\
                 💡 Hint: Add the package names whose dependency trees belong to '{}'.",
                i,
                group.name
            );
        }
        for pattern in group.test.iter().flatten() {
            Regex::new(pattern).with_context(|| {
                format!(
                    "Invalid config: groups[{}].test contains an invalid regular expression: {}",
                    i, pattern
                )
            })?;
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
