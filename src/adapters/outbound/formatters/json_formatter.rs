use crate::application::read_models::{GroupView, LockfileView, ModuleMatchView, PatternReadModel};
use crate::ports::outbound::PatternFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Document<'a> {
    lockfile: Lockfile<'a>,
    groups: Vec<Group<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    modules: Vec<Module<'a>>,
}

#[derive(Debug, Serialize)]
struct Lockfile<'a> {
    path: &'a str,
    #[serde(rename = "lockfileVersion", skip_serializing_if = "Option::is_none")]
    lockfile_version: Option<&'a str>,
    #[serde(rename = "packageCount")]
    package_count: usize,
}

#[derive(Debug, Serialize)]
struct Group<'a> {
    name: &'a str,
    roots: &'a [String],
    pattern: &'a str,
    names: &'a [String],
    packages: &'a [String],
}

#[derive(Debug, Serialize)]
struct Module<'a> {
    id: &'a str,
    group: Option<&'a str>,
}

/// JsonFormatter adapter emitting one pretty-printed JSON document
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternFormatter for JsonFormatter {
    fn format(&self, model: &PatternReadModel) -> Result<String> {
        let document = Document {
            lockfile: self.build_lockfile(&model.lockfile),
            groups: model.groups.iter().map(|g| self.build_group(g)).collect(),
            modules: model.modules.iter().map(|m| self.build_module(m)).collect(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}

impl JsonFormatter {
    fn build_lockfile<'a>(&self, lockfile: &'a LockfileView) -> Lockfile<'a> {
        Lockfile {
            path: &lockfile.path,
            lockfile_version: lockfile.version.as_deref(),
            package_count: lockfile.package_count,
        }
    }

    fn build_group<'a>(&self, group: &'a GroupView) -> Group<'a> {
        Group {
            name: &group.name,
            roots: &group.roots,
            pattern: &group.pattern,
            names: &group.names,
            packages: &group.packages,
        }
    }

    fn build_module<'a>(&self, module: &'a ModuleMatchView) -> Module<'a> {
        Module {
            id: &module.module_id,
            group: module.group.as_deref(),
        }
    }
}
