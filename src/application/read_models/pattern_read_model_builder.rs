//! Builder for constructing PatternReadModel from a use case response

use super::pattern_read_model::{GroupView, LockfileView, ModuleMatchView, PatternReadModel};
use crate::application::dto::{GroupResult, ModuleMatch, PatternResponse};

/// Builder for constructing PatternReadModel from a PatternResponse
pub struct PatternReadModelBuilder;

impl PatternReadModelBuilder {
    pub fn build(response: &PatternResponse) -> PatternReadModel {
        PatternReadModel {
            lockfile: LockfileView {
                path: response.lockfile_path.display().to_string(),
                version: response.lockfile_version.clone(),
                package_count: response.package_count,
            },
            groups: response.groups.iter().map(Self::build_group).collect(),
            modules: response
                .module_matches
                .iter()
                .map(Self::build_module_match)
                .collect(),
        }
    }

    fn build_group(group: &GroupResult) -> GroupView {
        GroupView {
            name: group.name.clone(),
            roots: group.roots.clone(),
            pattern: group.pattern.as_str().to_string(),
            names: group.pattern.names().to_vec(),
            packages: group.packages.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn build_module_match(module_match: &ModuleMatch) -> ModuleMatchView {
        ModuleMatchView {
            module_id: module_match.module_id.clone(),
            group: module_match.group.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descendant_selection::domain::PackageKey;
    use crate::descendant_selection::services::{ModuleTest, PatternBuilder};
    use std::path::PathBuf;

    fn response() -> PatternResponse {
        let packages = vec![
            PackageKey::new("@scope/a@1.0.0".to_string()).unwrap(),
            PackageKey::new("b@2.0.0(@scope/a@1.0.0)".to_string()).unwrap(),
        ];
        let pattern = PatternBuilder::build(&packages).unwrap();
        PatternResponse {
            lockfile_path: PathBuf::from("/repo/pnpm-lock.yaml"),
            lockfile_version: Some("9.0".to_string()),
            package_count: 5,
            groups: vec![GroupResult {
                name: "vendor".to_string(),
                roots: vec!["@scope/a".to_string()],
                packages,
                test: ModuleTest::default().with_descendants(&pattern),
                pattern,
            }],
            module_matches: vec![ModuleMatch {
                module_id: "/repo/src/main.ts".to_string(),
                group: None,
            }],
        }
    }

    #[test]
    fn test_build_lockfile_view() {
        let model = PatternReadModelBuilder::build(&response());
        assert_eq!(model.lockfile.path, "/repo/pnpm-lock.yaml");
        assert_eq!(model.lockfile.version.as_deref(), Some("9.0"));
        assert_eq!(model.lockfile.package_count, 5);
    }

    #[test]
    fn test_build_group_view() {
        let model = PatternReadModelBuilder::build(&response());
        let group = &model.groups[0];

        assert_eq!(group.name, "vendor");
        assert_eq!(group.roots, vec!["@scope/a"]);
        assert_eq!(group.names, vec!["@scope/a", "b"]);
        assert_eq!(
            group.packages,
            vec!["@scope/a@1.0.0", "b@2.0.0(@scope/a@1.0.0)"]
        );
        assert_eq!(group.pattern, r"node_modules[\\/](?:@scope[\\/]a|b)");
        assert!(!group.is_empty());
    }

    #[test]
    fn test_build_module_views() {
        let model = PatternReadModelBuilder::build(&response());
        assert_eq!(
            model.modules,
            vec![ModuleMatchView {
                module_id: "/repo/src/main.ts".to_string(),
                group: None,
            }]
        );
    }
}
