use crate::application::read_models::{GroupView, PatternReadModel};
use crate::ports::outbound::PatternFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Marker printed for modules no group claimed
const UNMATCHED: &str = "(no group)";

/// TextFormatter adapter printing one `group: pattern` line per group
///
/// With `list_packages`, the claimed snapshot keys follow each group line,
/// indented by two spaces. Classified modules come last as
/// `module -> group` lines.
pub struct TextFormatter {
    list_packages: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self {
            list_packages: false,
        }
    }

    pub fn with_package_list() -> Self {
        Self {
            list_packages: true,
        }
    }

    fn write_group(&self, output: &mut String, group: &GroupView) -> std::fmt::Result {
        writeln!(output, "{}: {}", group.name, group.pattern)?;
        if self.list_packages {
            for package in &group.packages {
                writeln!(output, "  {}", package)?;
            }
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternFormatter for TextFormatter {
    fn format(&self, model: &PatternReadModel) -> Result<String> {
        let mut output = String::new();

        for group in &model.groups {
            self.write_group(&mut output, group)?;
        }

        if !model.modules.is_empty() {
            output.push('\n');
            for module in &model.modules {
                writeln!(
                    output,
                    "{} -> {}",
                    module.module_id,
                    module.group.as_deref().unwrap_or(UNMATCHED)
                )?;
            }
        }

        Ok(output)
    }
}
