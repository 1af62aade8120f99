use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::PatternFormatter;

/// Factory for creating pattern formatters
///
/// Selects the formatter adapter for the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// `list_packages` only affects the text format; JSON always carries
    /// the package list.
    ///
    /// # Examples
    /// ```
    /// use pnpm_descendants::application::dto::OutputFormat;
    /// use pnpm_descendants::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, list_packages: bool) -> Box<dyn PatternFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Text if list_packages => Box::new(TextFormatter::with_package_list()),
            OutputFormat::Text => Box::new(TextFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pnpm_descendants::application::dto::OutputFormat;
    /// use pnpm_descendants::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON output...",
            OutputFormat::Text => "📝 Generating text output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{GroupView, LockfileView, PatternReadModel};

    fn model() -> PatternReadModel {
        PatternReadModel {
            lockfile: LockfileView {
                path: "pnpm-lock.yaml".to_string(),
                version: None,
                package_count: 1,
            },
            groups: vec![GroupView {
                name: "foo".to_string(),
                roots: vec!["foo".to_string()],
                pattern: r"node_modules[\\/](?:foo)".to_string(),
                names: vec!["foo".to_string()],
                packages: vec!["foo@1.0.0".to_string()],
            }],
            modules: vec![],
        }
    }

    #[test]
    fn test_create_json_formatter() {
        let output = FormatterFactory::create(OutputFormat::Json, false)
            .format(&model())
            .unwrap();
        assert!(output.trim_start().starts_with('{'));
    }

    #[test]
    fn test_create_text_formatter() {
        let output = FormatterFactory::create(OutputFormat::Text, false)
            .format(&model())
            .unwrap();
        assert_eq!(output, "foo: node_modules[\\\\/](?:foo)\n");
    }

    #[test]
    fn test_create_text_formatter_with_package_list() {
        let output = FormatterFactory::create(OutputFormat::Text, true)
            .format(&model())
            .unwrap();
        assert!(output.ends_with("\n  foo@1.0.0\n"));
    }

    #[test]
    fn test_progress_message_text() {
        let message = FormatterFactory::progress_message(OutputFormat::Text);
        assert_eq!(message, "📝 Generating text output...");
    }
}
