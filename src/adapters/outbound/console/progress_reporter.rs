use crate::ports::outbound::ProgressReporter;
use owo_colors::{OwoColorize, Stream};

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so it never interferes with patterns printed on stdout.
/// Warnings and completion lines are coloured when stderr is a terminal.
pub struct StderrProgressReporter {
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Suppresses informational messages; warnings and errors are still shown
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let counter = format!("[{}/{}]", current, total);
        match message {
            Some(msg) => eprintln!(
                "   {} {}",
                counter.if_supports_color(Stream::Stderr, |t| t.dimmed()),
                msg
            ),
            None => eprintln!(
                "   {}",
                counter.if_supports_color(Stream::Stderr, |t| t.dimmed())
            ),
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |t| t.yellow())
        );
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!(
                "{}",
                message.if_supports_color(Stream::Stderr, |t| t.green())
            );
        }
    }
}
