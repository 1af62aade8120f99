/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user feedback (e.g., to stderr) so that stdout
/// stays reserved for the generated patterns.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a sequence of steps
    ///
    /// # Arguments
    /// * `current` - Current step (1-based)
    /// * `total` - Total number of steps
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
