use crate::application::read_models::PatternReadModel;
use crate::shared::Result;

/// PatternFormatter port for rendering generated patterns
///
/// This port abstracts the formatting logic for different output formats
/// (plain text, JSON).
pub trait PatternFormatter {
    /// Formats the patterns held by the read model
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &PatternReadModel) -> Result<String>;
}
