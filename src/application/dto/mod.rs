/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod pattern_request;
mod pattern_response;

pub use output_format::OutputFormat;
pub use pattern_request::{GroupSpec, PatternRequest};
pub use pattern_response::{GroupResult, ModuleMatch, PatternResponse};
