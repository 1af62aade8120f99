/// Result alias with anyhow::Error as the error type.
/// Domain failures are `DescendantError` values carried inside the anyhow error.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
