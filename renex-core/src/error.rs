use thiserror::Error;

/// Errors that can occur while compiling a rename pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The regular expression failed to compile
    #[error("Invalid regex: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// The regular expression source was empty
    #[error("Regex pattern is empty")]
    Empty,
}
