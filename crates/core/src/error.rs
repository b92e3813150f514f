use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotableError {
    /// A name could not be split into first and last components.
    #[error("Malformed name: {0}")]
    MalformedInput(String),
}
