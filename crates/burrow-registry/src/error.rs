use thiserror::Error;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The code or id is well formed but no record exists for it.
    #[error("record not found: {0}")]
    NotFound(String),
    /// The code contains characters outside the base-62 alphabet, or is empty.
    #[error("invalid short code format: {0:?}")]
    InvalidFormat(String),
    #[error("identifier space exhausted")]
    Exhausted,
}
