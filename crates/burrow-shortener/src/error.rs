use burrow_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("short url not found: {0}")]
    NotFound(String),
    #[error("no more short codes can be issued")]
    Exhausted,
}

impl From<RegistryError> for ShortenerError {
    fn from(value: RegistryError) -> Self {
        match value {
            RegistryError::NotFound(key) => Self::NotFound(key),
            RegistryError::InvalidFormat(code) => Self::InvalidShortCode(code),
            RegistryError::Exhausted => Self::Exhausted,
        }
    }
}
