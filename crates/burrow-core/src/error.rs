use thiserror::Error;

/// Reasons a string cannot be decoded as a base-62 number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("cannot decode an empty string")]
    Empty,
    #[error("invalid base62 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("decoded value does not fit in 64 bits")]
    Overflow,
}

/// Errors related to the core types of the URL shortener.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}
